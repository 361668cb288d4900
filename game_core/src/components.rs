use glam::Vec2;

use crate::field::Rect;

/// Which end of the field a paddle (or a point) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Paddle component - a player's paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub rect: Rect,
}

impl Paddle {
    pub fn new(side: Side, rect: Rect) -> Self {
        Self { side, rect }
    }
}

/// Logical direction key of one paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleKey {
    Up,
    Down,
}

/// Paddle motion state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaddleState {
    #[default]
    Stopped,
    MovingUp,
    MovingDown,
}

impl PaddleState {
    /// Next state after a key-down.
    ///
    /// A moving paddle ignores key-downs unless `instant_reversal` is set,
    /// in which case the opposite key switches direction.
    pub fn on_key_down(self, key: PaddleKey, instant_reversal: bool) -> Self {
        match (self, key) {
            (PaddleState::Stopped, PaddleKey::Up) => PaddleState::MovingUp,
            (PaddleState::Stopped, PaddleKey::Down) => PaddleState::MovingDown,
            (PaddleState::MovingUp, PaddleKey::Down) if instant_reversal => {
                PaddleState::MovingDown
            }
            (PaddleState::MovingDown, PaddleKey::Up) if instant_reversal => PaddleState::MovingUp,
            (state, _) => state,
        }
    }

    /// Next state after a key-up. Only releasing the key that drives the
    /// current motion stops the paddle.
    pub fn on_key_up(self, key: PaddleKey) -> Self {
        match (self, key) {
            (PaddleState::MovingUp, PaddleKey::Up) => PaddleState::Stopped,
            (PaddleState::MovingDown, PaddleKey::Down) => PaddleState::Stopped,
            (state, _) => state,
        }
    }

    /// Vertical displacement for one tick (screen y grows downwards)
    pub fn delta_y(self, speed: f32) -> f32 {
        match self {
            PaddleState::Stopped => 0.0,
            PaddleState::MovingUp => -speed,
            PaddleState::MovingDown => speed,
        }
    }
}

/// Motion component attached to every paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleMotion {
    pub state: PaddleState,
}

impl PaddleMotion {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub rect: Rect,
    pub vel: Vec2, // pixels per tick
}

impl Ball {
    pub fn new(rect: Rect, vel: Vec2) -> Self {
        Self { rect, vel }
    }

    /// Re-center the ball and give it a fresh serve velocity.
    ///
    /// The angle is a whole number of degrees drawn uniformly from
    /// `[-max_angle, max_angle]`; the horizontal direction is a fair coin.
    /// Returns the chosen angle in degrees.
    pub fn serve(
        &mut self,
        center: Vec2,
        speed: f32,
        max_angle: u8,
        rng: &mut crate::GameRng,
    ) -> i32 {
        use rand::Rng;

        let max_angle = i32::from(max_angle);
        let degrees = rng.0.gen_range(-max_angle..=max_angle);
        let angle = (degrees as f32).to_radians();

        let mut vel = Vec2::new(angle.cos(), angle.sin()) * speed;
        if rng.0.gen_bool(0.5) {
            vel.x = -vel.x;
        }

        self.rect.set_center(center);
        self.vel = vel;
        degrees
    }
}
