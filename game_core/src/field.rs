use glam::Vec2;

use crate::components::Side;
use crate::config::Config;

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size * 0.5,
            size,
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    pub fn set_left(&mut self, x: f32) {
        self.pos.x = x;
    }

    pub fn set_right(&mut self, x: f32) {
        self.pos.x = x - self.size.x;
    }

    pub fn set_top(&mut self, y: f32) {
        self.pos.y = y;
    }

    pub fn set_bottom(&mut self, y: f32) {
        self.pos.y = y - self.size.y;
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.pos = center - self.size * 0.5;
    }

    /// Strict overlap test: rectangles that only share an edge do not collide
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// The static playing field: four boundaries and a decorative net
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub width: f32,
    pub height: f32,
    pub top: Rect,
    pub bottom: Rect,
    pub left: Rect,
    pub right: Rect,
    pub net: Rect,
}

impl Field {
    pub fn new(config: &Config) -> Self {
        let w = config.window_width;
        let h = config.window_height;
        let t = config.boundary_thickness;
        let n = config.net_width;

        Self {
            width: w,
            height: h,
            top: Rect::new(0.0, 0.0, w, t),
            bottom: Rect::new(0.0, h - t, w, t),
            left: Rect::new(0.0, 0.0, t, h),
            right: Rect::new(w - t, 0.0, t, h),
            net: Rect::new(w / 2.0 - n / 2.0, 0.0, n, h),
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// All five rectangles in draw order
    pub fn rects(&self) -> [Rect; 5] {
        [self.net, self.top, self.bottom, self.left, self.right]
    }

    /// Paddle rectangle at its spawn point, vertically centered
    pub fn paddle_spawn(&self, side: Side, config: &Config) -> Rect {
        let inset = config.boundary_thickness + config.paddle_offset;
        let x = match side {
            Side::Left => inset,
            Side::Right => self.width - inset - config.paddle_width,
        };
        let y = self.height / 2.0 - config.paddle_height / 2.0;
        Rect::new(x, y, config.paddle_width, config.paddle_height)
    }

    /// Ball rectangle centered on the field
    pub fn ball_spawn(&self, config: &Config) -> Rect {
        Rect::from_center_size(self.center(), Vec2::splat(config.ball_size))
    }
}
