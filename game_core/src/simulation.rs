use hecs::World;

use crate::{
    create_ball, create_paddle, step, Ball, Config, ConfigError, Control, Events, Field, GameRng,
    InputQueue, Match, Paddle, PaddleMotion, PaddleState, Side, Snapshot,
};

/// A complete two-player game: every piece of mutable state lives here
pub struct Game {
    pub world: World,
    pub field: Field,
    pub config: Config,
    pub game_match: Match,
    pub events: Events,
    pub input: InputQueue,
    pub rng: GameRng,
    tick: u64,
}

impl Game {
    /// Validate `config` and set up a match in the `Over` state
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let field = Field::new(&config);
        let mut world = World::new();

        // Create paddles
        create_paddle(&mut world, Side::Left, field.paddle_spawn(Side::Left, &config));
        create_paddle(&mut world, Side::Right, field.paddle_spawn(Side::Right, &config));

        // Create ball, at rest until the first serve
        create_ball(&mut world, field.ball_spawn(&config), glam::Vec2::ZERO);

        tracing::debug!(
            "New game on a {}x{} field, first to {}",
            field.width,
            field.height,
            config.winning_score
        );

        Ok(Self {
            world,
            field,
            config,
            game_match: Match::new(),
            events: Events::new(),
            input: InputQueue::new(),
            rng: GameRng::new(seed),
            tick: 0,
        })
    }

    /// Run one tick over the queued input
    pub fn tick(&mut self) -> Control {
        let control = step(
            &mut self.world,
            &self.field,
            &self.config,
            &mut self.game_match,
            &mut self.events,
            &mut self.input,
            &mut self.rng,
        );
        if control == Control::Continue {
            self.tick += 1;
        }
        control
    }

    /// Number of completed ticks
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut left_paddle = self.field.paddle_spawn(Side::Left, &self.config);
        let mut right_paddle = self.field.paddle_spawn(Side::Right, &self.config);
        for (_e, paddle) in self.world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Left => left_paddle = paddle.rect,
                Side::Right => right_paddle = paddle.rect,
            }
        }

        let ball = self
            .ball()
            .map(|ball| ball.rect)
            .unwrap_or_else(|| self.field.ball_spawn(&self.config));

        let score = self.game_match.score();
        Snapshot {
            tick: self.tick,
            field: self.field,
            left_paddle,
            right_paddle,
            ball,
            match_state: self.game_match.state(),
            left_score: score.left,
            right_score: score.right,
            winner: self.game_match.winner(self.config.winning_score),
        }
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn set_ball(&mut self, ball: Ball) {
        for (_e, current) in self.world.query_mut::<&mut Ball>() {
            *current = ball;
        }
    }

    pub fn paddle(&self, side: Side) -> Option<(Paddle, PaddleState)> {
        self.world
            .query::<(&Paddle, &PaddleMotion)>()
            .iter()
            .find(|(_e, (paddle, _))| paddle.side == side)
            .map(|(_e, (paddle, motion))| (*paddle, motion.state))
    }

    pub fn set_paddle(&mut self, side: Side, paddle: Paddle, state: PaddleState) {
        for (_e, (current, motion)) in self.world.query_mut::<(&mut Paddle, &mut PaddleMotion)>() {
            if current.side == side {
                *current = paddle;
                motion.state = state;
            }
        }
    }
}
