/// Default tuning parameters for Pong.
///
/// Distances are in pixels and speeds in pixels per tick, so the speeds
/// only make sense at `TICK_RATE`.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Window
    pub const WINDOW_WIDTH: f32 = 640.0;
    pub const WINDOW_HEIGHT: f32 = 480.0;

    // Field
    pub const BOUNDARY_THICKNESS: f32 = 5.0;
    pub const NET_WIDTH: f32 = 10.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 60.0;
    pub const PADDLE_OFFSET: f32 = 10.0; // gap between boundary and paddle
    pub const PADDLE_SPEED: f32 = 10.0;

    // Ball
    pub const BALL_SIZE: f32 = 9.0;
    pub const BALL_SPEED: f32 = 8.0;
    pub const MAX_SERVE_ANGLE: u8 = 30; // degrees either side of horizontal

    // Match
    pub const WINNING_SCORE: u8 = 11;

    // Loop
    pub const TICK_RATE: u32 = 30; // ticks per second
}
