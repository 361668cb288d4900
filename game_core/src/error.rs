use thiserror::Error;

/// Rejected game configuration.
///
/// Raised by [`Config::validate`](crate::Config::validate) before any
/// simulation state is built. The game never runs with degenerate geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be finite and > 0, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("boundary thickness {thickness} leaves no playable area in a {width}x{height} window")]
    BoundaryTooThick {
        thickness: f32,
        width: f32,
        height: f32,
    },

    #[error("paddle height {paddle_height} exceeds playable height {playable_height}")]
    PaddleTooTall {
        paddle_height: f32,
        playable_height: f32,
    },

    #[error("window width {width} is too narrow for both paddles (need more than {required})")]
    FieldTooNarrow { width: f32, required: f32 },

    #[error("ball size {ball_size} does not fit the playable height {playable_height}")]
    BallTooLarge {
        ball_size: f32,
        playable_height: f32,
    },

    #[error("ball speed {speed} px/tick can skip through a paddle or boundary (limit {limit})")]
    BallTooFast { speed: f32, limit: f32 },

    #[error("paddle speed {speed} px/tick can skip through a boundary (limit {limit})")]
    PaddleTooFast { speed: f32, limit: f32 },

    #[error("max serve angle must be between 1 and 89 degrees, got {0}")]
    ServeAngleOutOfRange(u8),

    #[error("winning score must be at least 1")]
    ZeroWinningScore,

    #[error("tick rate must be at least 1 tick per second")]
    ZeroTickRate,
}
