use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::params::Params;

/// Game configuration, fixed once the game is constructed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window_width: f32,
    pub window_height: f32,
    pub boundary_thickness: f32,
    pub net_width: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_offset: f32,
    pub paddle_speed: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub max_serve_angle: u8,
    pub winning_score: u8,
    pub tick_rate: u32,
    /// Let a key-down for the opposite direction reverse a moving paddle
    /// without passing through `Stopped` first.
    pub instant_reversal: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: Params::WINDOW_WIDTH,
            window_height: Params::WINDOW_HEIGHT,
            boundary_thickness: Params::BOUNDARY_THICKNESS,
            net_width: Params::NET_WIDTH,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_offset: Params::PADDLE_OFFSET,
            paddle_speed: Params::PADDLE_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            max_serve_angle: Params::MAX_SERVE_ANGLE,
            winning_score: Params::WINNING_SCORE,
            tick_rate: Params::TICK_RATE,
            instant_reversal: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Height between the top and bottom boundaries
    pub fn playable_height(&self) -> f32 {
        self.window_height - 2.0 * self.boundary_thickness
    }

    /// Reject constants that would produce degenerate geometry
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("boundary_thickness", self.boundary_thickness),
            ("net_width", self.net_width),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_offset", self.paddle_offset),
            ("paddle_speed", self.paddle_speed),
            ("ball_size", self.ball_size),
            ("ball_speed", self.ball_speed),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if !(1..90).contains(&self.max_serve_angle) {
            return Err(ConfigError::ServeAngleOutOfRange(self.max_serve_angle));
        }
        if self.winning_score == 0 {
            return Err(ConfigError::ZeroWinningScore);
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::ZeroTickRate);
        }

        let thickness = self.boundary_thickness;
        if 2.0 * thickness >= self.window_width || 2.0 * thickness >= self.window_height {
            return Err(ConfigError::BoundaryTooThick {
                thickness,
                width: self.window_width,
                height: self.window_height,
            });
        }

        let playable_height = self.playable_height();
        if self.paddle_height > playable_height {
            return Err(ConfigError::PaddleTooTall {
                paddle_height: self.paddle_height,
                playable_height,
            });
        }
        if self.ball_size >= playable_height {
            return Err(ConfigError::BallTooLarge {
                ball_size: self.ball_size,
                playable_height,
            });
        }

        // Both paddles plus room for the ball between them
        let required =
            2.0 * (thickness + self.paddle_offset + self.paddle_width) + self.ball_size;
        if self.window_width <= required {
            return Err(ConfigError::FieldTooNarrow {
                width: self.window_width,
                required,
            });
        }

        let ball_limit = self.paddle_width.min(thickness) + self.ball_size;
        if self.ball_speed >= ball_limit {
            return Err(ConfigError::BallTooFast {
                speed: self.ball_speed,
                limit: ball_limit,
            });
        }
        if self.paddle_speed >= self.paddle_height {
            return Err(ConfigError::PaddleTooFast {
                speed: self.paddle_speed,
                limit: self.paddle_height,
            });
        }

        Ok(())
    }
}
