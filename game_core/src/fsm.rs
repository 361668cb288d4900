//! Match State Machine
//!
//! Tracks whether the ball is live, the score, and when a match ends.

use crate::components::Side;
use crate::resources::Score;

/// Match states
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchState {
    /// No match in progress (initial state, and after a win)
    #[default]
    Over,
    /// Point finished, waiting for the next serve
    Stopped,
    /// Ball is live
    Playing,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    Serve,
    PointScored,
    MatchWon,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: MatchState,
    pub to_state: MatchState,
    pub action: MatchAction,
}

/// Match Finite State Machine with its score
#[derive(Debug, Clone, Default)]
pub struct Match {
    state: MatchState,
    score: Score,
}

impl Match {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current state
    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: MatchAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: MatchAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: MatchAction) -> Option<MatchState> {
        match (self.state, action) {
            (MatchState::Over, MatchAction::Serve) => Some(MatchState::Playing),
            (MatchState::Stopped, MatchAction::Serve) => Some(MatchState::Playing),
            (MatchState::Playing, MatchAction::PointScored) => Some(MatchState::Stopped),
            (MatchState::Playing, MatchAction::MatchWon) => Some(MatchState::Over),
            _ => None,
        }
    }

    /// Handle a start signal. A fresh match (from `Over`) resets the score.
    pub fn start(&mut self) -> TransitionResult {
        let result = self.transition(MatchAction::Serve);
        if result.success && result.from_state == MatchState::Over {
            self.score.reset();
        }
        result
    }

    /// Award a point to `scorer` and end the point or the match.
    ///
    /// Ignored unless the ball is live.
    pub fn record_point(&mut self, scorer: Side, winning_score: u8) -> TransitionResult {
        if !self.is_playing() {
            return TransitionResult {
                success: false,
                from_state: self.state,
                to_state: self.state,
                action: MatchAction::PointScored,
            };
        }

        self.score.increment(scorer);
        let action = if self.score.has_winner(winning_score).is_some() {
            MatchAction::MatchWon
        } else {
            MatchAction::PointScored
        };
        self.transition(action)
    }

    /// The winner of the last completed match, if the match is over
    pub fn winner(&self, winning_score: u8) -> Option<Side> {
        match self.state {
            MatchState::Over => self.score.has_winner(winning_score),
            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state == MatchState::Playing
    }

    /// Overwrite state and score, for tests and tools
    pub fn restore(&mut self, state: MatchState, score: Score) {
        self.state = state;
        self.score = score;
    }
}
