use crate::{Field, MatchState, Rect, Side};

/// Read-only view of one tick, handed to the presentation layer.
///
/// Everything is copied out of the simulation, so a presenter cannot
/// mutate game state through it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub tick: u64,
    pub field: Field,
    pub left_paddle: Rect,
    pub right_paddle: Rect,
    pub ball: Rect,
    pub match_state: MatchState,
    pub left_score: u8,
    pub right_score: u8,
    pub winner: Option<Side>,
}

impl Snapshot {
    /// Every rectangle to draw: net, boundaries, paddles, ball
    pub fn rects(&self) -> [Rect; 8] {
        let [net, top, bottom, left, right] = self.field.rects();
        [
            net,
            top,
            bottom,
            left,
            right,
            self.left_paddle,
            self.right_paddle,
            self.ball,
        ]
    }

    pub fn is_game_over(&self) -> bool {
        self.match_state == MatchState::Over
    }
}
