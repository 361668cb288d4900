use crate::components::Side;

/// Match score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,  // Left player score
    pub right: u8, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left = self.left.saturating_add(1),
            Side::Right => self.right = self.right.saturating_add(1),
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Random number generator used for serves
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Things that happened during the last tick, for sound and effects
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub served: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub left_scored: bool,
    pub right_scored: bool,
    pub match_over: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn scored(&mut self, side: Side) {
        match side {
            Side::Left => self.left_scored = true,
            Side::Right => self.right_scored = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment_left() {
        let mut score = Score::new();
        assert_eq!(score.left, 0);
        score.increment(Side::Left);
        assert_eq!(score.left, 1);
        score.increment(Side::Left);
        assert_eq!(score.left, 2);
        assert_eq!(score.right, 0);
    }

    #[test]
    fn test_score_increment_right() {
        let mut score = Score::new();
        score.increment(Side::Right);
        score.increment(Side::Right);
        assert_eq!(score.get(Side::Right), 2);
        assert_eq!(score.get(Side::Left), 0);
    }

    #[test]
    fn test_score_has_winner_left() {
        let mut score = Score::new();
        for _ in 0..11 {
            score.increment(Side::Left);
        }
        assert_eq!(
            score.has_winner(11),
            Some(Side::Left),
            "Left player should win at 11"
        );
    }

    #[test]
    fn test_score_has_winner_right() {
        let mut score = Score::new();
        for _ in 0..11 {
            score.increment(Side::Right);
        }
        assert_eq!(
            score.has_winner(11),
            Some(Side::Right),
            "Right player should win at 11"
        );
    }

    #[test]
    fn test_score_no_winner_below_threshold() {
        let mut score = Score::new();
        for _ in 0..10 {
            score.increment(Side::Left);
            score.increment(Side::Right);
        }
        assert_eq!(score.has_winner(11), None, "No winner below threshold");
    }

    #[test]
    fn test_score_reset() {
        let mut score = Score { left: 4, right: 9 };
        score.reset();
        assert_eq!(score, Score::new());
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.served = true;
        events.scored(Side::Left);
        events.scored(Side::Right);
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;
        events.match_over = true;

        events.clear();

        assert_eq!(events, Events::new());
    }
}
