use crate::{Ball, Config, Events, Field, Match, MatchAction, Side};
use hecs::World;

/// Check if the ball reached the left or right boundary (a miss).
///
/// The opponent of the missing side scores, the ball goes back to the
/// center spot and the match leaves `Playing`. Returns the scorer.
pub fn check_scoring(
    world: &mut World,
    field: &Field,
    config: &Config,
    game_match: &mut Match,
    events: &mut Events,
) -> Option<Side> {
    let mut scorer = None;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let missed = if ball.rect.intersects(&field.left) {
            Side::Left
        } else if ball.rect.intersects(&field.right) {
            Side::Right
        } else {
            continue;
        };

        ball.rect.set_center(field.center());

        let side = missed.opponent();
        let result = game_match.record_point(side, config.winning_score);
        if !result.success {
            continue;
        }
        events.scored(side);
        scorer = Some(side);

        let score = game_match.score();
        if result.action == MatchAction::MatchWon {
            events.match_over = true;
            tracing::info!(
                "{:?} wins the match {}-{}",
                side,
                score.left,
                score.right
            );
        } else {
            tracing::info!("{:?} scores, {}-{}", side, score.left, score.right);
        }
    }

    scorer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, MatchState, Rect, Score};
    use glam::Vec2;

    fn setup_world() -> (World, Config, Field, Match, Events) {
        let world = World::new();
        let config = Config::new();
        let field = Field::new(&config);
        let mut game_match = Match::new();
        game_match.start();
        let events = Events::new();
        (world, config, field, game_match, events)
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut world, config, field, mut game_match, mut events) = setup_world();
        create_ball(&mut world, Rect::new(2.0, 200.0, 9.0, 9.0), Vec2::new(-8.0, 0.0));

        let scorer = check_scoring(&mut world, &field, &config, &mut game_match, &mut events);

        assert_eq!(scorer, Some(Side::Right));
        assert_eq!(game_match.score(), Score { left: 0, right: 1 });
        assert_eq!(game_match.state(), MatchState::Stopped);
        assert!(events.right_scored, "Should trigger right_scored event");
        assert!(!events.left_scored);
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let (mut world, config, field, mut game_match, mut events) = setup_world();
        create_ball(&mut world, Rect::new(630.0, 200.0, 9.0, 9.0), Vec2::new(8.0, 0.0));

        let scorer = check_scoring(&mut world, &field, &config, &mut game_match, &mut events);

        assert_eq!(scorer, Some(Side::Left));
        assert_eq!(game_match.score(), Score { left: 1, right: 0 });
        assert!(events.left_scored, "Should trigger left_scored event");
    }

    #[test]
    fn test_ball_recenters_after_scoring() {
        let (mut world, config, field, mut game_match, mut events) = setup_world();
        let vel = Vec2::new(-8.0, 1.0);
        let ball = create_ball(&mut world, Rect::new(1.0, 50.0, 9.0, 9.0), vel);

        check_scoring(&mut world, &field, &config, &mut game_match, &mut events);

        let ball = world.get::<&Ball>(ball).unwrap();
        assert_eq!(ball.rect.center(), field.center());
        // Velocity is only replaced by the next serve
        assert_eq!(ball.vel, vel);
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, field, mut game_match, mut events) = setup_world();
        create_ball(&mut world, Rect::new(5.0, 200.0, 9.0, 9.0), Vec2::new(-8.0, 4.0));

        let scorer = check_scoring(&mut world, &field, &config, &mut game_match, &mut events);

        assert_eq!(scorer, None);
        assert_eq!(game_match.score(), Score::new());
        assert_eq!(game_match.state(), MatchState::Playing);
        assert!(!events.left_scored && !events.right_scored, "No scoring events");
    }

    #[test]
    fn test_winning_point_ends_match() {
        let (mut world, config, field, mut game_match, mut events) = setup_world();
        game_match.restore(MatchState::Playing, Score { left: 3, right: 10 });
        create_ball(&mut world, Rect::new(0.0, 200.0, 9.0, 9.0), Vec2::new(-8.0, 0.0));

        check_scoring(&mut world, &field, &config, &mut game_match, &mut events);

        assert_eq!(game_match.state(), MatchState::Over);
        assert_eq!(game_match.score(), Score { left: 3, right: 11 });
        assert_eq!(game_match.winner(config.winning_score), Some(Side::Right));
        assert!(events.match_over);
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, config, field, mut game_match, mut events) = setup_world();
        let ball = create_ball(&mut world, Rect::new(632.0, 200.0, 9.0, 9.0), Vec2::new(8.0, 0.0));

        check_scoring(&mut world, &field, &config, &mut game_match, &mut events);
        events.clear();
        game_match.start();
        world.get::<&mut Ball>(ball).unwrap().rect.pos.x = 632.0;
        check_scoring(&mut world, &field, &config, &mut game_match, &mut events);

        assert_eq!(game_match.score(), Score { left: 2, right: 0 }, "Scores should accumulate");
    }
}
