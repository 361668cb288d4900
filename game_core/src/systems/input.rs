use hecs::World;

use crate::components::*;
use crate::input::{InputEvent, InputQueue, Key};
use crate::systems::serve_ball;
use crate::{Config, Control, Events, Field, GameRng, Match};

/// Apply queued input events to the paddle and match state machines.
///
/// Returns `Control::Quit` at the first quit or cancel event; anything
/// queued after it is discarded.
#[allow(clippy::too_many_arguments)]
pub fn ingest_inputs(
    world: &mut World,
    field: &Field,
    config: &Config,
    game_match: &mut Match,
    events: &mut Events,
    input: &mut InputQueue,
    rng: &mut GameRng,
) -> Control {
    for event in input.drain() {
        match event {
            InputEvent::Quit | InputEvent::KeyDown(Key::Cancel) => {
                tracing::debug!("Quit requested by {:?}", event);
                return Control::Quit;
            }
            InputEvent::KeyDown(key) => {
                // Any key serves a dead ball, paddle keys included
                if !game_match.is_playing() {
                    let result = game_match.start();
                    if result.success {
                        tracing::info!(
                            "Serve from {:?} on {:?}, score {}-{}",
                            result.from_state,
                            key,
                            game_match.score().left,
                            game_match.score().right
                        );
                        serve_ball(world, field, config, rng, events);
                    }
                }
                if let Some((side, dir)) = key.paddle() {
                    update_paddle_state(world, side, |state| {
                        state.on_key_down(dir, config.instant_reversal)
                    });
                }
            }
            InputEvent::KeyUp(key) => {
                if let Some((side, dir)) = key.paddle() {
                    update_paddle_state(world, side, |state| state.on_key_up(dir));
                }
            }
        }
    }

    Control::Continue
}

fn update_paddle_state(
    world: &mut World,
    side: Side,
    next: impl Fn(PaddleState) -> PaddleState,
) {
    for (_entity, (paddle, motion)) in world.query_mut::<(&Paddle, &mut PaddleMotion)>() {
        if paddle.side == side {
            motion.state = next(motion.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Ball, MatchState, Score};
    use glam::Vec2;

    struct Setup {
        world: World,
        config: Config,
        field: Field,
        game_match: Match,
        events: Events,
        input: InputQueue,
        rng: GameRng,
        left: hecs::Entity,
        right: hecs::Entity,
        ball: hecs::Entity,
    }

    fn setup() -> Setup {
        let mut world = World::new();
        let config = Config::new();
        let field = Field::new(&config);
        let left = create_paddle(&mut world, Side::Left, field.paddle_spawn(Side::Left, &config));
        let right = create_paddle(
            &mut world,
            Side::Right,
            field.paddle_spawn(Side::Right, &config),
        );
        let ball = create_ball(&mut world, field.ball_spawn(&config), Vec2::ZERO);
        Setup {
            world,
            config,
            field,
            game_match: Match::new(),
            events: Events::new(),
            input: InputQueue::new(),
            rng: GameRng::new(1),
            left,
            right,
            ball,
        }
    }

    fn ingest(s: &mut Setup) -> Control {
        ingest_inputs(
            &mut s.world,
            &s.field,
            &s.config,
            &mut s.game_match,
            &mut s.events,
            &mut s.input,
            &mut s.rng,
        )
    }

    fn state_of(s: &Setup, entity: hecs::Entity) -> PaddleState {
        s.world.get::<&PaddleMotion>(entity).unwrap().state
    }

    #[test]
    fn test_key_down_moves_only_its_paddle() {
        let mut s = setup();
        s.input.key_down(Key::LeftUp);
        s.input.key_down(Key::RightDown);

        assert_eq!(ingest(&mut s), Control::Continue);
        assert_eq!(state_of(&s, s.left), PaddleState::MovingUp);
        assert_eq!(state_of(&s, s.right), PaddleState::MovingDown);
        assert!(s.input.is_empty());
    }

    #[test]
    fn test_key_up_stops_paddle() {
        let mut s = setup();
        s.input.key_down(Key::LeftDown);
        s.input.key_up(Key::LeftDown);
        ingest(&mut s);
        assert_eq!(state_of(&s, s.left), PaddleState::Stopped);
    }

    #[test]
    fn test_opposite_key_is_ignored_without_reversal() {
        let mut s = setup();
        s.input.key_down(Key::RightUp);
        s.input.key_down(Key::RightDown);
        ingest(&mut s);
        assert_eq!(state_of(&s, s.right), PaddleState::MovingUp);
    }

    #[test]
    fn test_opposite_key_reverses_with_instant_reversal() {
        let mut s = setup();
        s.config.instant_reversal = true;
        s.input.key_down(Key::RightUp);
        s.input.key_down(Key::RightDown);
        ingest(&mut s);
        assert_eq!(state_of(&s, s.right), PaddleState::MovingDown);
    }

    #[test]
    fn test_start_serves_ball() {
        let mut s = setup();
        s.input.key_down(Key::Start);
        ingest(&mut s);

        assert_eq!(s.game_match.state(), MatchState::Playing);
        assert!(s.events.served);
        let ball = s.world.get::<&Ball>(s.ball).unwrap();
        assert!(ball.vel.length() > 0.0);
    }

    #[test]
    fn test_start_while_playing_does_not_reserve() {
        let mut s = setup();
        s.game_match.restore(MatchState::Playing, Score::new());
        s.input.key_down(Key::Start);
        ingest(&mut s);

        assert!(!s.events.served);
        let ball = s.world.get::<&Ball>(s.ball).unwrap();
        assert_eq!(ball.vel, Vec2::ZERO);
    }

    #[test]
    fn test_paddle_key_serves_and_moves_outside_play() {
        for state in [MatchState::Over, MatchState::Stopped] {
            let mut s = setup();
            s.game_match.restore(state, Score { left: 2, right: 1 });
            s.input.key_down(Key::LeftUp);
            ingest(&mut s);

            assert_eq!(s.game_match.state(), MatchState::Playing);
            assert!(s.events.served);
            assert_eq!(state_of(&s, s.left), PaddleState::MovingUp);
            let expected = match state {
                MatchState::Over => Score::new(),
                _ => Score { left: 2, right: 1 },
            };
            assert_eq!(s.game_match.score(), expected);
        }
    }

    #[test]
    fn test_paddle_key_while_playing_does_not_reserve() {
        let mut s = setup();
        s.game_match.restore(MatchState::Playing, Score::new());
        s.input.key_down(Key::RightDown);
        ingest(&mut s);

        assert!(!s.events.served);
        assert_eq!(state_of(&s, s.right), PaddleState::MovingDown);
        assert_eq!(s.world.get::<&Ball>(s.ball).unwrap().vel, Vec2::ZERO);
    }

    #[test]
    fn test_quit_and_cancel_stop_processing() {
        for stop in [InputEvent::Quit, InputEvent::KeyDown(Key::Cancel)] {
            let mut s = setup();
            s.input.push(stop);
            s.input.key_down(Key::LeftUp);

            assert_eq!(ingest(&mut s), Control::Quit);
            assert_eq!(state_of(&s, s.left), PaddleState::Stopped);
            assert!(s.input.is_empty());
        }
    }

    #[test]
    fn test_cancel_key_up_is_ignored() {
        let mut s = setup();
        s.input.key_up(Key::Cancel);
        s.input.key_up(Key::Start);
        assert_eq!(ingest(&mut s), Control::Continue);
        assert_eq!(s.game_match.state(), MatchState::Over);
    }
}
