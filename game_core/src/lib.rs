pub mod components;
pub mod config;
pub mod driver;
pub mod error;
pub mod field;
pub mod fsm;
pub mod input;
pub mod params;
pub mod resources;
pub mod simulation;
pub mod snapshot;
pub mod systems;

pub use components::*;
pub use config::*;
pub use driver::*;
pub use error::*;
pub use field::*;
pub use fsm::*;
pub use input::*;
pub use params::*;
pub use resources::*;
pub use simulation::*;
pub use snapshot::*;

use hecs::World;
use systems::*;

/// Whether the loop should keep running after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Run one deterministic Pong tick
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    field: &Field,
    config: &Config,
    game_match: &mut Match,
    events: &mut Events,
    input: &mut InputQueue,
    rng: &mut GameRng,
) -> Control {
    // Clear events at start of tick
    events.clear();

    // 1. Ingest inputs (paddle state machines, serve)
    if ingest_inputs(world, field, config, game_match, events, input, rng) == Control::Quit {
        return Control::Quit;
    }

    // 2. Move paddles, only while the ball is live
    if game_match.is_playing() {
        move_paddles(world, config);
    }

    // 3. Stop paddles at the boundaries (idempotent when frozen)
    clamp_paddles(world, field);

    if game_match.is_playing() {
        // 4. Move ball
        move_ball(world);

        // 5. Bounce off paddles, then off top and bottom
        bounce_off_paddles(world, events);
        bounce_off_walls(world, field, events);

        // 6. Check scoring (ball reached left or right boundary)
        check_scoring(world, field, config, game_match, events);
    }

    Control::Continue
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, rect: Rect) -> hecs::Entity {
    world.spawn((Paddle::new(side, rect), PaddleMotion::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, rect: Rect, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(rect, vel),))
}
