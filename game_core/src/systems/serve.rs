use crate::{Ball, Config, Events, Field, GameRng};
use hecs::World;

/// Put the ball back on the center spot with a fresh random velocity
pub fn serve_ball(
    world: &mut World,
    field: &Field,
    config: &Config,
    rng: &mut GameRng,
    events: &mut Events,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let degrees = ball.serve(
            field.center(),
            config.ball_speed,
            config.max_serve_angle,
            rng,
        );
        tracing::debug!(
            "Serve at {} degrees, velocity ({:.3}, {:.3})",
            degrees,
            ball.vel.x,
            ball.vel.y
        );
    }
    events.served = true;
}
