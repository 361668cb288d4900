use crate::{Ball, Config, Paddle, PaddleMotion};
use hecs::World;

/// Apply one tick of paddle movement from each paddle's motion state
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, (paddle, motion)) in world.query_mut::<(&mut Paddle, &PaddleMotion)>() {
        paddle.rect.pos.y += motion.state.delta_y(config.paddle_speed);
    }
}

/// Move ball by one tick of velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.rect.pos += ball.vel;
    }
}
