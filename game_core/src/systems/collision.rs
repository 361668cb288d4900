use crate::{Ball, Events, Field, Paddle, PaddleMotion, PaddleState, Side};
use hecs::World;

/// Stop paddles at the top and bottom boundaries.
///
/// Runs every tick whatever the paddle state; an overlapping paddle is
/// aligned to the boundary edge and stopped.
pub fn clamp_paddles(world: &mut World, field: &Field) {
    for (_entity, (paddle, motion)) in world.query_mut::<(&mut Paddle, &mut PaddleMotion)>() {
        if paddle.rect.intersects(&field.top) {
            motion.state = PaddleState::Stopped;
            paddle.rect.set_top(field.top.bottom());
        }
        if paddle.rect.intersects(&field.bottom) {
            motion.state = PaddleState::Stopped;
            paddle.rect.set_bottom(field.bottom.top());
        }

        let still_overlaps =
            paddle.rect.intersects(&field.top) || paddle.rect.intersects(&field.bottom);
        debug_assert!(
            !still_overlaps,
            "{:?} paddle overlaps a boundary after clamping: {:?}",
            paddle.side,
            paddle.rect
        );
        if still_overlaps {
            tracing::warn!(
                "{:?} paddle still overlaps a boundary, re-clamping {:?}",
                paddle.side,
                paddle.rect
            );
            let lowest = (field.bottom.top() - paddle.rect.size.y).max(field.top.bottom());
            paddle.rect.pos.y = paddle.rect.pos.y.clamp(field.top.bottom(), lowest);
        }
    }
}

/// Bounce the ball off the paddles.
///
/// The ball is snapped against the paddle face and its horizontal
/// velocity negated. The left paddle wins if both overlap.
pub fn bounce_off_paddles(world: &mut World, events: &mut Events) {
    // Collect paddle rects without holding a borrow on the world
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let hit = [Side::Left, Side::Right].into_iter().find_map(|side| {
            paddles
                .iter()
                .find(|p| p.side == side && ball.rect.intersects(&p.rect))
        });

        if let Some(paddle) = hit {
            match paddle.side {
                Side::Left => ball.rect.set_left(paddle.rect.right()),
                Side::Right => ball.rect.set_right(paddle.rect.left()),
            }
            ball.vel.x = -ball.vel.x;
            events.ball_hit_paddle = true;
            tracing::debug!("Ball hit {:?} paddle", paddle.side);
        }
    }
}

/// Bounce the ball off the top and bottom boundaries. Top wins if both overlap.
pub fn bounce_off_walls(world: &mut World, field: &Field, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let hit = if ball.rect.intersects(&field.top) {
            ball.rect.set_top(field.top.bottom());
            true
        } else if ball.rect.intersects(&field.bottom) {
            ball.rect.set_bottom(field.bottom.top());
            true
        } else {
            false
        };

        if hit {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
    }
}
