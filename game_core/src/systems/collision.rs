use crate::{Ball, Events, GameMap, Paddle, Side};
use hecs::World;

/// Bounce the ball off the top and bottom walls
pub fn bounce_off_walls(world: &mut World, map: &GameMap, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y < map.grid {
            ball.pos.y = map.grid;
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        } else if ball.pos.y + ball.size.y > map.height - map.grid {
            ball.pos.y = map.height - map.grid - ball.size.y;
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
    }
}

/// Reflect the ball off whichever paddle it overlaps, left checked first.
/// The ball is moved flush against the paddle face so the same hit cannot
/// trigger again next frame.
pub fn bounce_off_paddles(world: &mut World, events: &mut Events) {
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|p| p.side as u8);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            let face = paddle.bounds();
            if !ball.bounds().overlaps(&face) {
                continue;
            }

            ball.vel.x = -ball.vel.x;
            ball.pos.x = match paddle.side {
                Side::Left => face.max.x,
                Side::Right => face.min.x - ball.size.x,
            };
            events.ball_hit_paddle = true;
            tracing::debug!(side = ?paddle.side, x = ball.pos.x, y = ball.pos.y, "Paddle hit");
            break;
        }
    }
}
