use crate::{Ball, Config, Paddle};
use hecs::World;

/// Move paddles by their velocity, then clamp them between the walls
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.pos.y = config.clamp_paddle_y(paddle.pos.y + paddle.dy);
    }
}

/// Move ball by its velocity (pixels per frame)
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
