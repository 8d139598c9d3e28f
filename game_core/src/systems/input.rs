use hecs::World;

use crate::components::{Paddle, Side};

/// New left paddle velocity after a key press
pub fn handle_key_down(key: &str, current_dy: f32, paddle_speed: f32) -> f32 {
    match key {
        "w" | "W" => -paddle_speed,
        "s" | "S" => paddle_speed,
        _ => current_dy,
    }
}

/// New left paddle velocity after a key release.
/// Releasing either key stops the paddle, even if the other is still held.
pub fn handle_key_up(key: &str, current_dy: f32) -> f32 {
    match key {
        "w" | "W" | "s" | "S" => 0.0,
        _ => current_dy,
    }
}

/// Apply a key press to the player's (left) paddle
pub fn apply_key_down(world: &mut World, key: &str, paddle_speed: f32) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Left {
            paddle.dy = handle_key_down(key, paddle.dy, paddle_speed);
        }
    }
}

/// Apply a key release to the player's (left) paddle
pub fn apply_key_up(world: &mut World, key: &str) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Left {
            paddle.dy = handle_key_up(key, paddle.dy);
        }
    }
}
