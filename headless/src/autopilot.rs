//! Scripted stand-in for the keyboard player

use game_core::{Ball, Paddle, PongMatch, RandomSource, Side};

/// Presses w/s to follow the ball while it is heading for the left goal,
/// otherwise drifts back to the middle of the field.
#[derive(Debug, Default)]
pub struct Autopilot {
    held: Option<&'static str>,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key the player would hold this frame, `None` to let go
    pub fn decide(paddle: &Paddle, ball: &Ball, rest_y: f32, dead_zone: f32) -> Option<&'static str> {
        let paddle_mid = paddle.pos.y + paddle.size.y / 2.0;
        let target = if ball.vel.x < 0.0 && !ball.resetting {
            ball.pos.y + ball.size.y / 2.0
        } else {
            rest_y
        };

        if target < paddle_mid - dead_zone {
            Some("w")
        } else if target > paddle_mid + dead_zone {
            Some("s")
        } else {
            None
        }
    }

    /// Send whatever key presses and releases get us to this frame's decision
    pub fn drive<R: RandomSource>(&mut self, game: &mut PongMatch<R>) {
        let (Some(paddle), Some(ball)) = (game.paddle(Side::Left), game.ball()) else {
            return;
        };

        let wanted = Self::decide(&paddle, &ball, game.map.center().y, game.config.paddle_speed);
        if wanted == self.held {
            return;
        }

        if let Some(key) = self.held {
            game.key_up(key);
        }
        if let Some(key) = wanted {
            game.key_down(key);
        }
        self.held = wanted;
    }
}
