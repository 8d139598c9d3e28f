use crate::{Ball, Config, Paddle, RandomSource, Side};
use hecs::World;

/// Scripted right paddle.
///
/// Every frame it rolls a die with `opponent_miss_odds` sides. A zero freezes
/// the paddle for that frame, anything else copies the ball's vertical
/// velocity. Nothing carries over between frames.
pub fn drive_opponent<R: RandomSource + ?Sized>(world: &mut World, config: &Config, rng: &mut R) {
    let ball_dy = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.vel.y);

    let Some(ball_dy) = ball_dy else {
        return;
    };

    let freeze = rng.roll(config.opponent_miss_odds) == 0;
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Right {
            paddle.dy = if freeze { 0.0 } else { ball_dy };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, GameRng};
    use glam::Vec2;

    /// Plays back a fixed list of rolls
    struct Scripted(Vec<u32>);

    impl RandomSource for Scripted {
        fn roll(&mut self, sides: u32) -> u32 {
            self.0.remove(0) % sides
        }
    }

    fn setup() -> (World, Config) {
        let config = Config::new();
        let mut world = World::new();
        let size = Vec2::new(15.0, 75.0);
        create_paddle(&mut world, Side::Left, Vec2::new(30.0, 255.0), size);
        create_paddle(&mut world, Side::Right, Vec2::new(705.0, 255.0), size);
        create_ball(&mut world, Vec2::new(375.0, 292.5), Vec2::splat(15.0), Vec2::new(5.0, -5.0));
        (world, config)
    }

    fn dy(world: &World, side: Side) -> f32 {
        world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.dy)
            .unwrap()
    }

    #[test]
    fn test_tracks_ball_on_most_rolls() {
        let (mut world, config) = setup();
        drive_opponent(&mut world, &config, &mut Scripted(vec![3]));
        assert_eq!(dy(&world, Side::Right), -5.0);
        assert_eq!(dy(&world, Side::Left), 0.0, "Player paddle is not driven");
    }

    #[test]
    fn test_freezes_on_zero_roll() {
        let (mut world, config) = setup();
        drive_opponent(&mut world, &config, &mut Scripted(vec![1, 0, 5]));
        assert_eq!(dy(&world, Side::Right), -5.0);
        drive_opponent(&mut world, &config, &mut Scripted(vec![0]));
        assert_eq!(dy(&world, Side::Right), 0.0);
        drive_opponent(&mut world, &config, &mut Scripted(vec![5]));
        assert_eq!(dy(&world, Side::Right), -5.0, "A miss does not persist");
    }

    #[test]
    fn test_miss_rate_is_about_one_in_six() {
        let (mut world, config) = setup();
        let mut rng = GameRng::new(2024);
        let frames = 6000;
        let mut frozen = 0;
        for _ in 0..frames {
            drive_opponent(&mut world, &config, &mut rng);
            if dy(&world, Side::Right) == 0.0 {
                frozen += 1;
            }
        }
        // Expected 1000, standard deviation ~29
        assert!((850..1150).contains(&frozen), "frozen {frozen} of {frames}");
    }
}
