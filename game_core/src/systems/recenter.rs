use crate::{Ball, GameMap, RecenterTimer, Time};
use hecs::World;

/// Run the re-center scheduled by a point once its delay has elapsed
pub fn recenter_tick(world: &mut World, time: &Time, map: &GameMap, timer: &mut RecenterTimer) {
    if !timer.update(time.dt) {
        return;
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.recenter(map.ball_spawn());
        tracing::debug!(x = ball.pos.x, y = ball.pos.y, "Ball re-centered");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, Config};
    use glam::Vec2;

    #[test]
    fn test_recenter_after_delay() {
        let config = Config::new();
        let map = GameMap::new(&config);
        let mut world = World::new();
        let e = create_ball(&mut world, Vec2::new(-6.0, 100.0), Vec2::splat(15.0), Vec2::new(-5.0, 5.0));
        world.get::<&mut Ball>(e).unwrap().resetting = true;
        let mut timer = RecenterTimer::new();
        timer.start(0.4);

        let time = Time::new(0.2, 0.0);
        recenter_tick(&mut world, &time, &map, &mut timer);
        assert!(world.get::<&Ball>(e).unwrap().resetting, "Still waiting");

        recenter_tick(&mut world, &time, &map, &mut timer);
        let ball = *world.get::<&Ball>(e).unwrap();
        assert_eq!(ball.pos, Vec2::new(375.0, 292.5));
        assert!(!ball.resetting);
        assert_eq!(ball.vel, Vec2::new(-5.0, 5.0), "Velocity untouched");
    }

    #[test]
    fn test_idle_timer_leaves_ball_alone() {
        let config = Config::new();
        let map = GameMap::new(&config);
        let mut world = World::new();
        let e = create_ball(&mut world, Vec2::new(100.0, 100.0), Vec2::splat(15.0), Vec2::new(5.0, 5.0));
        let mut timer = RecenterTimer::new();

        recenter_tick(&mut world, &Time::new(1.0, 0.0), &map, &mut timer);
        assert_eq!(world.get::<&Ball>(e).unwrap().pos, Vec2::new(100.0, 100.0));
    }
}
