use crate::taunts::pick_taunt;
use crate::{Ball, Config, Events, GameMap, RandomSource, RecenterTimer, Score, Side};
use hecs::World;

/// Award a point when the ball leaves the field sideways.
///
/// The ball is flagged `resetting` and a re-center is scheduled, so a ball
/// that stays out of bounds for several frames only scores once.
#[allow(clippy::too_many_arguments)]
pub fn check_scoring<R: RandomSource + ?Sized>(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    recenter: &mut RecenterTimer,
    events: &mut Events,
    rng: &mut R,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.resetting {
            continue;
        }

        let scorer = if map.is_out_left(ball.pos) {
            Side::Right
        } else if map.is_out_right(ball.pos) {
            Side::Left
        } else {
            continue;
        };

        ball.resetting = true;
        score.increment(scorer);
        match scorer {
            Side::Left => events.left_scored = true,
            Side::Right => events.right_scored = true,
        }
        events.taunt = Some(pick_taunt(scorer, rng));
        recenter.start(config.recenter_delay);

        tracing::info!(
            scorer = ?scorer,
            left = score.left,
            right = score.right,
            "Point scored"
        );
    }
}

/// Flag the winner on every frame a score is at or past the threshold
pub fn check_winner(score: &Score, config: &Config, events: &mut Events) {
    events.winner = score.has_winner(config.win_score);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use crate::taunts::{LOSING_TAUNTS, WINNING_TAUNTS};
    use crate::GameRng;
    use glam::Vec2;

    struct Setup {
        world: World,
        config: Config,
        map: GameMap,
        score: Score,
        recenter: RecenterTimer,
        events: Events,
        rng: GameRng,
    }

    fn setup(ball_pos: Vec2, ball_vel: Vec2) -> Setup {
        let config = Config::new();
        let map = GameMap::new(&config);
        let mut world = World::new();
        create_ball(&mut world, ball_pos, Vec2::splat(config.ball_size()), ball_vel);
        Setup {
            world,
            config,
            map,
            score: Score::new(),
            recenter: RecenterTimer::new(),
            events: Events::new(),
            rng: GameRng::new(12345), // Fixed seed for deterministic tests
        }
    }

    fn run(s: &mut Setup) {
        check_scoring(
            &mut s.world,
            &s.map,
            &s.config,
            &mut s.score,
            &mut s.recenter,
            &mut s.events,
            &mut s.rng,
        );
    }

    fn ball(world: &World) -> Ball {
        *world.query::<&Ball>().iter().next().unwrap().1
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let mut s = setup(Vec2::new(-1.0, 200.0), Vec2::new(-5.0, 5.0));
        run(&mut s);

        assert_eq!(s.score, Score { left: 0, right: 1 });
        assert!(s.events.right_scored);
        assert!(ball(&s.world).resetting);
        assert!(s.recenter.is_pending());
        assert!(LOSING_TAUNTS.contains(&s.events.taunt.unwrap()));
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let mut s = setup(Vec2::new(751.0, 200.0), Vec2::new(5.0, 5.0));
        run(&mut s);

        assert_eq!(s.score, Score { left: 1, right: 0 });
        assert!(s.events.left_scored);
        assert!(WINNING_TAUNTS.contains(&s.events.taunt.unwrap()));
    }

    #[test]
    fn test_no_double_count_while_resetting() {
        let mut s = setup(Vec2::new(-1.0, 200.0), Vec2::new(-5.0, 5.0));
        run(&mut s);
        for _ in 0..10 {
            s.events.clear();
            run(&mut s);
            assert!(!s.events.right_scored);
        }
        assert_eq!(s.score.right, 1, "One crossing, one point");
    }

    #[test]
    fn test_scoring_leaves_ball_where_it_is() {
        let mut s = setup(Vec2::new(-1.0, 200.0), Vec2::new(-5.0, 5.0));
        run(&mut s);
        let ball = ball(&s.world);
        assert_eq!(ball.pos, Vec2::new(-1.0, 200.0), "Re-center happens later");
        assert_eq!(ball.vel, Vec2::new(-5.0, 5.0));
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let mut s = setup(Vec2::new(0.0, 200.0), Vec2::new(-5.0, 5.0));
        run(&mut s);
        assert_eq!(s.score, Score::new(), "x == 0 is still in the field");
        assert_eq!(s.events.scored(), None);
        assert!(!s.recenter.is_pending());
    }

    #[test]
    fn test_check_winner() {
        let config = Config::new();
        let mut events = Events::new();
        check_winner(&Score { left: 6, right: 6 }, &config, &mut events);
        assert_eq!(events.winner, None);
        check_winner(&Score { left: 7, right: 2 }, &config, &mut events);
        assert_eq!(events.winner, Some(Side::Left));
        check_winner(&Score { left: 2, right: 9 }, &config, &mut events);
        assert_eq!(events.winner, Some(Side::Right));
    }
}
