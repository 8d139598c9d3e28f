//! A single-player match against the scripted opponent

use crate::systems::{apply_key_down, apply_key_up};
use crate::{
    create_ball, create_paddle, step, Ball, Config, DrawList, Events, GameMap, GameRng,
    MatchAction, MatchFsm, MatchPhase, Paddle, RandomSource, RecenterTimer, Score, Side, Surface,
    Time,
};
use glam::Vec2;
use hecs::World;

pub struct PongMatch<R: RandomSource = GameRng> {
    pub world: World,
    pub time: Time,
    pub map: GameMap,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub recenter: RecenterTimer,
    pub rng: R,
    pub fsm: MatchFsm,
    pub frame: DrawList,
}

impl PongMatch<GameRng> {
    pub fn new(config: Config, seed: u64) -> Self {
        Self::with_rng(config, GameRng::new(seed))
    }
}

impl<R: RandomSource> PongMatch<R> {
    /// Kickoff layout: paddles centered vertically, ball in the middle
    /// heading up and to the right.
    pub fn with_rng(config: Config, rng: R) -> Self {
        let map = GameMap::new(&config);
        let mut world = World::new();

        let paddle_size = Vec2::new(config.paddle_width(), config.paddle_height());
        for side in [Side::Left, Side::Right] {
            create_paddle(&mut world, side, map.paddle_spawn(&config, side), paddle_size);
        }

        create_ball(
            &mut world,
            map.ball_spawn(),
            Vec2::splat(config.ball_size()),
            Vec2::new(config.ball_speed, -config.ball_speed),
        );

        Self {
            world,
            time: Time::default(),
            map,
            config,
            score: Score::new(),
            events: Events::new(),
            recenter: RecenterTimer::new(),
            rng,
            fsm: MatchFsm::new(),
            frame: DrawList::new(),
        }
    }

    /// Advance one frame; `dt` is the wall-clock time since the last one.
    ///
    /// Keeps simulating after game over. The host is expected to hide the
    /// play surface rather than stop calling this.
    pub fn tick(&mut self, dt: f32) -> &Events {
        self.time.dt = dt;

        step(
            &mut self.world,
            &mut self.time,
            &self.map,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.recenter,
            &mut self.rng,
            &mut self.frame,
        );

        if let Some(winner) = self.events.winner {
            if self.fsm.transition(MatchAction::Finish).success {
                tracing::info!(
                    winner = ?winner,
                    left = self.score.left,
                    right = self.score.right,
                    "Match over"
                );
            }
        }

        &self.events
    }

    pub fn key_down(&mut self, key: &str) {
        apply_key_down(&mut self.world, key, self.config.paddle_speed);
    }

    pub fn key_up(&mut self, key: &str) {
        apply_key_up(&mut self.world, key);
    }

    /// Start a new match after game over.
    ///
    /// Scores go back to zero and the ball takes the slower restart velocity.
    /// Positions and any pending re-center are left alone. Returns false
    /// (and changes nothing) while a match is still being played.
    pub fn restart(&mut self) -> bool {
        if !self.fsm.transition(MatchAction::Restart).success {
            return false;
        }

        self.score.reset();
        let speed = self.config.restart_ball_speed;
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.vel = Vec2::new(speed, speed);
        }

        tracing::info!(ball_speed = speed, "Match restarted");
        true
    }

    pub fn phase(&self) -> MatchPhase {
        self.fsm.phase()
    }

    /// True between a point and the ball's return to the center
    pub fn is_recentering(&self) -> bool {
        self.recenter.is_pending()
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.query::<&Ball>().iter().next().map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| *paddle)
    }

    /// Replay the last frame's draw commands onto `surface`
    pub fn render_to<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.frame.replay(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Params;

    #[test]
    fn test_kickoff_layout() {
        let game = PongMatch::new(Config::new(), 1);
        let left = game.paddle(Side::Left).unwrap();
        let right = game.paddle(Side::Right).unwrap();
        let ball = game.ball().unwrap();

        assert_eq!(left.pos, Vec2::new(30.0, 255.0));
        assert_eq!(right.pos, Vec2::new(705.0, 255.0));
        assert_eq!(left.size, Vec2::new(15.0, 75.0));
        assert_eq!(left.dy, 0.0);
        assert_eq!(ball.pos, Vec2::new(375.0, 292.5));
        assert_eq!(ball.vel, Vec2::new(5.0, -5.0));
        assert!(!ball.resetting);
        assert_eq!(game.phase(), MatchPhase::Playing);
        assert!(game.frame.is_empty(), "Nothing drawn before the first tick");
    }

    #[test]
    fn test_keys_drive_left_paddle() {
        let mut game = PongMatch::new(Config::new(), 1);
        game.key_down("w");
        game.tick(Params::FRAME_DT);
        assert_eq!(game.paddle(Side::Left).unwrap().pos.y, 249.0);

        game.key_up("w");
        game.tick(Params::FRAME_DT);
        assert_eq!(game.paddle(Side::Left).unwrap().pos.y, 249.0);
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut game = PongMatch::new(Config::new(), 1);
        game.score.left = 3;
        assert!(!game.restart());
        assert_eq!(game.score.left, 3);
        assert_eq!(game.ball().unwrap().vel, Vec2::new(5.0, -5.0));
    }
}
