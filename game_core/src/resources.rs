use crate::components::Side;
use rand::{Rng, SeedableRng};

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Seconds since the previous frame
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: crate::Params::FRAME_DT,
            now: 0.0,
        }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn has_winner(&self, win_score: u32) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Source of the dice rolls behind the opponent and the taunts
pub trait RandomSource {
    /// Uniform roll in `0..sides`. `sides` is never zero.
    fn roll(&mut self, sides: u32) -> u32;
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl RandomSource for GameRng {
    fn roll(&mut self, sides: u32) -> u32 {
        self.0.gen_range(0..sides)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    /// Taunt picked for this frame's point, if any
    pub taunt: Option<&'static str>,
    /// Set on every frame where a score is at or past the winning threshold
    pub winner: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn scored(&self) -> Option<Side> {
        if self.left_scored {
            Some(Side::Left)
        } else if self.right_scored {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Pending ball re-center after a point
#[derive(Debug, Clone, Copy, Default)]
pub struct RecenterTimer {
    remaining: Option<f32>, // seconds left, None when idle
}

impl RecenterTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, delay: f32) {
        self.remaining = Some(delay);
    }

    pub fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }

    /// Advance by `dt`. Returns true exactly once, when the delay runs out.
    pub fn update(&mut self, dt: f32) -> bool {
        match self.remaining {
            Some(t) if t - dt <= 0.0 => {
                self.remaining = None;
                true
            }
            Some(t) => {
                self.remaining = Some(t - dt);
                false
            }
            None => false,
        }
    }
}
