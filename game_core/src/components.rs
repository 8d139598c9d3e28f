use crate::map::Aabb;
use glam::Vec2;

/// Which end of the field a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Paddle component - position is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    pub size: Vec2,
    pub dy: f32, // pixels per frame, written by input or the opponent
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, size: Vec2) -> Self {
        Self {
            side,
            pos,
            size,
            dy: 0.0,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_corner_size(self.pos, self.size)
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    /// Set while the ball waits to be re-centered after a point
    pub resetting: bool,
}

impl Ball {
    pub fn new(pos: Vec2, size: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            size,
            vel,
            resetting: false,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_corner_size(self.pos, self.size)
    }

    /// Put the ball back at `center` and allow scoring again.
    /// Velocity is left as it was.
    pub fn recenter(&mut self, center: Vec2) {
        self.pos = center;
        self.resetting = false;
    }
}
