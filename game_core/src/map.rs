use crate::components::Side;
use crate::config::Config;
use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_corner_size(corner: Vec2, size: Vec2) -> Self {
        Self {
            min: corner,
            max: corner + size,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Strict overlap test: boxes that only share an edge do not collide
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Static playfield geometry derived from the config
#[derive(Debug, Clone)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
    pub grid: f32,
    paddle_height: f32,
}

impl GameMap {
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.width,
            height: config.height,
            grid: config.grid,
            paddle_height: config.paddle_height(),
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Where the ball starts and where it returns after a point
    pub fn ball_spawn(&self) -> Vec2 {
        self.center()
    }

    /// Top-left corner of a paddle at kickoff
    pub fn paddle_spawn(&self, config: &Config, side: Side) -> Vec2 {
        Vec2::new(
            config.paddle_x(side),
            self.height / 2.0 - self.paddle_height / 2.0,
        )
    }

    /// True once the ball's top-left corner has left the field sideways
    pub fn is_out_left(&self, pos: Vec2) -> bool {
        pos.x < 0.0
    }

    pub fn is_out_right(&self, pos: Vec2) -> bool {
        pos.x > self.width
    }

    pub fn top_wall(&self) -> Aabb {
        Aabb::from_corner_size(Vec2::ZERO, Vec2::new(self.width, self.grid))
    }

    pub fn bottom_wall(&self) -> Aabb {
        Aabb::from_corner_size(
            Vec2::new(0.0, self.height - self.grid),
            Vec2::new(self.width, self.grid),
        )
    }

    /// Dashes of the center line, one grid cell every two cells
    pub fn center_line(&self) -> Vec<Aabb> {
        let x = self.width / 2.0 - self.grid / 2.0;
        let mut dashes = Vec::new();
        let mut y = self.grid;
        while y < self.height - self.grid {
            dashes.push(Aabb::from_corner_size(
                Vec2::new(x, y),
                Vec2::splat(self.grid),
            ));
            y += self.grid * 2.0;
        }
        dashes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_is_strict() {
        let a = Aabb::from_corner_size(Vec2::ZERO, Vec2::splat(10.0));
        let touching = Aabb::from_corner_size(Vec2::new(10.0, 0.0), Vec2::splat(10.0));
        let inside = Aabb::from_corner_size(Vec2::new(9.0, 9.0), Vec2::splat(10.0));
        assert!(!a.overlaps(&touching), "Shared edge is not a collision");
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
    }

    #[test]
    fn test_spawns() {
        let config = Config::new();
        let map = GameMap::new(&config);
        assert_eq!(map.ball_spawn(), Vec2::new(375.0, 292.5));
        let left = map.paddle_spawn(&config, Side::Left);
        let right = map.paddle_spawn(&config, Side::Right);
        assert_eq!(left, Vec2::new(30.0, 255.0));
        assert_eq!(right, Vec2::new(705.0, 255.0));
    }

    #[test]
    fn test_center_line_dashes() {
        let map = GameMap::new(&Config::new());
        let dashes = map.center_line();
        // y = 15, 45, ..., 555 (555 < 570)
        assert_eq!(dashes.len(), 19);
        assert_eq!(dashes[0].min, Vec2::new(367.5, 15.0));
        assert_eq!(dashes[1].min.y, 45.0);
        assert!(dashes.iter().all(|d| d.size() == Vec2::splat(15.0)));
        assert!(dashes.last().unwrap().min.y < map.height - map.grid);
    }

    #[test]
    fn test_walls() {
        let map = GameMap::new(&Config::new());
        assert_eq!(map.top_wall().max, Vec2::new(750.0, 15.0));
        assert_eq!(map.bottom_wall().min, Vec2::new(0.0, 570.0));
    }
}
