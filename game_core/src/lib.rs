pub mod components;
pub mod config;
pub mod error;
pub mod fsm;
pub mod game;
pub mod map;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;
pub mod taunts;

pub use components::*;
pub use config::*;
pub use error::*;
pub use fsm::*;
pub use game::*;
pub use map::*;
pub use params::*;
pub use render::*;
pub use resources::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run one frame of the match.
///
/// Motion is in pixels per frame; `time.dt` only drives the re-center delay.
#[allow(clippy::too_many_arguments)]
pub fn step<R: RandomSource + ?Sized>(
    world: &mut World,
    time: &mut Time,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    recenter: &mut RecenterTimer,
    rng: &mut R,
    frame: &mut DrawList,
) {
    // Clear events and draw list at start of frame
    events.clear();
    frame.reset();

    // Re-center scheduled by an earlier point lands between frames
    recenter_tick(world, time, map, recenter);

    frame.clear();

    // 1. Move paddles and clamp to the walls
    move_paddles(world, config);

    // 2. Move ball
    move_ball(world);

    // 3. Top/bottom wall bounce
    bounce_off_walls(world, map, events);

    // 4. Score text (values before this frame's point)
    draw_scores(score, frame);

    // 5. Ball out of bounds
    check_scoring(world, map, config, score, recenter, events, rng);

    // 6. Paddle hits
    bounce_off_paddles(world, events);

    // 7. Paddles, ball, walls, center line
    draw_paddles(world, frame);
    draw_ball(world, frame);
    draw_field(map, frame);

    // 8. Opponent picks its velocity for next frame
    drive_opponent(world, config, rng);

    // 9. Match end
    check_winner(score, config, events);

    time.now += time.dt;
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, pos: Vec2, size: Vec2) -> hecs::Entity {
    world.spawn((Paddle::new(side, pos, size),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, size: Vec2, vel: Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, size, vel),))
}
