pub mod components;
pub mod config;
pub mod geom;
pub mod params;
pub mod resources;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use geom::*;
pub use params::*;
pub use resources::*;
pub use state::*;

use hecs::World;
use systems::*;

/// Advance the match by one frame.
///
/// Queued commands are ingested unconditionally so pause, restart, and
/// pointer targeting keep working while the simulation is frozen; entity
/// state only mutates while the match is running.
pub fn step(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    status: &mut MatchStatus,
    events: &mut Events,
    queue: &mut InputQueue,
) {
    events.clear();

    ingest_inputs(world, queue, config, score, status);

    if !status.is_running() {
        return;
    }

    // 1. Integrate ball position
    integrate_ball(world);

    // 2. Reflect off the top/bottom walls
    bounce_walls(world, config, events);

    // 3. Paddle bounces (player side checked first)
    bounce_paddles(world, config, events);

    // 4. Edge crossings: award the point and serve
    check_scoring(world, config, score, events);

    // 5. AI follows the ball
    track_ball(world, config);

    // 6. Keep both paddles on the board
    clamp_paddles(world, config);

    // 7. End the match at the winning score
    check_win(config, score, status, events);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2, speed: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, speed),))
}
