use hecs::World;

use crate::components::{Ball, Paddle};
use crate::config::Config;

/// Advance the ball by one frame. Velocities are pixels per frame, tied to
/// the display refresh; there is no delta-time scaling.
pub fn integrate_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

/// Clamp both paddles to the board
pub fn clamp_paddles(world: &mut World, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Side;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    #[test]
    fn test_integrate_ball_adds_velocity() {
        let mut world = World::new();
        create_ball(&mut world, Vec2::new(300.0, 200.0), Vec2::new(5.0, -3.0), 5.0);

        integrate_ball(&mut world);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, Vec2::new(305.0, 197.0));
            assert_eq!(ball.vel, Vec2::new(5.0, -3.0));
        }
    }

    #[test]
    fn test_clamp_paddles_bounds_both_sides() {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, Side::Player, -42.0);
        create_paddle(&mut world, Side::Ai, config.board_height + 42.0);

        clamp_paddles(&mut world, &config);

        for (_e, paddle) in world.query::<&Paddle>().iter() {
            assert!(paddle.y >= 0.0);
            assert!(paddle.y <= config.board_height - config.paddle_height);
        }
    }
}
