use hecs::World;

use crate::components::{Ball, Paddle, Side};
use crate::config::Config;

/// Reactive AI: nudge the paddle toward the ball's vertical position at a
/// fixed speed. The dead zone around the paddle center keeps it from
/// jittering once the ball is lined up. No prediction, no randomness.
pub fn track_ball(world: &mut World, config: &Config) {
    let ball_y = match world.query::<&Ball>().iter().next() {
        Some((_e, ball)) => ball.pos.y,
        None => return,
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Ai {
            continue;
        }
        let center = paddle.y + config.paddle_height / 2.0;
        if ball_y < center - config.ai_dead_zone {
            paddle.y -= config.ai_speed;
        } else if ball_y > center + config.ai_dead_zone {
            paddle.y += config.ai_speed;
        }
    }
}
