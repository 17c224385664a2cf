use glam::Vec2;
use hecs::World;

use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::geom::Aabb;
use crate::resources::Events;

/// Ball-versus-paddle overlap test. The ball is treated as an axis-aligned
/// box of side 2·radius, not a true circle; the bounce response is tuned
/// against this approximation, so it must stay box-vs-box.
pub fn collision(ball_pos: Vec2, ball_radius: f32, paddle: &Aabb) -> bool {
    let ball_box = Aabb::from_center_size(ball_pos, Vec2::splat(ball_radius * 2.0));
    ball_box.overlaps(paddle)
}

/// Bounce the ball off the top and bottom walls. The reflection is a plain
/// sign flip with no position correction, so the ball can overlap the wall
/// for a frame at high speed.
pub fn bounce_walls(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y - config.ball_radius < 0.0 || ball.pos.y + config.ball_radius > config.board_height
        {
            ball.vel.y = -ball.vel.y;
            events.wall_bounce = true;
        }
    }
}

/// Bounce the ball off the paddles, player side first.
///
/// The contact point relative to the paddle center picks the bounce angle
/// (up to ±45° at the tips); the new velocity magnitude comes from the
/// scalar rally speed, which then grows for the next exchange. The contact
/// offset is deliberately left unclamped: on corner contact it can slightly
/// exceed [-1, 1], exactly as the tuned behavior expects.
pub fn bounce_paddles(world: &mut World, config: &Config, events: &mut Events) {
    let mut paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.y))
        .collect();
    paddles.sort_by_key(|(side, _)| *side != Side::Player);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for (side, paddle_y) in &paddles {
            let rect = config.paddle_rect(*side, *paddle_y);
            if !collision(ball.pos, config.ball_radius, &rect) {
                continue;
            }

            let collide_point = (ball.pos.y - rect.center().y) / rect.half_height();
            let angle = config.max_bounce_angle * collide_point;
            let direction = match side {
                Side::Player => 1.0,
                Side::Ai => -1.0,
            };

            ball.vel.x = direction * ball.speed * angle.cos();
            ball.vel.y = ball.speed * angle.sin();
            ball.speed += config.ball_speed_increment;

            events.paddle_bounce = true;
        }
    }
}
