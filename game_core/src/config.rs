use glam::Vec2;

use crate::components::Side;
use crate::geom::Aabb;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub board_width: f32,
    pub board_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_radius: f32,
    pub ball_base_speed: f32,
    pub ball_speed_increment: f32,
    pub max_bounce_angle: f32,
    pub ai_speed: f32,
    pub ai_dead_zone: f32,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_width: Params::BOARD_WIDTH,
            board_height: Params::BOARD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            ball_radius: Params::BALL_RADIUS,
            ball_base_speed: Params::BALL_BASE_SPEED,
            ball_speed_increment: Params::BALL_SPEED_INCREMENT,
            max_bounce_angle: Params::MAX_BOUNCE_ANGLE,
            ai_speed: Params::AI_SPEED,
            ai_dead_zone: Params::AI_DEAD_ZONE,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Board center, where the ball spawns and serves from
    pub fn board_center(&self) -> Vec2 {
        Vec2::new(self.board_width / 2.0, self.board_height / 2.0)
    }

    /// Top-edge Y that vertically centers a paddle
    pub fn paddle_spawn_y(&self) -> f32 {
        (self.board_height - self.paddle_height) / 2.0
    }

    /// Get X position (left edge) for a paddle on the given side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => 0.0,
            Side::Ai => self.board_width - self.paddle_width,
        }
    }

    /// Clamp a paddle's top-edge Y to the board
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.board_height - self.paddle_height)
    }

    /// Rectangle occupied by a paddle at the given top-edge Y
    pub fn paddle_rect(&self, side: Side, y: f32) -> Aabb {
        let x = self.paddle_x(side);
        Aabb::new(
            Vec2::new(x, y),
            Vec2::new(x + self.paddle_width, y + self.paddle_height),
        )
    }

    /// Bounding box of the ball at `pos` (side length 2·radius)
    pub fn ball_box(&self, pos: Vec2) -> Aabb {
        Aabb::from_center_size(pos, Vec2::splat(self.ball_radius * 2.0))
    }
}
