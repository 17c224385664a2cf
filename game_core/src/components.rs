use glam::Vec2;

/// Which side of the board a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player, // Left, driven by pointer input
    Ai,     // Right, driven by the tracker
}

/// Paddle component. `y` is the top edge; the x position and extents are
/// fixed per side and live in `Config`.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }
}

/// Ball component. `speed` is the scalar rally speed; `vel` only re-tracks
/// it when a paddle bounce recomputes the direction.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub speed: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, speed: f32) -> Self {
        Self { pos, vel, speed }
    }

    /// Serve after a point: recenter, flip the horizontal direction, drop the
    /// rally speed back to base. The velocity magnitude and `vel.y` are left
    /// alone until the next paddle bounce re-derives them from `speed`.
    pub fn serve(&mut self, center: Vec2, base_speed: f32) {
        self.pos = center;
        self.vel.x = -self.vel.x;
        self.speed = base_speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Params;

    #[test]
    fn test_serve_recenters_and_resets_speed() {
        let mut ball = Ball::new(Vec2::new(37.0, 251.0), Vec2::new(6.2, -3.1), 9.8);
        let center = Vec2::new(300.0, 200.0);

        ball.serve(center, Params::BALL_BASE_SPEED);

        assert_eq!(ball.pos, center);
        assert_eq!(ball.speed, Params::BALL_BASE_SPEED);
    }

    #[test]
    fn test_serve_flips_direction_keeps_vertical() {
        let mut ball = Ball::new(Vec2::ZERO, Vec2::new(6.2, -3.1), 9.8);

        ball.serve(Vec2::new(300.0, 200.0), Params::BALL_BASE_SPEED);

        assert_eq!(ball.vel.x, -6.2, "Horizontal direction flips, magnitude kept");
        assert_eq!(ball.vel.y, -3.1, "Vertical velocity is untouched by a serve");
    }
}
