/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Board (canvas pixels, top-left origin, y grows downward)
    pub const BOARD_WIDTH: f32 = 600.0;
    pub const BOARD_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 16.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_BASE_SPEED: f32 = 5.0; // pixels per frame
    pub const BALL_SPEED_INCREMENT: f32 = 0.3; // Added to speed on paddle hit
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4; // ±45°

    // AI paddle
    pub const AI_SPEED: f32 = 4.0; // pixels per frame
    pub const AI_DEAD_ZONE: f32 = 10.0; // Tolerance band around the ball

    // Score
    pub const WIN_SCORE: u8 = 5; // First to 5 wins
}
