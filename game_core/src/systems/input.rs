use hecs::World;

use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::resources::{Command, InputQueue, MatchStatus, Score};

/// Drain queued commands and apply them.
///
/// Runs before the pause/game-over guard so the paddle keeps following the
/// pointer while frozen, pause can be released, and restart works from the
/// game-over screen.
pub fn ingest_inputs(
    world: &mut World,
    queue: &mut InputQueue,
    config: &Config,
    score: &mut Score,
    status: &mut MatchStatus,
) {
    for command in queue.drain() {
        match command {
            Command::MovePlayer { target_y } => {
                for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
                    if paddle.side == Side::Player {
                        // Center the paddle on the pointer, clamped to the board
                        paddle.y = config.clamp_paddle_y(target_y - config.paddle_height / 2.0);
                    }
                }
            }
            Command::TogglePause => {
                // Pause has no meaning once the match is decided
                if !status.game_over {
                    status.paused = !status.paused;
                }
            }
            Command::Restart => {
                score.reset();
                status.clear();
                for (_entity, ball) in world.query_mut::<&mut Ball>() {
                    ball.serve(config.board_center(), config.ball_base_speed);
                }
            }
        }
    }
}
