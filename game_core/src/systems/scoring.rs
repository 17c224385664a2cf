use hecs::World;

use crate::components::{Ball, Side};
use crate::config::Config;
use crate::resources::{Events, MatchStatus, Score};

/// Award a point when the ball's leading edge crosses a side boundary, then
/// serve toward the scorer.
pub fn check_scoring(world: &mut World, config: &Config, score: &mut Score, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x - config.ball_radius < 0.0 {
            score.award(Side::Ai);
            events.ai_scored = true;
            log::debug!("point to AI ({}-{})", score.player, score.ai);
            ball.serve(config.board_center(), config.ball_base_speed);
        } else if ball.pos.x + config.ball_radius > config.board_width {
            score.award(Side::Player);
            events.player_scored = true;
            log::debug!("point to player ({}-{})", score.player, score.ai);
            ball.serve(config.board_center(), config.ball_base_speed);
        }
    }
}

/// End the match once either side reaches the winning score
pub fn check_win(config: &Config, score: &Score, status: &mut MatchStatus, events: &mut Events) {
    if status.game_over {
        return;
    }
    if let Some(winner) = score.winner(config.win_score) {
        status.game_over = true;
        status.winner = Some(winner);
        events.match_ended = true;
        log::info!(
            "match over: {:?} wins {}-{}",
            winner,
            score.player,
            score.ai
        );
    }
}
