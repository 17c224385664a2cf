use game_core::*;
use glam::Vec2;

fn ball_mut(game: &mut MatchState) -> &mut Ball {
    let entity = game
        .world
        .query::<&Ball>()
        .iter()
        .map(|(e, _b)| e)
        .next()
        .unwrap();
    game.world.query_one_mut::<&mut Ball>(entity).unwrap()
}

/// Drive the ball to just inside the left boundary so the next integration
/// step carries it across.
fn aim_ball_at_left_edge(game: &mut MatchState) {
    let ball = ball_mut(game);
    ball.pos = Vec2::new(4.0, 200.0);
    ball.vel = Vec2::new(-5.0, 0.0);
}

#[test]
fn test_left_edge_crossing_scores_and_serves() {
    let mut game = MatchState::new();
    aim_ball_at_left_edge(&mut game);

    game.tick();

    assert_eq!(game.scores(), (0, 1));
    assert!(game.events.ai_scored);

    let snapshot = game.snapshot();
    assert_eq!(snapshot.ball_pos, game.config.board_center());
}

#[test]
fn test_ai_reaches_win_score_and_match_ends() {
    let mut game = MatchState::new();

    for point in 1..=game.config.win_score {
        aim_ball_at_left_edge(&mut game);
        game.tick();
        assert_eq!(game.scores().1, point);
    }

    assert!(game.game_over());
    assert_eq!(game.winner(), Some(Side::Ai));
    assert!(game.events.match_ended);

    // Frozen from here on: entity state stops changing
    let before = game.snapshot();
    game.tick();
    let after = game.snapshot();
    assert_eq!(after.ball_pos, before.ball_pos);
    assert_eq!(game.scores(), (0, 5));
}

#[test]
fn test_player_win_reports_player() {
    let mut game = MatchState::new();

    let inside_right = game.config.board_width - 4.0;
    for _ in 0..game.config.win_score {
        let ball = ball_mut(&mut game);
        ball.pos = Vec2::new(inside_right, 200.0);
        ball.vel = Vec2::new(5.0, 0.0);
        game.tick();
    }

    assert!(game.game_over());
    assert_eq!(game.winner(), Some(Side::Player));
    assert_eq!(game.scores(), (5, 0));
}

#[test]
fn test_rally_speed_growth_survives_until_serve() {
    let mut game = MatchState::new();

    // Park the ball on the player paddle face for a bounce
    let paddle_face = game.config.paddle_width + game.config.ball_radius - 1.0;
    {
        let ball = ball_mut(&mut game);
        ball.pos = Vec2::new(paddle_face + 5.0, 200.0);
        ball.vel = Vec2::new(-5.0, 0.0);
        ball.speed = 5.0;
    }
    game.tick();
    assert!(game.events.paddle_bounce);

    let speed_after_bounce = ball_mut(&mut game).speed;
    assert!((speed_after_bounce - 5.3).abs() < 1e-5);

    // A point against either side drops the rally speed back to base
    aim_ball_at_left_edge(&mut game);
    game.tick();
    let speed_after_serve = ball_mut(&mut game).speed;
    assert_eq!(speed_after_serve, game.config.ball_base_speed);
}

#[test]
fn test_wall_bounce_mid_rally() {
    let mut game = MatchState::new();
    {
        let ball = ball_mut(&mut game);
        ball.pos = Vec2::new(300.0, 12.0);
        ball.vel = Vec2::new(3.0, -4.0);
    }

    game.tick();

    assert!(game.events.wall_bounce);
    let ball = ball_mut(&mut game);
    assert_eq!(ball.vel, Vec2::new(3.0, 4.0));
}

#[test]
fn test_paddles_stay_in_bounds_over_a_long_run() {
    let mut game = MatchState::new();

    for i in 0..600 {
        // Sweep the pointer well past both edges
        let target = if i % 2 == 0 { -200.0 } else { 900.0 };
        game.set_player_target(target);
        game.tick();

        let snapshot = game.snapshot();
        let max_y = game.config.board_height - game.config.paddle_height;
        assert!(snapshot.player_y >= 0.0 && snapshot.player_y <= max_y);
        assert!(snapshot.ai_y >= 0.0 && snapshot.ai_y <= max_y);

        if game.game_over() {
            break;
        }
    }
}

#[test]
fn test_pause_resume_round_trip() {
    let mut game = MatchState::new();
    game.tick();
    game.toggle_pause();
    game.tick();
    let frozen = game.snapshot();

    for _ in 0..10 {
        game.tick();
    }
    assert_eq!(game.snapshot().ball_pos, frozen.ball_pos);

    game.toggle_pause();
    game.tick();
    assert!(!game.paused());
    assert_ne!(game.snapshot().ball_pos, frozen.ball_pos);
}
