use glam::Vec2;
use hecs::World;

use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::resources::{Command, Events, InputQueue, MatchStatus, Score};
use crate::{create_ball, create_paddle, step};

/// A complete match: entity world plus the scalar resources around it.
///
/// The loop driver owns one of these and calls `tick` once per display
/// frame; input callbacks only enqueue commands. Nothing here is global.
pub struct MatchState {
    pub world: World,
    pub config: Config,
    pub score: Score,
    pub status: MatchStatus,
    pub events: Events,
    pub queue: InputQueue,
}

impl MatchState {
    pub fn new() -> Self {
        Self::with_config(Config::new())
    }

    pub fn with_config(config: Config) -> Self {
        let mut world = World::new();
        let spawn_y = config.paddle_spawn_y();
        create_paddle(&mut world, Side::Player, spawn_y);
        create_paddle(&mut world, Side::Ai, spawn_y);
        // The opening serve travels down-right at the base speed per axis
        create_ball(
            &mut world,
            config.board_center(),
            Vec2::splat(config.ball_base_speed),
            config.ball_base_speed,
        );

        Self {
            world,
            config,
            score: Score::new(),
            status: MatchStatus::new(),
            events: Events::new(),
            queue: InputQueue::new(),
        }
    }

    /// Run one frame of the simulation
    pub fn tick(&mut self) {
        step(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.status,
            &mut self.events,
            &mut self.queue,
        );
    }

    pub fn queue_command(&mut self, command: Command) {
        self.queue.push(command);
    }

    /// Pointer moved: request the player paddle be centered on this board Y
    pub fn set_player_target(&mut self, target_y: f32) {
        self.queue.push(Command::MovePlayer { target_y });
    }

    pub fn toggle_pause(&mut self) {
        self.queue.push(Command::TogglePause);
    }

    pub fn restart(&mut self) {
        self.queue.push(Command::Restart);
    }

    pub fn paused(&self) -> bool {
        self.status.paused
    }

    pub fn game_over(&self) -> bool {
        self.status.game_over
    }

    pub fn winner(&self) -> Option<Side> {
        self.status.winner
    }

    pub fn scores(&self) -> (u8, u8) {
        (self.score.player, self.score.ai)
    }

    /// Plain-data view of the current frame for the renderer
    pub fn snapshot(&self) -> Snapshot {
        let mut snapshot = Snapshot {
            ball_pos: self.config.board_center(),
            player_y: 0.0,
            ai_y: 0.0,
            player_score: self.score.player,
            ai_score: self.score.ai,
            paused: self.status.paused,
            game_over: self.status.game_over,
            winner: self.status.winner,
        };
        for (_e, ball) in self.world.query::<&Ball>().iter() {
            snapshot.ball_pos = ball.pos;
        }
        for (_e, paddle) in self.world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Player => snapshot.player_y = paddle.y,
                Side::Ai => snapshot.ai_y = paddle.y,
            }
        }
        snapshot
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the renderer needs to draw a frame
#[derive(Debug, Clone, Copy)]
pub struct Snapshot {
    pub ball_pos: Vec2,
    pub player_y: f32,
    pub ai_y: f32,
    pub player_score: u8,
    pub ai_score: u8,
    pub paused: bool,
    pub game_over: bool,
    pub winner: Option<Side>,
}
