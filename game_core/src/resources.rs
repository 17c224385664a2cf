use crate::components::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub player: u8,
    pub ai: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn award(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Ai => self.ai += 1,
        }
    }

    pub fn reset(&mut self) {
        self.player = 0;
        self.ai = 0;
    }

    /// Winner once either side reaches `win_score`. The player only wins
    /// when strictly ahead; otherwise the point goes to the AI.
    pub fn winner(&self, win_score: u8) -> Option<Side> {
        if self.player >= win_score || self.ai >= win_score {
            if self.player > self.ai {
                Some(Side::Player)
            } else {
                Some(Side::Ai)
            }
        } else {
            None
        }
    }
}

/// Pause / game-over flags for the running match
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchStatus {
    pub paused: bool,
    pub game_over: bool,
    pub winner: Option<Side>,
}

impl MatchStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while the update step may mutate entity state
    pub fn is_running(&self) -> bool {
        !self.paused && !self.game_over
    }

    pub fn clear(&mut self) {
        self.paused = false;
        self.game_over = false;
        self.winner = None;
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub wall_bounce: bool,
    pub paddle_bounce: bool,
    pub player_scored: bool,
    pub ai_scored: bool,
    pub match_ended: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A discrete signal from the input surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Pointer moved: center the player paddle on this board-space Y
    MovePlayer { target_y: f32 },
    TogglePause,
    Restart,
}

/// Queue of commands from pointer and UI callbacks, drained at the start of
/// each tick so all mutation happens on the frame path.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    commands: Vec<Command>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn drain(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
