//! Browser client for canvas Pong
//!
//! The host page owns a `GameClient` and drives it from its
//! `requestAnimationFrame` callback; pointer and button handlers call the
//! command methods. All game rules live in `game_core`.

#![cfg(target_arch = "wasm32")]

macro_rules! console_log {
    ($($t:tt)*) => {
        web_sys::console::log_1(&format!($($t)*).into())
    };
}

mod input;
mod renderer;

use game_core::{MatchState, Side};
use renderer::CanvasRenderer;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent};

/// One match bound to one canvas
#[wasm_bindgen]
pub struct GameClient {
    game: MatchState,
    renderer: CanvasRenderer,
}

#[wasm_bindgen]
impl GameClient {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<GameClient, JsValue> {
        console_error_panic_hook::set_once();

        let game = MatchState::new();
        let renderer = CanvasRenderer::new(canvas, &game.config)?;
        console_log!(
            "pong client ready ({}x{})",
            game.config.board_width,
            game.config.board_height
        );

        Ok(Self { game, renderer })
    }

    /// One animation frame: advance the match, then draw. Drawing is
    /// unconditional so the board stays visible while paused and after the
    /// match ends.
    pub fn frame(&mut self) -> Result<(), JsValue> {
        self.game.tick();
        self.renderer.render(&self.game.snapshot(), &self.game.config)
    }

    /// Pointer-move handler: retarget the player paddle
    pub fn on_pointer_move(&mut self, event: MouseEvent) {
        let target_y = input::pointer_board_y(&event, self.renderer.canvas());
        self.game.set_player_target(target_y);
    }

    /// Pause button handler
    pub fn toggle_pause(&mut self) {
        self.game.toggle_pause();
    }

    /// Restart button handler
    pub fn restart(&mut self) {
        self.game.restart();
    }

    pub fn player_score(&self) -> u8 {
        self.game.scores().0
    }

    pub fn ai_score(&self) -> u8 {
        self.game.scores().1
    }

    pub fn paused(&self) -> bool {
        self.game.paused()
    }

    pub fn game_over(&self) -> bool {
        self.game.game_over()
    }

    /// Status line for the page chrome; empty while the match is live
    pub fn status_text(&self) -> String {
        match self.game.winner() {
            Some(Side::Player) => "You Win!".to_string(),
            Some(Side::Ai) => "AI Wins!".to_string(),
            None => String::new(),
        }
    }
}
