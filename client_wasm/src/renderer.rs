//! Canvas-2D renderer
//!
//! Draws the whole frame from a `Snapshot`: background, net, paddles, ball,
//! scores. Nothing here reads or writes simulation state.

use game_core::{Config, Side, Snapshot};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const BACKGROUND_COLOR: &str = "#222";
const NET_COLOR: &str = "#fff";
const BALL_COLOR: &str = "#fff";
const TEXT_COLOR: &str = "#fff";
const PLAYER_COLOR: &str = "#4CAF50";
const AI_COLOR: &str = "#F44336";
const SCORE_FONT: &str = "40px Arial";

const NET_WIDTH: f64 = 4.0;
const NET_SEGMENT: f64 = 20.0;
const NET_SPACING: f64 = 30.0;
const SCORE_BASELINE: f64 = 60.0;

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement, config: &Config) -> Result<Self, JsValue> {
        canvas.set_width(config.board_width as u32);
        canvas.set_height(config.board_height as u32);

        let ctx = canvas
            .get_context("2d")
            .map_err(|e| JsValue::from_str(&format!("Failed to get 2d context: {:?}", e)))?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn draw_rect(&self, x: f64, y: f64, w: f64, h: f64, color: &str) {
        self.ctx.set_fill_style(&JsValue::from_str(color));
        self.ctx.fill_rect(x, y, w, h);
    }

    fn draw_circle(&self, x: f64, y: f64, r: f64, color: &str) -> Result<(), JsValue> {
        self.ctx.set_fill_style(&JsValue::from_str(color));
        self.ctx.begin_path();
        self.ctx.arc(x, y, r, 0.0, std::f64::consts::TAU)?;
        self.ctx.close_path();
        self.ctx.fill();
        Ok(())
    }

    fn draw_text(&self, text: &str, x: f64, y: f64) -> Result<(), JsValue> {
        self.ctx.set_fill_style(&JsValue::from_str(TEXT_COLOR));
        self.ctx.set_font(SCORE_FONT);
        self.ctx.fill_text(text, x, y)
    }

    /// Draw one complete frame
    pub fn render(&self, snapshot: &Snapshot, config: &Config) -> Result<(), JsValue> {
        let w = f64::from(config.board_width);
        let h = f64::from(config.board_height);

        self.draw_rect(0.0, 0.0, w, h, BACKGROUND_COLOR);

        // Dashed center net
        let mut y = 0.0;
        while y < h {
            self.draw_rect(w / 2.0 - NET_WIDTH / 2.0, y, NET_WIDTH, NET_SEGMENT, NET_COLOR);
            y += NET_SPACING;
        }

        let paddle_w = f64::from(config.paddle_width);
        let paddle_h = f64::from(config.paddle_height);
        self.draw_rect(
            f64::from(config.paddle_x(Side::Player)),
            f64::from(snapshot.player_y),
            paddle_w,
            paddle_h,
            PLAYER_COLOR,
        );
        self.draw_rect(
            f64::from(config.paddle_x(Side::Ai)),
            f64::from(snapshot.ai_y),
            paddle_w,
            paddle_h,
            AI_COLOR,
        );

        self.draw_circle(
            f64::from(snapshot.ball_pos.x),
            f64::from(snapshot.ball_pos.y),
            f64::from(config.ball_radius),
            BALL_COLOR,
        )?;

        self.draw_text(&snapshot.player_score.to_string(), w / 4.0, SCORE_BASELINE)?;
        self.draw_text(&snapshot.ai_score.to_string(), 3.0 * w / 4.0, SCORE_BASELINE)?;

        Ok(())
    }
}
