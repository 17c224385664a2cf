//! Pointer input handling

use web_sys::{HtmlCanvasElement, MouseEvent};

/// Board-space Y for a pointer event. The canvas is sized 1:1 with the
/// board, so this is just the event position relative to the canvas top;
/// clamping to the playfield happens in the core.
pub fn pointer_board_y(event: &MouseEvent, canvas: &HtmlCanvasElement) -> f32 {
    let rect = canvas.get_bounding_client_rect();
    event.client_y() as f32 - rect.top() as f32
}
