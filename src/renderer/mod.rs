//! Rendering module
//!
//! The simulation never draws. After each tick the scene functions paint the
//! current `GameState` onto a `Surface`: the browser canvas on wasm32, or a
//! recording surface for headless runs and tests.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;
pub mod scene;

use glam::Vec2;

pub use recording::{DrawCommand, RecordingSurface};
pub use scene::{draw_entity, render_frame, render_game_over, render_idle};

/// Drawing target with a modal notification channel
pub trait Surface {
    /// Erase the whole surface
    fn clear(&mut self);
    /// Filled disc centred at `center`
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);
    /// Filled rectangle with `origin` as its top-left corner
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: &str);
    /// Text with its baseline starting at `pos`
    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: &str);
    /// Blocking message to the player
    fn notify(&mut self, message: &str);
}
