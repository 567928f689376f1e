//! In-memory surface for headless runs and tests

use glam::Vec2;

use super::Surface;

/// A recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Circle { center: Vec2, radius: f32, color: String },
    Rect { origin: Vec2, size: Vec2, color: String },
    Text { text: String, pos: Vec2, font: String, color: String },
}

/// Surface that remembers every call since the last `clear`
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    /// Every notification ever raised, oldest first
    pub notifications: Vec<String>,
    /// Number of `clear` calls, i.e. frames drawn
    pub frames: u64,
}

impl RecordingSurface {
    /// Text drawn in the current frame
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        self.frames += 1;
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color: color.to_string(),
        });
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: &str) {
        self.commands.push(DrawCommand::Rect {
            origin,
            size,
            color: color.to_string(),
        });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: &str) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            font: font.to_string(),
            color: color.to_string(),
        });
    }

    fn notify(&mut self, message: &str) {
        log::info!("Notification: {}", message);
        self.notifications.push(message.to_string());
    }
}
