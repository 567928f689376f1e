//! Scene composition: start screen, running frame and game-over screen

use glam::Vec2;

use super::Surface;
use crate::sim::{Entity, GameState, Shape};
use crate::start_button;

const BUTTON_COLOR: &str = "blue";
const BUTTON_LABEL: &str = "Start Game";
const BUTTON_FONT: &str = "22px Arial";
const TEXT_COLOR: &str = "black";
const SCORE_FONT: &str = "16px Arial";
const FINAL_SCORE_FONT: &str = "32px Arial";

/// Draw one entity's footprint
pub fn draw_entity(surface: &mut impl Surface, entity: &Entity) {
    let color = entity.color.css();
    match entity.shape {
        Shape::Circle { radius } => surface.fill_circle(entity.pos, radius, color),
        Shape::Rect { size } => surface.fill_rect(entity.pos, size, color),
    }
}

fn draw_start_button(surface: &mut impl Surface) {
    let (origin, size) = start_button();
    surface.fill_rect(origin, size, BUTTON_COLOR);
    surface.fill_text(BUTTON_LABEL, origin + Vec2::new(20.0, 45.0), BUTTON_FONT, "white");
}

/// Waiting for the first start press
pub fn render_idle(surface: &mut impl Surface) {
    surface.clear();
    draw_start_button(surface);
}

/// One running frame: entities in roster order, then the score overlay
pub fn render_frame(surface: &mut impl Surface, state: &GameState, show_score: bool) {
    surface.clear();
    for entity in &state.entities {
        draw_entity(surface, entity);
    }
    if show_score {
        surface.fill_text(
            &format!("Score: {}", state.score),
            Vec2::new(8.0, 20.0),
            SCORE_FONT,
            TEXT_COLOR,
        );
    }
}

/// Final score above the restart button
pub fn render_game_over(surface: &mut impl Surface, state: &GameState) {
    surface.clear();
    surface.fill_text(
        &format!("Your Score: {}", state.score),
        Vec2::new(220.0, 240.0),
        FINAL_SCORE_FONT,
        TEXT_COLOR,
    );
    draw_start_button(surface);
}
