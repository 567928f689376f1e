//! Shape Chase - dodge the chasing shapes, catch the fleeing square
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, movement, scoring, session phases)
//! - `renderer`: Drawing surface abstraction and scene composition
//! - `platform`: Browser/native platform abstraction (periodic timer)
//! - `game`: Controller tying input, timer, simulation and rendering together
//! - `settings`: Persisted display and diagnostic preferences

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::{LogLevel, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Board dimensions (canvas pixels)
    pub const BOARD_WIDTH: f32 = 600.0;
    pub const BOARD_HEIGHT: f32 = 600.0;

    /// Timer period between simulation ticks, in milliseconds
    pub const TICK_INTERVAL_MS: u32 = 10;

    /// Survival point awarded on the first tick and every this many ticks after
    pub const SCORE_INTERVAL: u64 = 100;
    /// Points for touching the fleeing square
    pub const ESCAPE_BONUS: u64 = 5;

    /// Initial velocity delta for every entity (only bouncers keep it)
    pub const INITIAL_VELOCITY: (f32, f32) = (2.0, -2.0);
    /// Upper bound (exclusive) for the random per-entity speed
    pub const MAX_SPEED: f32 = 2.0;
    /// Fixed step of the fleeing square before speed scaling
    pub const FLEE_STEP: f32 = 0.5;

    /// Shape sizes are integers in [MIN_SHAPE_SIZE, MIN_SHAPE_SIZE + SHAPE_SIZE_SPREAD)
    pub const MIN_SHAPE_SIZE: u32 = 20;
    pub const SHAPE_SIZE_SPREAD: u32 = 20;

    /// Rejection-sampling cap for random placement
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

    /// Start/restart button (x, y, width, height)
    pub const START_BUTTON: (f32, f32, f32, f32) = (250.0, 270.0, 150.0, 75.0);
}

/// Axis-aligned rectangle test with inclusive edges
#[inline]
pub fn rect_contains(origin: Vec2, size: Vec2, point: Vec2) -> bool {
    point.x >= origin.x
        && point.x <= origin.x + size.x
        && point.y >= origin.y
        && point.y <= origin.y + size.y
}

/// The start/restart button as (origin, size)
#[inline]
pub fn start_button() -> (Vec2, Vec2) {
    let (x, y, w, h) = consts::START_BUTTON;
    (Vec2::new(x, y), Vec2::new(w, h))
}
