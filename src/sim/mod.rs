//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed-rate ticks only
//! - Seeded RNG only
//! - Stable iteration order (roster insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod motion;
pub mod state;
pub mod tick;

pub use collision::{point_in_circle, point_in_rect};
pub use entity::{Board, Entity, Motion, Palette, Shape};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{scores_on, tick};
