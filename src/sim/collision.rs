//! Cursor hit tests against entity footprints
//!
//! Edges count as inside, matching how a filled canvas path treats points
//! on its boundary.

use glam::Vec2;

/// Point inside (or on) a disc
#[inline]
pub fn point_in_circle(center: Vec2, radius: f32, point: Vec2) -> bool {
    center.distance_squared(point) <= radius * radius
}

/// Point inside (or on) an axis-aligned rectangle given by its top-left corner
#[inline]
pub fn point_in_rect(origin: Vec2, size: Vec2, point: Vec2) -> bool {
    crate::rect_contains(origin, size, point)
}
