//! Entities: shape footprints, movement strategies and spawn placement
//!
//! An entity is a footprint (`Shape`) combined with a pluggable movement
//! strategy (`Motion`). The fleeing square is a square rectangle footprint
//! with the `Flee` strategy; drawing only looks at the footprint.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{point_in_circle, point_in_rect};
use super::motion;
use crate::consts::*;

/// The playing field. Coordinates run from (0, 0) to `size`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub size: Vec2,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}

impl Board {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
        }
    }

    pub fn center(&self) -> Vec2 {
        self.size / 2.0
    }

    /// Whether `pos` keeps at least `margin` away from every edge
    pub fn holds(&self, pos: Vec2, margin: Vec2) -> bool {
        pos.x >= margin.x
            && pos.x <= self.size.x - margin.x
            && pos.y >= margin.y
            && pos.y <= self.size.y - margin.y
    }
}

/// Entity footprint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Disc centred on the entity position
    Circle { radius: f32 },
    /// Rectangle with the entity position as its top-left corner
    Rect { size: Vec2 },
}

impl Shape {
    /// Distance kept from the board edges when spawning and moving.
    ///
    /// Circles use their radius on both axes; rectangles use their full
    /// width on x and height on y.
    pub fn margin(&self) -> Vec2 {
        match *self {
            Shape::Circle { radius } => Vec2::splat(radius),
            Shape::Rect { size } => size,
        }
    }

    /// Point containment for this footprint placed at `pos`
    pub fn contains(&self, pos: Vec2, point: Vec2) -> bool {
        match *self {
            Shape::Circle { radius } => point_in_circle(pos, radius, point),
            Shape::Rect { size } => point_in_rect(pos, size, point),
        }
    }
}

/// Movement strategy applied once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Motion {
    /// Bounce off the board walls, ignoring the cursor
    Bounce,
    /// Head straight for the cursor
    Chase,
    /// Run away from the cursor, halting at the walls
    Flee,
}

/// Display colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Palette {
    Hostile,
    Prey,
}

impl Palette {
    pub fn css(&self) -> &'static str {
        match self {
            Palette::Hostile => "#eb0909",
            Palette::Prey => "#0eeb3a",
        }
    }
}

/// A moving shape on the board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Scalar applied to every step, drawn from [0, MAX_SPEED)
    pub speed: f32,
    pub color: Palette,
    pub shape: Shape,
    pub motion: Motion,
}

impl Entity {
    /// Create an entity with a random speed and a random in-bounds position
    pub fn spawn<R: Rng>(
        id: u32,
        shape: Shape,
        motion: Motion,
        color: Palette,
        board: &Board,
        rng: &mut R,
    ) -> Self {
        let (dx, dy) = INITIAL_VELOCITY;
        let mut entity = Self {
            id,
            pos: Vec2::ZERO,
            vel: Vec2::new(dx, dy),
            speed: rng.random_range(0.0..MAX_SPEED),
            color,
            shape,
            motion,
        };
        entity.place_randomly(board, None, rng);
        entity
    }

    /// Bouncing ball pursuer
    pub fn circle<R: Rng>(id: u32, radius: f32, board: &Board, rng: &mut R) -> Self {
        Self::spawn(
            id,
            Shape::Circle { radius },
            Motion::Bounce,
            Palette::Hostile,
            board,
            rng,
        )
    }

    /// Cursor-tracking rectangle pursuer
    pub fn rectangle<R: Rng>(
        id: u32,
        width: f32,
        height: f32,
        board: &Board,
        rng: &mut R,
    ) -> Self {
        Self::spawn(
            id,
            Shape::Rect {
                size: Vec2::new(width, height),
            },
            Motion::Chase,
            Palette::Hostile,
            board,
            rng,
        )
    }

    /// The fleeing square
    pub fn square<R: Rng>(id: u32, side: f32, board: &Board, rng: &mut R) -> Self {
        Self::spawn(
            id,
            Shape::Rect {
                size: Vec2::splat(side),
            },
            Motion::Flee,
            Palette::Prey,
            board,
            rng,
        )
    }

    /// Touching this entity scores instead of ending the game
    pub fn is_evader(&self) -> bool {
        self.motion == Motion::Flee
    }

    /// Move to a uniformly random integer position at least `margin` from
    /// every edge (the footprint's own margin when `None`).
    ///
    /// Returns false when sampling gave up and fell back to the board centre.
    pub fn place_randomly<R: Rng>(
        &mut self,
        board: &Board,
        margin: Option<Vec2>,
        rng: &mut R,
    ) -> bool {
        let margin = margin.unwrap_or_else(|| self.shape.margin());
        let span_x = (board.size.x as u32).max(1);
        let span_y = (board.size.y as u32).max(1);

        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let candidate = Vec2::new(
                rng.random_range(0..span_x) as f32,
                rng.random_range(0..span_y) as f32,
            );
            if board.holds(candidate, margin) {
                self.pos = candidate;
                return true;
            }
        }

        log::warn!(
            "Entity {} found no spot with margin {:?} after {} attempts, using board centre",
            self.id,
            margin,
            MAX_PLACEMENT_ATTEMPTS
        );
        self.pos = board.center();
        false
    }

    /// Apply one tick of this entity's movement strategy
    pub fn advance(&mut self, board: &Board, cursor: Option<Vec2>) {
        let margin = self.shape.margin();
        match self.motion {
            Motion::Bounce => {
                let (pos, vel) = motion::bounce(self.pos, self.vel, self.speed, margin, board);
                self.pos = pos;
                self.vel = vel;
            }
            Motion::Chase => {
                if let Some((pos, vel)) = cursor.and_then(|c| motion::chase(self.pos, self.speed, c))
                {
                    self.pos = pos;
                    self.vel = vel;
                }
            }
            Motion::Flee => {
                if let Some((pos, vel)) =
                    cursor.and_then(|c| motion::flee(self.pos, self.speed, c, margin, board))
                {
                    self.pos = pos;
                    self.vel = vel;
                }
            }
        }
    }

    /// Whether `point` lies inside the footprint at the current position
    pub fn contains(&self, point: Vec2) -> bool {
        self.shape.contains(self.pos, point)
    }
}
