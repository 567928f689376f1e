//! Session state and lifecycle
//!
//! Everything a tick reads or writes lives in `GameState`; there is no
//! ambient shared state.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Board, Entity};
use crate::consts::*;

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the start button
    Idle,
    /// Ticking, score accumulating
    Running,
    /// Run ended; waiting for a restart press
    GameOver,
}

/// Things that happened during a tick or an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new session began
    Started,
    /// Survival point awarded
    ScoreTick { score: u64 },
    /// Cursor touched the fleeing square, which moved elsewhere
    Escaped { id: u32, score: u64 },
    /// Cursor touched a pursuer
    Caught { id: u32 },
    /// Cursor left the board while running
    LeftBoard,
}

impl GameEvent {
    /// Whether this event ends the session
    pub fn is_loss(&self) -> bool {
        matches!(self, GameEvent::Caught { .. } | GameEvent::LeftBoard)
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub board: Board,
    pub phase: GamePhase,
    pub score: u64,
    /// Ticks since the session started
    pub frame: u64,
    /// Active entities; insertion order is draw and update order
    pub entities: Vec<Entity>,
    /// Last known pointer position, if any
    pub cursor: Option<Vec2>,
    rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create an idle session on the default board
    pub fn new(seed: u64) -> Self {
        Self::with_board(seed, Board::default())
    }

    pub fn with_board(seed: u64, board: Board) -> Self {
        Self::with_rng(seed, board, Pcg32::seed_from_u64(seed))
    }

    /// Create an idle session drawing randomness from `rng`
    pub fn with_rng(seed: u64, board: Board, rng: Pcg32) -> Self {
        Self {
            seed,
            board,
            phase: GamePhase::Idle,
            score: 0,
            frame: 0,
            entities: Vec::new(),
            cursor: None,
            rng,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Random integer shape size in [20, 40)
    fn random_size(&mut self) -> f32 {
        (MIN_SHAPE_SIZE + self.rng.random_range(0..SHAPE_SIZE_SPREAD)) as f32
    }

    fn spawn_rectangle(&mut self) {
        let height = self.random_size();
        let width = self.random_size();
        let id = self.next_entity_id();
        let entity = Entity::rectangle(id, width, height, &self.board, &mut self.rng);
        self.entities.push(entity);
    }

    fn spawn_circle(&mut self) {
        let radius = self.random_size();
        let id = self.next_entity_id();
        let entity = Entity::circle(id, radius, &self.board, &mut self.rng);
        self.entities.push(entity);
    }

    fn spawn_square(&mut self) {
        let side = self.random_size();
        let id = self.next_entity_id();
        let entity = Entity::square(id, side, &self.board, &mut self.rng);
        self.entities.push(entity);
    }

    /// Begin a fresh session: reset counters and spawn the fixed roster.
    ///
    /// Valid from any phase; a running session is discarded.
    pub fn start(&mut self) -> GameEvent {
        self.entities.clear();
        self.score = 0;
        self.frame = 0;
        self.next_id = 1;

        self.spawn_rectangle();
        self.spawn_circle();
        self.spawn_square();
        self.spawn_circle();
        self.spawn_rectangle();

        self.phase = GamePhase::Running;
        log::info!(
            "Session started (seed {}, {} entities)",
            self.seed,
            self.entities.len()
        );
        GameEvent::Started
    }

    /// Stop the session and clear the board. The score is kept for display.
    pub fn end_game(&mut self) {
        self.phase = GamePhase::GameOver;
        self.entities.clear();
        log::info!(
            "Game over after {} ticks with score {}",
            self.frame,
            self.score
        );
    }

    /// The pointer left the board; a loss while running
    pub fn pointer_left(&mut self) -> Option<GameEvent> {
        if self.phase != GamePhase::Running {
            return None;
        }
        self.end_game();
        Some(GameEvent::LeftBoard)
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// The fleeing square, if the roster is populated
    pub fn evader(&self) -> Option<&Entity> {
        self.entities.iter().find(|e| e.is_evader())
    }

    /// Relocate an entity to a random spot using its own margin
    pub(crate) fn relocate(&mut self, index: usize) {
        let board = self.board;
        if let Some(entity) = self.entities.get_mut(index) {
            entity.place_randomly(&board, None, &mut self.rng);
        }
    }
}
