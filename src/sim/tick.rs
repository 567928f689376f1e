//! Fixed-rate simulation tick
//!
//! Advances every entity once, resolves cursor contact and updates the score.

use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Whether `frame` earns a survival point
#[inline]
pub fn scores_on(frame: u64) -> bool {
    frame == 1 || frame % SCORE_INTERVAL == 0
}

/// Advance the session by one tick.
///
/// Entities move in roster order. Touching the fleeing square awards a bonus
/// and relocates it; touching any pursuer ends the session immediately, so
/// entities after it in the roster are left untouched this tick.
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != GamePhase::Running {
        return events;
    }

    state.frame += 1;
    if scores_on(state.frame) {
        state.score += 1;
        log::debug!("Survival point at tick {} (score {})", state.frame, state.score);
        events.push(GameEvent::ScoreTick { score: state.score });
    }

    let board = state.board;
    let cursor = state.cursor;

    for index in 0..state.entities.len() {
        let entity = &mut state.entities[index];
        entity.advance(&board, cursor);

        let Some(point) = cursor else {
            continue;
        };
        if !entity.contains(point) {
            continue;
        }

        let id = entity.id;
        if entity.is_evader() {
            state.score += ESCAPE_BONUS;
            state.relocate(index);
            log::debug!("Escape through entity {} (score {})", id, state.score);
            events.push(GameEvent::Escaped {
                id,
                score: state.score,
            });
        } else {
            log::debug!("Caught by entity {} at tick {}", id, state.frame);
            events.push(GameEvent::Caught { id });
            state.end_game();
            return events;
        }
    }

    events
}
