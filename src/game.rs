//! Game controller
//!
//! Owns the session, the drawing surface and the tick timer. Platform code
//! forwards pointer events and timer firings here; the controller keeps the
//! timer in step with the session phase and repaints after every change.

use glam::Vec2;

use crate::consts::TICK_INTERVAL_MS;
use crate::platform::Timer;
use crate::renderer::{Surface, render_frame, render_game_over, render_idle};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, tick};
use crate::start_button;

const GAME_OVER_MESSAGE: &str = "Game Over 😪 Try Again!";
const LEFT_BOARD_MESSAGE: &str = "No moving outside the game board!";

/// Game instance holding all state
pub struct Game<S: Surface, T: Timer> {
    state: GameState,
    surface: S,
    timer: T,
    settings: Settings,
}

impl<S: Surface, T: Timer> Game<S, T> {
    /// Wrap an idle session and paint the start screen
    pub fn new(state: GameState, mut surface: S, timer: T, settings: Settings) -> Self {
        render_idle(&mut surface);
        Self {
            state,
            surface,
            timer,
            settings,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    /// Pointer moved to `pos` (board coordinates)
    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.state.cursor = Some(pos);
    }

    /// Pointer left the board
    pub fn pointer_left(&mut self) {
        if self.state.pointer_left().is_some() {
            self.notify(LEFT_BOARD_MESSAGE);
            self.finish();
        }
    }

    /// Pointer pressed at `pos`; starts a session when it hits the button
    pub fn pressed(&mut self, pos: Vec2) {
        self.state.cursor = Some(pos);
        if self.state.phase == GamePhase::Running {
            return;
        }
        let (origin, size) = start_button();
        if !crate::rect_contains(origin, size, pos) {
            return;
        }

        self.state.start();
        self.timer.start(TICK_INTERVAL_MS);
        render_frame(&mut self.surface, &self.state, self.settings.show_score);
    }

    /// Timer fired: advance one tick and repaint
    pub fn on_tick(&mut self) -> Vec<GameEvent> {
        let events = tick(&mut self.state);
        if events.iter().any(GameEvent::is_loss) {
            self.finish();
        } else if self.state.is_running() {
            render_frame(&mut self.surface, &self.state, self.settings.show_score);
        }
        events
    }

    /// Stop ticking and show the final score
    fn finish(&mut self) {
        self.timer.cancel();
        render_game_over(&mut self.surface, &self.state);
        self.notify(GAME_OVER_MESSAGE);
    }

    fn notify(&mut self, message: &str) {
        if self.settings.loss_alerts {
            self.surface.notify(message);
        } else {
            log::info!("{}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ManualTimer;
    use crate::renderer::RecordingSurface;

    type TestGame = Game<RecordingSurface, ManualTimer>;

    fn new_game(seed: u64) -> TestGame {
        Game::new(
            GameState::new(seed),
            RecordingSurface::default(),
            ManualTimer::default(),
            Settings::default(),
        )
    }

    fn press_start(game: &mut TestGame) {
        let (origin, size) = start_button();
        game.pressed(origin + size / 2.0);
    }

    /// Press start, then forget the cursor so ticks run without contact
    fn start_quiet(game: &mut TestGame) {
        press_start(game);
        game.state.cursor = None;
    }

    #[test]
    fn test_idle_screen_and_no_timer() {
        let game = new_game(1);
        assert_eq!(game.state().phase, GamePhase::Idle);
        assert!(!game.timer().is_running());
        assert_eq!(game.surface().texts(), vec!["Start Game"]);
    }

    #[test]
    fn test_press_outside_button_does_nothing() {
        let mut game = new_game(1);
        game.pressed(Vec2::new(10.0, 10.0));
        assert_eq!(game.state().phase, GamePhase::Idle);
        assert!(!game.timer().is_running());
    }

    #[test]
    fn test_press_on_button_starts_timer() {
        let mut game = new_game(1);
        press_start(&mut game);
        assert_eq!(game.state().phase, GamePhase::Running);
        assert_eq!(game.timer().period_ms, Some(TICK_INTERVAL_MS));
        assert_eq!(game.state().entities.len(), 5);
    }

    #[test]
    fn test_press_while_running_is_ignored() {
        let mut game = new_game(1);
        start_quiet(&mut game);
        game.on_tick();
        let score = game.state().score;

        press_start(&mut game);

        assert_eq!(game.timer().starts, 1);
        assert_eq!(game.state().frame, 1);
        assert_eq!(game.state().score, score);
        assert_eq!(game.state().entities.len(), 5);
    }

    #[test]
    fn test_quiet_ticks_repaint_with_score() {
        let mut game = new_game(12345);
        start_quiet(&mut game);
        for _ in 0..99 {
            game.on_tick();
        }
        assert_eq!(game.state().score, 1);
        assert_eq!(game.state().entities.len(), 5);
        assert!(game.timer().is_running());
        assert_eq!(game.surface().texts(), vec!["Score: 1"]);
    }

    #[test]
    fn test_pursuer_contact_cancels_timer() {
        let mut game = new_game(12345);
        start_quiet(&mut game);
        for _ in 0..4 {
            game.on_tick();
        }

        let first = game.state().entities[0].clone();
        game.pointer_moved(first.pos + first.shape.margin() / 2.0);
        let events = game.on_tick();

        assert!(events.contains(&GameEvent::Caught { id: first.id }));
        assert_eq!(game.state().phase, GamePhase::GameOver);
        assert!(game.state().entities.is_empty());
        assert!(!game.timer().is_running());
        assert_eq!(game.timer().cancels, 1);
        assert_eq!(game.surface().notifications, vec![GAME_OVER_MESSAGE]);
        assert_eq!(
            game.surface().texts(),
            vec![format!("Your Score: {}", game.state().score).as_str(), "Start Game"]
        );
    }

    #[test]
    fn test_leaving_board_ends_run() {
        let mut game = new_game(3);
        start_quiet(&mut game);
        game.on_tick();
        game.pointer_left();

        assert_eq!(game.state().phase, GamePhase::GameOver);
        assert!(!game.timer().is_running());
        assert_eq!(
            game.surface().notifications,
            vec![LEFT_BOARD_MESSAGE, GAME_OVER_MESSAGE]
        );
    }

    #[test]
    fn test_leaving_board_when_idle_is_harmless() {
        let mut game = new_game(3);
        game.pointer_left();
        assert_eq!(game.state().phase, GamePhase::Idle);
        assert!(game.surface().notifications.is_empty());
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut game = new_game(3);
        start_quiet(&mut game);
        for _ in 0..150 {
            game.on_tick();
        }
        game.pointer_left();
        assert_eq!(game.state().score, 2);

        press_start(&mut game);
        assert_eq!(game.state().phase, GamePhase::Running);
        assert_eq!(game.state().score, 0);
        assert_eq!(game.state().frame, 0);
        assert_eq!(game.state().entities.len(), 5);
        assert_eq!(game.timer().starts, 2);
        assert!(game.timer().is_running());
    }

    #[test]
    fn test_alerts_can_be_silenced() {
        let settings = Settings {
            loss_alerts: false,
            ..Settings::default()
        };
        let mut game = Game::new(
            GameState::new(3),
            RecordingSurface::default(),
            ManualTimer::default(),
            settings,
        );
        press_start(&mut game);
        game.state.cursor = None;
        game.pointer_left();
        assert!(game.surface().notifications.is_empty());
        assert_eq!(game.state().phase, GamePhase::GameOver);
    }

    #[test]
    fn test_ticks_after_game_over_are_inert() {
        let mut game = new_game(3);
        start_quiet(&mut game);
        game.pointer_left();
        let frames = game.surface().frames;
        assert!(game.on_tick().is_empty());
        assert_eq!(game.surface().frames, frames);
    }
}
