//! Shape Chase entry point
//!
//! Handles platform-specific initialization and wires input to the game.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use shape_chase::platform::web::IntervalTimer;
    use shape_chase::renderer::canvas::CanvasSurface;
    use shape_chase::sim::GameState;
    use shape_chase::{Game, Settings};

    type WebGame = Game<CanvasSurface, IntervalTimer>;

    fn pointer_pos(event: &MouseEvent) -> Vec2 {
        Vec2::new(event.offset_x() as f32, event.offset_y() as f32)
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let settings = Settings::load();
        console_log::init_with_level(settings.log_level.to_level())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        // Write back so the key exists for hand-editing in devtools
        settings.save();

        log::info!("Shape Chase starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameBoard")
            .ok_or_else(|| JsValue::from_str("no #gameBoard canvas"))?
            .dyn_into()
            .map_err(JsValue::from)?;

        let seed = settings
            .seed
            .unwrap_or_else(|| js_sys::Date::now() as u64);
        log::info!("Game initialized with seed: {}", seed);

        let surface = CanvasSurface::new(&canvas)?;
        let timer = IntervalTimer::new(window);
        let game = Rc::new(RefCell::new(Game::new(
            GameState::new(seed),
            surface,
            timer,
            settings,
        )));

        // The interval only holds a weak handle so the game is not kept
        // alive by its own timer
        {
            let weak = Rc::downgrade(&game);
            let on_tick = Closure::<dyn FnMut()>::new(move || {
                if let Some(game) = weak.upgrade() {
                    if let Ok(mut g) = game.try_borrow_mut() {
                        g.on_tick();
                    }
                }
            });
            game.borrow_mut().timer_mut().bind(on_tick);
        }

        setup_input_handlers(&canvas, game)?;

        log::info!("Shape Chase ready");
        Ok(())
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<WebGame>>,
    ) -> Result<(), JsValue> {
        // Mouse move - track the cursor
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if let Ok(mut g) = game.try_borrow_mut() {
                    g.pointer_moved(pointer_pos(&event));
                }
            });
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Mouse out - leaving the board loses the run
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                if let Ok(mut g) = game.try_borrow_mut() {
                    g.pointer_left();
                }
            });
            canvas.add_event_listener_with_callback("mouseout", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Mouse down - start/restart button
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if let Ok(mut g) = game.try_borrow_mut() {
                    g.pressed(pointer_pos(&event));
                }
            });
            canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    let settings = shape_chase::Settings::load();
    env_logger::Builder::new()
        .filter_level(settings.log_level.to_level_filter())
        .parse_default_env()
        .init();
    log::info!("Shape Chase (native) starting...");
    log::info!("Native mode runs a headless demo - build for wasm32 to play in the browser");

    run_headless_demo(settings);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play one session with a cursor circling the board until it is caught
#[cfg(not(target_arch = "wasm32"))]
fn run_headless_demo(settings: shape_chase::Settings) {
    use glam::Vec2;
    use shape_chase::platform::{ManualTimer, Timer};
    use shape_chase::renderer::RecordingSurface;
    use shape_chase::sim::{GameEvent, GameState};
    use shape_chase::{Game, start_button};

    const TICK_LIMIT: u64 = 60_000;

    let seed = settings.seed.unwrap_or(0x5eed);
    let mut game = Game::new(
        GameState::new(seed),
        RecordingSurface::default(),
        ManualTimer::default(),
        settings,
    );

    let (origin, size) = start_button();
    game.pressed(origin + size / 2.0);

    let center = game.state().board.center();
    let mut escapes = 0u32;
    let mut ticks = 0u64;
    while game.timer().is_running() && ticks < TICK_LIMIT {
        let angle = ticks as f32 * 0.02;
        game.pointer_moved(center + Vec2::new(angle.cos(), angle.sin()) * 180.0);
        escapes += game
            .on_tick()
            .iter()
            .filter(|e| matches!(e, GameEvent::Escaped { .. }))
            .count() as u32;
        ticks += 1;
    }

    println!(
        "Demo (seed {}) ended after {} ticks: score {}, {} escapes, phase {:?}, {} frames drawn",
        seed,
        ticks,
        game.state().score,
        escapes,
        game.state().phase,
        game.surface().frames
    );
}
