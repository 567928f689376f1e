//! Browser timer built on `window.setInterval`

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use super::Timer;

/// Interval timer that invokes a bound callback
pub struct IntervalTimer {
    window: Window,
    callback: Option<Closure<dyn FnMut()>>,
    handle: Option<i32>,
}

impl IntervalTimer {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            callback: None,
            handle: None,
        }
    }

    /// Set the callback fired on every interval. Must happen before `start`.
    pub fn bind(&mut self, callback: Closure<dyn FnMut()>) {
        self.callback = Some(callback);
    }
}

impl Timer for IntervalTimer {
    fn start(&mut self, period_ms: u32) {
        self.cancel();
        let Some(callback) = self.callback.as_ref() else {
            log::warn!("Interval started before a callback was bound");
            return;
        };
        match self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                period_ms as i32,
            ) {
            Ok(handle) => self.handle = Some(handle),
            Err(e) => log::error!("setInterval failed: {:?}", e),
        }
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.window.clear_interval_with_handle(handle);
        }
    }

    fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}
