//! Platform abstraction layer
//!
//! The game loop is driven by a periodic timer. In the browser that is
//! `setInterval`; headless runs and tests step it by hand.

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Periodic tick source
pub trait Timer {
    /// Begin firing every `period_ms`, replacing any running schedule
    fn start(&mut self, period_ms: u32);
    /// Stop firing. No-op when idle.
    fn cancel(&mut self);
    fn is_running(&self) -> bool;
}

/// Timer whose ticks are delivered by the caller
#[derive(Debug, Default)]
pub struct ManualTimer {
    /// Period of the active schedule
    pub period_ms: Option<u32>,
    pub starts: u32,
    pub cancels: u32,
}

impl Timer for ManualTimer {
    fn start(&mut self, period_ms: u32) {
        self.period_ms = Some(period_ms);
        self.starts += 1;
    }

    fn cancel(&mut self) {
        if self.period_ms.take().is_some() {
            self.cancels += 1;
        }
    }

    fn is_running(&self) -> bool {
        self.period_ms.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_timer_lifecycle() {
        let mut timer = ManualTimer::default();
        assert!(!timer.is_running());
        timer.cancel();
        assert_eq!(timer.cancels, 0);

        timer.start(10);
        assert!(timer.is_running());
        assert_eq!(timer.period_ms, Some(10));

        timer.cancel();
        assert!(!timer.is_running());
        assert_eq!((timer.starts, timer.cancels), (1, 1));
    }
}
