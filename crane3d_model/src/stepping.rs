//! Fixed-step time accumulator.
//!
//! Decouples integration stability from the caller's frame rate: frame time
//! is banked and paid out in whole ticks of a fixed size. The sub-tick
//! remainder stays in the bank for the next call, so no simulated time is
//! lost or counted twice.

use tracing::{debug, warn};

/// Residual time budget plus a diagnostic tick counter.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FixedStepClock {
    /// Banked time not yet consumed by a tick [s].
    residual: f64,
    /// Total ticks paid out since construction.
    ticks: u64,
}

impl FixedStepClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bank `delta_time` and return how many ticks of `fixed_time` are due.
    ///
    /// The due ticks are subtracted from the budget and added to the tick
    /// counter. There is no cap: a huge `delta_time` yields a huge count.
    ///
    /// Degenerate input is neutralised rather than trapped:
    /// - a non-finite `delta_time` is not banked
    /// - a non-positive or NaN `fixed_time` pays out nothing (the delta stays
    ///   banked)
    pub fn advance(&mut self, fixed_time: f64, delta_time: f64) -> u64 {
        if !delta_time.is_finite() {
            warn!("Ignoring non-finite delta time {}", delta_time);
        } else {
            self.residual += delta_time;
        }

        if !(fixed_time > 0.0) {
            warn!("Non-positive fixed time step {}, no tick performed", fixed_time);
            return 0;
        }

        if !(self.residual >= fixed_time) {
            return 0;
        }

        let due = (self.residual / fixed_time).floor();
        self.residual = (self.residual - due * fixed_time).max(0.0);

        let due = due as u64;
        self.ticks = self.ticks.saturating_add(due);

        if due > 1 {
            debug!(
                "Fixed step: {} ticks of {}s due, {:.6}s banked",
                due, fixed_time, self.residual
            );
        }
        due
    }

    /// Banked time not yet consumed [s].
    #[inline]
    pub fn residual(&self) -> f64 {
        self.residual
    }

    /// Total ticks paid out.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
