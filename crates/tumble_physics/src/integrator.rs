//! Fixed-step time integration
//!
//! Integrating a whole frame delta in one step makes the simulation depend on
//! the frame rate: one long frame moves bodies a long way at once and lets
//! them tunnel. Instead every frame is cut into fixed ticks plus a final
//! partial tick, which is what [`IntegrationIterator`] yields.

use crate::error::PhysicsError;

/// Iterator over the sub-step sizes for one frame delta
///
/// Yields `1 / ticks_per_second` once per whole tick that fits in `dt`, then
/// a single partial step with the remainder. The whole tick count is fixed up
/// front, so the iterator always ends no matter how many ticks `dt` spans.
/// Build a fresh iterator for every frame.
#[derive(Clone, Debug)]
pub struct IntegrationIterator {
    tick_step: f32,
    /// Whole ticks still to yield
    ticks_left: u64,
    /// Partial step yielded after the whole ticks, if any
    remainder: Option<f32>,
}

impl IntegrationIterator {
    pub fn new(ticks_per_second: f32, dt: f32) -> Result<Self, PhysicsError> {
        if !(ticks_per_second > 0.0 && ticks_per_second.is_finite()) {
            return Err(PhysicsError::InvalidTickRate(ticks_per_second));
        }
        if !dt.is_finite() {
            return Err(PhysicsError::InvalidDeltaTime(dt));
        }
        let tick_step = 1.0 / ticks_per_second;
        if dt <= 0.0 {
            return Ok(Self {
                tick_step,
                ticks_left: 0,
                remainder: None,
            });
        }

        // Counted in f64 so the leftover is measured against the step that
        // is actually yielded
        let step = f64::from(tick_step);
        let dt = f64::from(dt);
        let whole = (dt / step).floor();
        let left = (dt - whole * step) as f32;
        Ok(Self {
            tick_step,
            ticks_left: whole as u64,
            remainder: (left > 0.0).then_some(left),
        })
    }

    /// Size of a whole tick in seconds
    pub fn tick_step(&self) -> f32 {
        self.tick_step
    }
}

impl Iterator for IntegrationIterator {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.ticks_left > 0 {
            self.ticks_left -= 1;
            return Some(self.tick_step);
        }
        self.remainder.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = usize::try_from(self.ticks_left)
            .unwrap_or(usize::MAX)
            .saturating_add(usize::from(self.remainder.is_some()));
        (left, Some(left))
    }
}
