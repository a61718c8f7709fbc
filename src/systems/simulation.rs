//! Physics stepping system
//!
//! Feeds frame deltas into a physics world:
//! - Delta time capping
//! - Physics stepping
//! - Halting after the first engine error

use tumble_physics::{PhysicsError, PhysicsWorld};

/// Default cap on the delta handed to the world in one frame, in seconds
pub const DEFAULT_MAX_FRAME_DT: f32 = 0.25;

/// Result of a simulation update
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationResult {
    /// Delta actually handed to the world, after capping
    pub dt: f32,
    /// Physics ticks stepped during this update
    pub ticks: u64,
    /// Whether the world was stepped at all
    pub stepped: bool,
}

/// Drives a physics world one frame at a time
///
/// An engine error leaves the world in a partially stepped state, so the
/// system stops stepping after the first one and keeps the error around for
/// the host to report.
pub struct SimulationSystem {
    max_frame_dt: f32,
    error: Option<PhysicsError>,
}

impl SimulationSystem {
    /// Create a new simulation system
    pub fn new() -> Self {
        Self::with_max_frame_dt(DEFAULT_MAX_FRAME_DT)
    }

    /// Create a system that caps each frame delta at `max_frame_dt`
    pub fn with_max_frame_dt(max_frame_dt: f32) -> Self {
        Self {
            max_frame_dt,
            error: None,
        }
    }

    /// The error that halted the system, if any
    pub fn error(&self) -> Option<&PhysicsError> {
        self.error.as_ref()
    }

    pub fn is_halted(&self) -> bool {
        self.error.is_some()
    }

    /// Run one simulation frame
    ///
    /// # Returns
    /// SimulationResult with the capped delta and ticks stepped, or the engine
    /// error that halted the system
    pub fn update(
        &mut self,
        world: &mut PhysicsWorld,
        raw_dt: f32,
    ) -> Result<SimulationResult, PhysicsError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }

        // Cap dt so one long stall doesn't turn into a burst of ticks
        let dt = raw_dt.min(self.max_frame_dt);
        let start_tick = world.tick();

        if let Err(err) = world.integrate(dt) {
            log::error!("Physics halted at tick {}: {}", world.tick(), err);
            self.error = Some(err.clone());
            return Err(err);
        }

        let ticks = world.tick() - start_tick;
        Ok(SimulationResult {
            dt,
            ticks,
            stepped: ticks > 0,
        })
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new()
    }
}
