//! Exponential epsilon decay with a floor

use serde::Serialize;

/// Exploration rate that decays multiplicatively and never drops below its floor
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EpsilonSchedule {
    current: f64,
    end: f64,
    decay: f64,
}

impl EpsilonSchedule {
    pub fn new(start: f64, end: f64, decay: f64) -> Self {
        Self {
            current: start,
            end,
            decay,
        }
    }

    /// Current exploration rate
    pub fn value(&self) -> f64 {
        self.current
    }

    pub fn floor(&self) -> f64 {
        self.end
    }

    pub fn is_at_floor(&self) -> bool {
        self.current <= self.end
    }

    /// Advance one step and return the new value.
    ///
    /// Above the floor the rate is multiplied by the decay factor, clamped to
    /// the floor; at or below it the rate is pinned to the floor.
    pub fn step(&mut self) -> f64 {
        self.current = if self.current > self.end {
            (self.current * self.decay).max(self.end)
        } else {
            self.end
        };
        self.current
    }
}
