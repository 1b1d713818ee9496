use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Meters represented by one distance unit in the adjacency matrix.
pub const DEFAULT_METERS_PER_UNIT: f64 = 1000.0;

/// Walking pace used to turn meters into minutes.
pub const DEFAULT_METERS_PER_MINUTE: f64 = 70.0;

/// Conversion from raw graph distances to meters and walking minutes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TravelConfig {
    pub meters_per_unit: f64,
    pub meters_per_minute: f64,
}

impl TravelConfig {
    /// Build a config, rejecting factors that are not finite and positive.
    pub fn new(meters_per_unit: f64, meters_per_minute: f64) -> Result<Self> {
        for (name, value) in [
            ("meters_per_unit", meters_per_unit),
            ("meters_per_minute", meters_per_minute),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        Ok(Self {
            meters_per_unit,
            meters_per_minute,
        })
    }

    pub fn meters(&self, distance: f64) -> f64 {
        distance * self.meters_per_unit
    }

    pub fn minutes(&self, distance: f64) -> f64 {
        self.meters(distance) / self.meters_per_minute
    }
}

impl Default for TravelConfig {
    fn default() -> Self {
        Self {
            meters_per_unit: DEFAULT_METERS_PER_UNIT,
            meters_per_minute: DEFAULT_METERS_PER_MINUTE,
        }
    }
}
