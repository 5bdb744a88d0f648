//! Running profile.

use super::{ActivityProfile, M_IN_KM, MIN_IN_H};
use crate::readings::{BaseReading, Reading};

/// Calorie coefficients for running.
///
/// Energy grows linearly with mean speed:
/// `(multiplier * speed - shift) * weight / 1000 * minutes`.
#[derive(Debug, Clone, PartialEq)]
pub struct RunningProfile {
    /// Multiplier applied to mean speed in km/h.
    calories_multiplier: f64,
    /// Subtracted after the multiplier.
    calories_shift: f64,
}

impl Default for RunningProfile {
    fn default() -> Self {
        Self {
            calories_multiplier: 18.0,
            calories_shift: 20.0,
        }
    }
}

impl RunningProfile {
    /// Creates a running profile with custom calorie coefficients.
    pub fn with_coefficients(calories_multiplier: f64, calories_shift: f64) -> Self {
        Self {
            calories_multiplier,
            calories_shift,
        }
    }
}

impl ActivityProfile for RunningProfile {
    type Reading = BaseReading;

    fn name(&self) -> &'static str {
        "Running"
    }

    fn calories_kcal(&self, reading: &BaseReading) -> f64 {
        let base = reading.base();
        (self.calories_multiplier * self.mean_speed_kmh(reading) - self.calories_shift)
            * base.weight_kg()
            / M_IN_KM
            * (base.duration_hours() * MIN_IN_H)
    }
}
