//! Sports walking profile.

use super::{ActivityProfile, MIN_IN_H};
use crate::readings::{Reading, WalkingReading};

/// Calorie coefficients for sports walking.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkingProfile {
    /// kcal per kg per minute independent of speed.
    weight_multiplier: f64,
    /// Applied to the floored speed²/height term.
    speed_height_multiplier: f64,
}

impl Default for WalkingProfile {
    fn default() -> Self {
        Self {
            weight_multiplier: 0.035,
            speed_height_multiplier: 0.029,
        }
    }
}

impl WalkingProfile {
    /// Creates a walking profile with custom calorie coefficients.
    pub fn with_coefficients(weight_multiplier: f64, speed_height_multiplier: f64) -> Self {
        Self {
            weight_multiplier,
            speed_height_multiplier,
        }
    }
}

impl ActivityProfile for WalkingProfile {
    type Reading = WalkingReading;

    fn name(&self) -> &'static str {
        "SportsWalking"
    }

    fn calories_kcal(&self, reading: &WalkingReading) -> f64 {
        let base = reading.base();
        let speed = self.mean_speed_kmh(reading);
        // Speed is km/h and height is cm, so for realistic inputs the floored
        // quotient is 0. Existing summaries depend on this; do not rescale.
        let speed_height = floor_div(speed.powi(2), reading.height_cm());
        (self.weight_multiplier * base.weight_kg()
            + speed_height * self.speed_height_multiplier * base.weight_kg())
            * base.duration_hours()
            * MIN_IN_H
    }
}

/// Floor of the exact quotient `a / b`.
///
/// Flooring the rounded quotient is off by one whenever `a / b` rounds up to
/// a whole number: the f64 nearest 0.1 is slightly above 0.1, so `1.0` holds
/// only 9 whole copies of it even though `1.0 / 0.1 == 10.0`. The quotient is
/// taken from `a - a % b` instead, which is an exact multiple of `b`.
fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}
