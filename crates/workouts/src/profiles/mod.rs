//! Activity profiles.
//!
//! A profile holds the fixed coefficients of one activity and turns a reading
//! into distance, mean speed and calories. Calories have no default: every
//! activity must supply its own formula.

mod running;
mod swimming;
mod walking;

pub use running::RunningProfile;
pub use swimming::SwimmingProfile;
pub use walking::WalkingProfile;

use crate::readings::Reading;

/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;

/// Step length in meters shared by running and walking.
pub const LEN_STEP_M: f64 = 0.65;

/// Formula set for one activity type.
///
/// Implementations provide:
/// - The display name printed in summaries
/// - The calorie formula
///
/// and may override step length or mean speed where the activity measures
/// them differently.
pub trait ActivityProfile: Send + Sync {
    /// Sensor values this activity needs.
    type Reading: Reading;

    /// Name printed as the type of training.
    fn name(&self) -> &'static str;

    /// Distance covered by one step or stroke, in meters.
    fn step_length_m(&self) -> f64 {
        LEN_STEP_M
    }

    /// Distance in kilometers from the step or stroke count.
    fn distance_km(&self, reading: &Self::Reading) -> f64 {
        reading.base().action_count() as f64 * self.step_length_m() / M_IN_KM
    }

    /// Mean speed in km/h.
    fn mean_speed_kmh(&self, reading: &Self::Reading) -> f64 {
        self.distance_km(reading) / reading.base().duration_hours()
    }

    /// Energy spent in kcal.
    fn calories_kcal(&self, reading: &Self::Reading) -> f64;
}
