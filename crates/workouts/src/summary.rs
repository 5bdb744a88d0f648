use std::fmt;

use serde::{Deserialize, Serialize};

/// Derived metrics for one workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    /// Type of training, e.g. `Running`.
    pub activity: String,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl WorkoutSummary {
    /// Renders the one-line report, numbers fixed to three decimals.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Type of training: {}; Duration: {:.3} h; Distance: {:.3} km; \
             Average speed: {:.3} km/h; Kcal spent: {:.3}.",
            self.activity,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal
        )
    }
}
