//! Swimming profile.

use super::{ActivityProfile, M_IN_KM};
use crate::readings::{Reading, SwimmingReading};

/// Stroke length and calorie coefficients for swimming.
///
/// Distance still comes from the stroke count, but mean speed is measured
/// from pool geometry instead.
#[derive(Debug, Clone, PartialEq)]
pub struct SwimmingProfile {
    /// Meters per stroke.
    stroke_length_m: f64,
    /// Added to mean speed before scaling.
    calories_speed_shift: f64,
    /// Multiplier applied with weight.
    calories_multiplier: f64,
}

impl Default for SwimmingProfile {
    fn default() -> Self {
        Self {
            stroke_length_m: 1.38,
            calories_speed_shift: 1.1,
            calories_multiplier: 2.0,
        }
    }
}

impl SwimmingProfile {
    /// Creates a swimming profile with a custom stroke length.
    pub fn with_stroke_length(stroke_length_m: f64) -> Self {
        Self {
            stroke_length_m,
            ..Default::default()
        }
    }
}

impl ActivityProfile for SwimmingProfile {
    type Reading = SwimmingReading;

    fn name(&self) -> &'static str {
        "Swimming"
    }

    fn step_length_m(&self) -> f64 {
        self.stroke_length_m
    }

    fn mean_speed_kmh(&self, reading: &SwimmingReading) -> f64 {
        reading.pool_length_m() * reading.pool_lengths_count() as f64
            / M_IN_KM
            / reading.base().duration_hours()
    }

    fn calories_kcal(&self, reading: &SwimmingReading) -> f64 {
        (self.mean_speed_kmh(reading) + self.calories_speed_shift)
            * self.calories_multiplier
            * reading.base().weight_kg()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readings::BaseReading;

    fn reading(action_count: u64) -> SwimmingReading {
        let base = BaseReading::new(action_count, 1.0, 80.0).unwrap();
        SwimmingReading::new(base, 25.0, 40).unwrap()
    }

    #[test]
    fn test_distance_from_strokes() {
        let profile = SwimmingProfile::default();
        assert!((profile.distance_km(&reading(720)) - 0.9936).abs() < 1e-9);
    }

    #[test]
    fn test_mean_speed_ignores_strokes() {
        let profile = SwimmingProfile::default();
        let few = profile.mean_speed_kmh(&reading(10));
        let many = profile.mean_speed_kmh(&reading(10_000));
        assert!((few - 1.0).abs() < 1e-9);
        assert_eq!(few.to_bits(), many.to_bits());
    }

    #[test]
    fn test_calories() {
        let profile = SwimmingProfile::default();
        assert!((profile.calories_kcal(&reading(720)) - 336.0).abs() < 1e-9);
    }

    #[test]
    fn test_custom_stroke_length() {
        let profile = SwimmingProfile::with_stroke_length(2.0);
        assert!((profile.distance_km(&reading(500)) - 1.0).abs() < 1e-9);
    }
}
