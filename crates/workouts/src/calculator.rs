//! Metric calculator: a profile paired with the reading it evaluates.

use tracing::trace;

use crate::errors::Result;
use crate::profiles::{ActivityProfile, RunningProfile, SwimmingProfile, WalkingProfile};
use crate::readings::{BaseReading, Reading, SwimmingReading, WalkingReading};
use crate::summary::WorkoutSummary;

pub type Running = Calculator<RunningProfile>;
pub type Walking = Calculator<WalkingProfile>;
pub type Swimming = Calculator<SwimmingProfile>;

/// Computes metrics on demand. Nothing is cached; every call re-evaluates
/// the profile formulas.
#[derive(Debug, Clone)]
pub struct Calculator<P: ActivityProfile> {
    profile: P,
    reading: P::Reading,
}

impl<P: ActivityProfile> Calculator<P> {
    pub fn with_profile(profile: P, reading: P::Reading) -> Self {
        Self { profile, reading }
    }

    pub fn reading(&self) -> &P::Reading {
        &self.reading
    }

    pub fn name(&self) -> &'static str {
        self.profile.name()
    }

    /// Distance in km.
    pub fn distance(&self) -> f64 {
        self.profile.distance_km(&self.reading)
    }

    /// Mean speed in km/h.
    pub fn mean_speed(&self) -> f64 {
        self.profile.mean_speed_kmh(&self.reading)
    }

    /// Energy spent in kcal.
    pub fn calories(&self) -> f64 {
        self.profile.calories_kcal(&self.reading)
    }

    pub fn summary(&self) -> WorkoutSummary {
        let distance_km = self.distance();
        let mean_speed_kmh = self.mean_speed();
        let calories_kcal = self.calories();

        let summary = WorkoutSummary {
            activity: self.name().to_string(),
            duration_hours: self.reading.base().duration_hours(),
            distance_km,
            mean_speed_kmh,
            calories_kcal,
        };
        trace!(?summary, "computed workout summary");
        summary
    }
}

impl Running {
    pub fn new(action_count: u64, duration_hours: f64, weight_kg: f64) -> Result<Self> {
        let reading = BaseReading::new(action_count, duration_hours, weight_kg)?;
        Ok(Self::with_profile(RunningProfile::default(), reading))
    }
}

impl Walking {
    pub fn new(
        action_count: u64,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self> {
        let base = BaseReading::new(action_count, duration_hours, weight_kg)?;
        let reading = WalkingReading::new(base, height_cm)?;
        Ok(Self::with_profile(WalkingProfile::default(), reading))
    }
}

impl Swimming {
    pub fn new(
        action_count: u64,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_lengths_count: u64,
    ) -> Result<Self> {
        let base = BaseReading::new(action_count, duration_hours, weight_kg)?;
        let reading = SwimmingReading::new(base, pool_length_m, pool_lengths_count)?;
        Ok(Self::with_profile(SwimmingProfile::default(), reading))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::WorkoutError;

    #[test]
    fn test_running_summary() {
        let summary = Running::new(15000, 1.0, 75.0).unwrap().summary();
        assert_eq!(summary.activity, "Running");
        assert!((summary.distance_km - 9.75).abs() < 1e-9);
        assert!((summary.mean_speed_kmh - 9.75).abs() < 1e-9);
        assert!((summary.calories_kcal - 699.75).abs() < 1e-9);
    }

    #[test]
    fn test_summary_is_idempotent() {
        let calculator = Walking::new(9000, 1.0, 75.0, 180.0).unwrap();
        let first = calculator.summary();
        let second = calculator.summary();
        assert_eq!(first.distance_km.to_bits(), second.distance_km.to_bits());
        assert_eq!(first.mean_speed_kmh.to_bits(), second.mean_speed_kmh.to_bits());
        assert_eq!(first.calories_kcal.to_bits(), second.calories_kcal.to_bits());
        assert_eq!(first, second);
    }

    #[test]
    fn test_swimming_uses_pool_geometry_for_speed() {
        let calculator = Swimming::new(720, 1.0, 80.0, 25.0, 40).unwrap();
        assert!((calculator.distance() - 0.9936).abs() < 1e-9);
        assert!((calculator.mean_speed() - 1.0).abs() < 1e-9);
        assert!((calculator.calories() - 336.0).abs() < 1e-9);
    }

    #[test]
    fn test_constructor_rejects_zero_duration() {
        assert_eq!(
            Running::new(15000, 0.0, 75.0).unwrap_err(),
            WorkoutError::DivisionByZero("duration_hours")
        );
    }

    #[test]
    fn test_custom_profile() {
        let reading = BaseReading::new(10000, 1.0, 50.0).unwrap();
        let profile = RunningProfile::with_coefficients(20.0, 0.0);
        let calculator = Calculator::with_profile(profile, reading);
        assert!((calculator.calories() - 390.0).abs() < 1e-9);
        assert_eq!(calculator.reading(), &reading);
    }
}
