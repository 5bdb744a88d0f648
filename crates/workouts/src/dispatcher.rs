//! Workout dispatcher: maps an activity code and positional sensor values to
//! the matching calculator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculator::{Running, Swimming, Walking};
use crate::errors::{Result, WorkoutError};
use crate::summary::WorkoutSummary;

/// Short code selecting the workout type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityCode {
    Run,
    Walk,
    Swim,
}

impl ActivityCode {
    pub const ALL: [ActivityCode; 3] = [ActivityCode::Run, ActivityCode::Walk, ActivityCode::Swim];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityCode::Run => "RUN",
            ActivityCode::Walk => "WLK",
            ActivityCode::Swim => "SWM",
        }
    }

    /// Number of positional values the calculator for this code takes.
    pub fn arity(&self) -> usize {
        match self {
            ActivityCode::Run => 3,
            ActivityCode::Walk => 4,
            ActivityCode::Swim => 5,
        }
    }
}

impl fmt::Display for ActivityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityCode {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self> {
        ActivityCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| WorkoutError::UnknownActivity(s.to_string()))
    }
}

/// A resolved calculator for one of the supported activities.
#[derive(Debug, Clone)]
pub enum Workout {
    Running(Running),
    Walking(Walking),
    Swimming(Swimming),
}

impl Workout {
    pub fn code(&self) -> ActivityCode {
        match self {
            Workout::Running(_) => ActivityCode::Run,
            Workout::Walking(_) => ActivityCode::Walk,
            Workout::Swimming(_) => ActivityCode::Swim,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Workout::Running(c) => c.name(),
            Workout::Walking(c) => c.name(),
            Workout::Swimming(c) => c.name(),
        }
    }

    pub fn distance(&self) -> f64 {
        match self {
            Workout::Running(c) => c.distance(),
            Workout::Walking(c) => c.distance(),
            Workout::Swimming(c) => c.distance(),
        }
    }

    pub fn mean_speed(&self) -> f64 {
        match self {
            Workout::Running(c) => c.mean_speed(),
            Workout::Walking(c) => c.mean_speed(),
            Workout::Swimming(c) => c.mean_speed(),
        }
    }

    pub fn calories(&self) -> f64 {
        match self {
            Workout::Running(c) => c.calories(),
            Workout::Walking(c) => c.calories(),
            Workout::Swimming(c) => c.calories(),
        }
    }

    pub fn summary(&self) -> WorkoutSummary {
        match self {
            Workout::Running(c) => c.summary(),
            Workout::Walking(c) => c.summary(),
            Workout::Swimming(c) => c.summary(),
        }
    }
}

/// One input pair: an activity code and its positional sensor values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPackage {
    pub code: String,
    pub values: Vec<f64>,
}

impl WorkoutPackage {
    pub fn new(code: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            values: values.into(),
        }
    }
}

/// Resolves a calculator from an input package.
pub fn read_package(package: &WorkoutPackage) -> Result<Workout> {
    resolve(&package.code, &package.values)
}

/// Selects the calculator for `code` and binds `values` positionally:
/// action count, duration (h), weight (kg), then height (cm) for walking or
/// pool length (m) and pool lengths swum for swimming.
pub fn resolve(code: &str, values: &[f64]) -> Result<Workout> {
    let activity: ActivityCode = code.parse()?;
    debug!(code = %activity, arity = values.len(), "resolving workout");

    let workout = match (activity, values) {
        (ActivityCode::Run, &[action, duration, weight]) => {
            Workout::Running(Running::new(count("action_count", action)?, duration, weight)?)
        }
        (ActivityCode::Walk, &[action, duration, weight, height]) => Workout::Walking(
            Walking::new(count("action_count", action)?, duration, weight, height)?,
        ),
        (ActivityCode::Swim, &[action, duration, weight, pool_length, pool_count]) => {
            Workout::Swimming(Swimming::new(
                count("action_count", action)?,
                duration,
                weight,
                pool_length,
                count("pool_lengths_count", pool_count)?,
            )?)
        }
        _ => {
            return Err(WorkoutError::InvalidInput(format!(
                "{activity} expects {} values, got {}",
                activity.arity(),
                values.len()
            )));
        }
    };

    Ok(workout)
}

/// Converts a positional value into a whole, non-negative count.
fn count(field: &'static str, value: f64) -> Result<u64> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value >= u64::MAX as f64 {
        return Err(WorkoutError::InvalidInput(format!(
            "{field} must be a non-negative whole number, got {value}"
        )));
    }
    Ok(value as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes() {
        assert_eq!("RUN".parse::<ActivityCode>().unwrap(), ActivityCode::Run);
        assert_eq!("WLK".parse::<ActivityCode>().unwrap(), ActivityCode::Walk);
        assert_eq!("SWM".parse::<ActivityCode>().unwrap(), ActivityCode::Swim);
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        assert_eq!(
            "run".parse::<ActivityCode>().unwrap_err(),
            WorkoutError::UnknownActivity("run".into())
        );
    }

    #[test]
    fn test_display_round_trips() {
        for code in ActivityCode::ALL {
            assert_eq!(code.to_string().parse::<ActivityCode>().unwrap(), code);
        }
    }

    #[test]
    fn test_resolve_selects_variant() {
        let workout = resolve("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert!(matches!(workout, Workout::Walking(_)));
        assert_eq!(workout.code(), ActivityCode::Walk);
        assert_eq!(workout.name(), "SportsWalking");
    }

    #[test]
    fn test_unknown_code() {
        let err = resolve("XYZ", &[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err, WorkoutError::UnknownActivity("XYZ".into()));
    }

    #[test]
    fn test_wrong_arity() {
        let err = resolve("RUN", &[15000.0, 1.0]).unwrap_err();
        assert!(matches!(err, WorkoutError::InvalidInput(_)));

        let err = resolve("SWM", &[720.0, 1.0, 80.0, 25.0]).unwrap_err();
        assert!(matches!(err, WorkoutError::InvalidInput(_)));
    }

    #[test]
    fn test_every_code_rejects_other_arities() {
        let values = [1.0; 6];
        for code in ActivityCode::ALL {
            for len in (0..=values.len()).filter(|len| *len != code.arity()) {
                let err = resolve(code.as_str(), &values[..len]).unwrap_err();
                assert_eq!(
                    err,
                    WorkoutError::InvalidInput(format!(
                        "{code} expects {} values, got {len}",
                        code.arity()
                    ))
                );
            }
        }
    }

    #[test]
    fn test_fractional_count_rejected() {
        let err = resolve("RUN", &[150.5, 1.0, 75.0]).unwrap_err();
        assert!(matches!(err, WorkoutError::InvalidInput(_)));

        let err = resolve("SWM", &[720.0, 1.0, 80.0, 25.0, -1.0]).unwrap_err();
        assert!(matches!(err, WorkoutError::InvalidInput(_)));
    }

    #[test]
    fn test_zero_duration_surfaces_from_resolve() {
        let err = resolve("RUN", &[15000.0, 0.0, 75.0]).unwrap_err();
        assert_eq!(err, WorkoutError::DivisionByZero("duration_hours"));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_read_package() {
        let package = WorkoutPackage::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]);
        let workout = read_package(&package).unwrap();
        assert!((workout.mean_speed() - 1.0).abs() < 1e-9);
        assert!((workout.calories() - 336.0).abs() < 1e-9);
        assert!((workout.distance() - 0.9936).abs() < 1e-9);
    }
}
