use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkoutError {
    #[error("Unknown activity code: {0}")]
    UnknownActivity(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Division by zero: {0} must be non-zero")]
    DivisionByZero(&'static str),
}

impl WorkoutError {
    /// True for malformed readings, including zero divisors.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            WorkoutError::InvalidInput(_) | WorkoutError::DivisionByZero(_)
        )
    }
}

pub type Result<T, E = WorkoutError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_by_zero_is_invalid_input() {
        assert!(WorkoutError::DivisionByZero("duration_hours").is_invalid_input());
        assert!(WorkoutError::InvalidInput("x".into()).is_invalid_input());
        assert!(!WorkoutError::UnknownActivity("XYZ".into()).is_invalid_input());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            WorkoutError::UnknownActivity("XYZ".into()).to_string(),
            "Unknown activity code: XYZ"
        );
        assert_eq!(
            WorkoutError::DivisionByZero("height_cm").to_string(),
            "Division by zero: height_cm must be non-zero"
        );
    }
}
