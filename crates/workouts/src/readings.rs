//! Raw sensor readings, validated on construction.
//!
//! A reading can only be built through its constructor, so every value that
//! reaches a formula is finite and every divisor is non-zero.

use crate::errors::{Result, WorkoutError};

/// Access to the fields every activity records.
pub trait Reading {
    fn base(&self) -> &BaseReading;
}

/// Steps or strokes, duration and athlete weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseReading {
    action_count: u64,
    duration_hours: f64,
    weight_kg: f64,
}

impl BaseReading {
    pub fn new(action_count: u64, duration_hours: f64, weight_kg: f64) -> Result<Self> {
        Ok(Self {
            action_count,
            duration_hours: divisor("duration_hours", duration_hours)?,
            weight_kg: positive("weight_kg", weight_kg)?,
        })
    }

    /// Steps for running and walking, strokes for swimming.
    pub fn action_count(&self) -> u64 {
        self.action_count
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

impl Reading for BaseReading {
    fn base(&self) -> &BaseReading {
        self
    }
}

/// Sports walking adds the athlete's height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkingReading {
    base: BaseReading,
    height_cm: f64,
}

impl WalkingReading {
    pub fn new(base: BaseReading, height_cm: f64) -> Result<Self> {
        Ok(Self {
            base,
            height_cm: divisor("height_cm", height_cm)?,
        })
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl Reading for WalkingReading {
    fn base(&self) -> &BaseReading {
        &self.base
    }
}

/// Swimming adds pool geometry: length of one pool and lengths swum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwimmingReading {
    base: BaseReading,
    pool_length_m: f64,
    pool_lengths_count: u64,
}

impl SwimmingReading {
    pub fn new(base: BaseReading, pool_length_m: f64, pool_lengths_count: u64) -> Result<Self> {
        Ok(Self {
            base,
            pool_length_m: positive("pool_length_m", pool_length_m)?,
            pool_lengths_count,
        })
    }

    pub fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    pub fn pool_lengths_count(&self) -> u64 {
        self.pool_lengths_count
    }
}

impl Reading for SwimmingReading {
    fn base(&self) -> &BaseReading {
        &self.base
    }
}

fn positive(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(WorkoutError::InvalidInput(format!(
            "{field} must be finite, got {value}"
        )));
    }
    if value <= 0.0 {
        return Err(WorkoutError::InvalidInput(format!(
            "{field} must be positive, got {value}"
        )));
    }
    Ok(value)
}

/// Like [`positive`], but zero is reported as a division by zero.
fn divisor(field: &'static str, value: f64) -> Result<f64> {
    if value == 0.0 {
        return Err(WorkoutError::DivisionByZero(field));
    }
    positive(field, value)
}
