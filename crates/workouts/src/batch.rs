//! Batch processing of input packages.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::dispatcher::{WorkoutPackage, read_package};
use crate::errors::Result;
use crate::summary::WorkoutSummary;

/// What to do with a package that fails to resolve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop at the first malformed package and return its error.
    #[default]
    Abort,
    /// Log the malformed package and continue with the rest.
    Skip,
}

/// Sample packages as recorded by the sensor unit.
pub fn reference_packages() -> Vec<WorkoutPackage> {
    vec![
        WorkoutPackage::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        WorkoutPackage::new("RUN", [15000.0, 1.0, 75.0]),
        WorkoutPackage::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Summarizes every package in order.
pub fn summarize_packages(
    packages: &[WorkoutPackage],
    policy: ErrorPolicy,
) -> Result<Vec<WorkoutSummary>> {
    let mut summaries = Vec::with_capacity(packages.len());

    for (index, package) in packages.iter().enumerate() {
        match read_package(package) {
            Ok(workout) => summaries.push(workout.summary()),
            Err(e) if policy == ErrorPolicy::Skip => {
                warn!(index, code = %package.code, "Skipping package: {e}");
            }
            Err(e) => return Err(e),
        }
    }

    Ok(summaries)
}
