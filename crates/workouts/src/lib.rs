//! Workout summaries from raw sensor readings.
//!
//! Three activities are supported: running (`RUN`), sports walking (`WLK`)
//! and swimming (`SWM`). Each has a profile holding its formula
//! coefficients; a calculator pairs a profile with a validated reading and
//! derives distance, mean speed and calories on demand.
//!
//! # Quick Start
//!
//! ```rust
//! use workouts::prelude::*;
//!
//! let workout = resolve("RUN", &[15000.0, 1.0, 75.0])?;
//! println!("{}", workout.summary());
//! # Ok::<(), WorkoutError>(())
//! ```

pub mod batch;
pub mod calculator;
pub mod config;
pub mod dispatcher;
pub mod errors;
pub mod profiles;
pub mod readings;
pub mod summary;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::batch::{ErrorPolicy, reference_packages, summarize_packages};
    pub use crate::calculator::{Calculator, Running, Swimming, Walking};
    pub use crate::config::{DriverConfig, OutputFormat};
    pub use crate::dispatcher::{ActivityCode, Workout, WorkoutPackage, read_package, resolve};
    pub use crate::errors::WorkoutError;
    pub use crate::profiles::{ActivityProfile, RunningProfile, SwimmingProfile, WalkingProfile};
    pub use crate::readings::{BaseReading, Reading, SwimmingReading, WalkingReading};
    pub use crate::summary::WorkoutSummary;
}
