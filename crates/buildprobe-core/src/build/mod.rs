//! Container build planning and driving.

mod driver;
mod plan;

pub use driver::{BuildDriver, DriverError};
pub use plan::BuildPlan;
