//! Nutrition calculation module
//!
//! Pure functions over a profile or raw measurements. No I/O, no logging.

pub mod body;
pub mod energy;
pub mod hydration;
pub mod macros;

pub use body::bmi_category;
pub use energy::GoalCalories;
pub use hydration::{water_intake, water_intake_by_name};
pub use macros::calculate_macros;

/// Round half away from zero to `places` decimals
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
