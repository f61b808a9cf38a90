//! kcalc Library
//!
//! Calorie and nutrition calculations: BMR, TDEE, goal calories, macronutrient
//! split, BMI and water intake.

pub mod build_info;
pub mod error;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod tools;

pub use error::{CalcError, CalcResult};
pub use models::{ActivityLevel, DietType, Gender, Goal, Profile};
