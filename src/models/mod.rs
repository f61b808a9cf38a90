//! Data models
//!
//! Profiles, closed selector enums and calculation result types.

mod activity;
mod diet;
mod goal;
mod nutrition;
mod profile;

pub use activity::ActivityLevel;
pub use diet::{DietType, MacroDistribution};
pub use goal::{Goal, WEEKLY_HALF_KG_KCAL};
pub use nutrition::{
    BmiCategory, BmiResult, MacroGrams, KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN,
};
pub use profile::{Gender, Profile, MAX_AGE, MAX_HEIGHT_CM, MAX_WEIGHT_KG};
