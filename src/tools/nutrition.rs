//! Nutrition MCP Tools
//!
//! Macro split, BMI and water intake tools.

use serde::Serialize;

use crate::error::CalcResult;
use crate::models::{ActivityLevel, BmiResult, DietType, MacroDistribution, MacroGrams};
use crate::nutrition::{bmi_category, calculate_macros, water_intake_by_name};

/// Response for calculate_macros
#[derive(Debug, Serialize)]
pub struct MacrosResponse {
    pub calories: f64,
    pub diet_type: DietType,
    pub distribution: MacroDistribution,
    pub grams: MacroGrams,
}

/// Response for calculate_water_intake
#[derive(Debug, Serialize)]
pub struct WaterResponse {
    pub weight: f64,
    pub activity_level: String,
    /// false when the level was not recognized and the default factor was used
    pub activity_level_recognized: bool,
    pub liters: f64,
}

pub fn macros(calories: f64, diet_type: &str) -> CalcResult<MacrosResponse> {
    let diet: DietType = diet_type.parse()?;

    Ok(MacrosResponse {
        calories,
        diet_type: diet,
        distribution: diet.distribution(),
        grams: calculate_macros(calories, diet)?,
    })
}

pub fn bmi(weight: f64, height: f64) -> CalcResult<BmiResult> {
    bmi_category(weight, height)
}

pub fn water_intake(weight: f64, activity_level: &str) -> CalcResult<WaterResponse> {
    let liters = water_intake_by_name(weight, activity_level)?;

    let recognized = activity_level.parse::<ActivityLevel>().is_ok();
    if !recognized {
        tracing::warn!(
            "Unrecognized activity level '{}' for water intake, using default factor",
            activity_level
        );
    }

    Ok(WaterResponse {
        weight,
        activity_level: activity_level.to_string(),
        activity_level_recognized: recognized,
        liters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BmiCategory;

    #[test]
    fn test_macros_tool() {
        let resp = macros(2000.0, "balanced").unwrap();
        assert_eq!(resp.diet_type, DietType::Balanced);
        assert_eq!(resp.grams.protein, 150.0);
        assert_eq!(resp.grams.carbs, 200.0);
        assert!((resp.grams.fats - 66.7).abs() < 1e-9);

        assert!(macros(2000.0, "carnivore").is_err());
    }

    #[test]
    fn test_bmi_tool() {
        let resp = bmi(70.0, 175.0).unwrap();
        assert_eq!(resp.category, BmiCategory::Normal);

        let json = serde_json::to_value(resp).unwrap();
        assert_eq!(json["category"], "normal");
        assert_eq!(json["label"], "Peso normal");
    }

    #[test]
    fn test_water_tool_flags_unknown_level() {
        let resp = water_intake(70.0, "moderate").unwrap();
        assert!(resp.activity_level_recognized);
        assert_eq!(resp.liters, 2.77);

        let resp = water_intake(70.0, "extreme").unwrap();
        assert!(!resp.activity_level_recognized);
        assert_eq!(resp.liters, 2.31);
    }
}
