//! Macronutrient split
//!
//! Converts a daily calorie total into grams of protein, carbs and fat.

use super::round_to;
use crate::error::{ensure_finite, CalcError, CalcResult};
use crate::models::{
    DietType, MacroGrams, KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN,
};

/// Grams of each macronutrient for `calories` kcal/day under `diet_type`
///
/// Each figure is rounded to 1 decimal.
pub fn calculate_macros(calories: f64, diet_type: DietType) -> CalcResult<MacroGrams> {
    if !calories.is_finite() || calories < 0.0 {
        return Err(CalcError::InvalidInput(format!(
            "calories must be a non-negative number, got {}",
            calories
        )));
    }

    let distribution = diet_type.distribution();

    let grams = |share: f64, kcal_per_g: f64| {
        ensure_finite("macro grams", round_to(calories * share / kcal_per_g, 1))
    };

    Ok(MacroGrams {
        protein: grams(distribution.protein, KCAL_PER_G_PROTEIN)?,
        carbs: grams(distribution.carbs, KCAL_PER_G_CARBS)?,
        fats: grams(distribution.fats, KCAL_PER_G_FAT)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_2000() {
        let grams = calculate_macros(2000.0, DietType::Balanced).unwrap();
        assert_eq!(grams.protein, 150.0);
        assert_eq!(grams.carbs, 200.0);
        assert!((grams.fats - 66.7).abs() < 1e-9);
    }

    #[test]
    fn test_high_protein_and_low_carb() {
        let grams = calculate_macros(2000.0, DietType::HighProtein).unwrap();
        assert_eq!(grams.protein, 200.0);
        assert_eq!(grams.carbs, 150.0);

        let grams = calculate_macros(2000.0, DietType::LowCarb).unwrap();
        assert_eq!(grams.protein, 175.0);
        assert_eq!(grams.carbs, 100.0);
        assert_eq!(grams.fats, 100.0);
    }

    #[test]
    fn test_macros_partition_calories() {
        for calories in [1200.0, 1850.5, 2628.29, 3500.0] {
            for diet in DietType::ALL {
                let grams = calculate_macros(calories, diet).unwrap();
                let d = diet.distribution();

                // 1-decimal rounding moves each figure by at most 0.05 g
                let protein_kcal = grams.protein * KCAL_PER_G_PROTEIN;
                let carbs_kcal = grams.carbs * KCAL_PER_G_CARBS;
                let fats_kcal = grams.fats * KCAL_PER_G_FAT;

                assert!((protein_kcal - calories * d.protein).abs() <= 0.2 + 1e-9);
                assert!((carbs_kcal - calories * d.carbs).abs() <= 0.2 + 1e-9);
                assert!((fats_kcal - calories * d.fats).abs() <= 0.45 + 1e-9);
                assert!((grams.calories() - calories).abs() <= 0.85 + 1e-9);
            }
        }
    }

    #[test]
    fn test_zero_calories() {
        assert_eq!(calculate_macros(0.0, DietType::Balanced).unwrap(), MacroGrams::default());
    }

    #[test]
    fn test_invalid_calories() {
        assert!(calculate_macros(-1.0, DietType::Balanced).is_err());
        assert!(calculate_macros(f64::NAN, DietType::LowCarb).is_err());
    }
}
