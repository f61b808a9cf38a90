//! Body mass index

use super::round_to;
use crate::error::{ensure_finite, ensure_positive, CalcResult};
use crate::models::{BmiCategory, BmiResult};

/// BMI from weight in kilograms and height in centimeters
///
/// The category is decided on the unrounded value; the reported BMI is
/// rounded to 2 decimals.
pub fn bmi_category(weight: f64, height: f64) -> CalcResult<BmiResult> {
    let weight = ensure_positive("weight", weight)?;
    let height_m = ensure_positive("height", height)? / 100.0;

    let bmi = ensure_finite("bmi", weight / (height_m * height_m))?;
    let category = BmiCategory::from_bmi(bmi);

    Ok(BmiResult {
        bmi: ensure_finite("bmi", round_to(bmi, 2))?,
        category,
        label: category.label(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_weight() {
        let result = bmi_category(70.0, 175.0).unwrap();
        assert!((result.bmi - 22.86).abs() < 1e-9);
        assert_eq!(result.category, BmiCategory::Normal);
        assert_eq!(result.label, "Peso normal");
    }

    #[test]
    fn test_exact_boundaries_fall_upward() {
        // height 100 cm -> BMI equals weight
        assert_eq!(bmi_category(18.5, 100.0).unwrap().category, BmiCategory::Normal);
        assert_eq!(bmi_category(25.0, 100.0).unwrap().category, BmiCategory::Overweight);
        assert_eq!(bmi_category(30.0, 100.0).unwrap().category, BmiCategory::Obese);
    }

    #[test]
    fn test_other_categories() {
        assert_eq!(bmi_category(50.0, 180.0).unwrap().label, "Bajo peso");
        assert_eq!(bmi_category(85.0, 175.0).unwrap().label, "Sobrepeso");
        assert_eq!(bmi_category(110.0, 175.0).unwrap().label, "Obesidad");
    }

    #[test]
    fn test_rejects_zero_height() {
        assert!(bmi_category(70.0, 0.0).is_err());
        assert!(bmi_category(-70.0, 175.0).is_err());
    }

    #[test]
    fn test_rejects_overflowing_bmi() {
        assert!(bmi_category(70.0, 1e-160).is_err());
        assert!(bmi_category(1e308, 1.0).is_err());
    }
}
