//! Water intake estimate

use super::round_to;
use crate::error::{ensure_finite, ensure_positive, CalcResult};
use crate::models::ActivityLevel;

/// Liters of water per kilogram of body weight
pub const LITERS_PER_KG: f64 = 0.033;

/// Factor used when an activity level name is not recognized
pub const UNKNOWN_ACTIVITY_WATER_FACTOR: f64 = 1.0;

pub(crate) fn liters_for(weight: f64, factor: f64) -> f64 {
    round_to(weight * LITERS_PER_KG * factor, 2)
}

/// Recommended water intake in liters/day, rounded to 2 decimals
pub fn water_intake(weight: f64, activity_level: ActivityLevel) -> CalcResult<f64> {
    let weight = ensure_positive("weight", weight)?;
    ensure_finite("water intake", liters_for(weight, activity_level.water_factor()))
}

/// Like [`water_intake`], but takes the activity level by name
///
/// Unlike every other selector in this crate, an unrecognized name is not an
/// error: it falls back to [`UNKNOWN_ACTIVITY_WATER_FACTOR`].
pub fn water_intake_by_name(weight: f64, activity_level: &str) -> CalcResult<f64> {
    let weight = ensure_positive("weight", weight)?;
    let factor = activity_level
        .parse::<ActivityLevel>()
        .map(|level| level.water_factor())
        .unwrap_or(UNKNOWN_ACTIVITY_WATER_FACTOR);

    ensure_finite("water intake", liters_for(weight, factor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_intake_moderate() {
        // 70 * 0.033 * 1.2 = 2.772
        assert_eq!(water_intake(70.0, ActivityLevel::Moderate).unwrap(), 2.77);
    }

    #[test]
    fn test_water_intake_levels() {
        assert_eq!(water_intake(70.0, ActivityLevel::Sedentary).unwrap(), 2.31);
        assert_eq!(water_intake(70.0, ActivityLevel::VeryActive).unwrap(), 3.47);
    }

    #[test]
    fn test_by_name_matches_typed() {
        for level in ActivityLevel::ALL {
            assert_eq!(
                water_intake_by_name(82.5, level.as_str()).unwrap(),
                water_intake(82.5, level).unwrap()
            );
        }
    }

    #[test]
    fn test_unknown_level_silently_uses_sedentary_factor() {
        assert_eq!(water_intake_by_name(70.0, "extreme").unwrap(), 2.31);
        assert_eq!(water_intake_by_name(70.0, "").unwrap(), 2.31);
    }

    #[test]
    fn test_by_name_folds_case_and_whitespace() {
        // Matching ignores case and surrounding spaces, so these are not the fallback
        assert_eq!(water_intake_by_name(70.0, "Moderate").unwrap(), 2.77);
        assert_eq!(water_intake_by_name(70.0, " VERY_ACTIVE ").unwrap(), 3.47);
        assert_eq!(water_intake_by_name(70.0, "very active").unwrap(), 2.31);
    }

    #[test]
    fn test_rejects_overflowing_result() {
        assert!(water_intake(1e308, ActivityLevel::VeryActive).is_err());
        assert!(water_intake_by_name(1e308, "sedentary").is_err());
    }

    #[test]
    fn test_invalid_weight() {
        assert!(water_intake(0.0, ActivityLevel::Moderate).is_err());
        assert!(water_intake_by_name(-5.0, "moderate").is_err());
    }
}
