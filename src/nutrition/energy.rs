//! Energy balance calculations
//!
//! BMR via the Harris-Benedict equation, TDEE via activity multipliers and
//! goal calories via a fixed daily offset. Nothing is cached; every call
//! recomputes from the profile.

use serde::Serialize;

use super::round_to;
use crate::models::{ActivityLevel, Gender, Goal, Profile};

/// Coefficients of one Harris-Benedict equation
struct HarrisBenedict {
    base: f64,
    per_kg: f64,
    per_cm: f64,
    per_year: f64,
}

const HARRIS_BENEDICT_MALE: HarrisBenedict = HarrisBenedict {
    base: 88.362,
    per_kg: 13.397,
    per_cm: 4.799,
    per_year: 5.677,
};

const HARRIS_BENEDICT_FEMALE: HarrisBenedict = HarrisBenedict {
    base: 447.593,
    per_kg: 9.247,
    per_cm: 3.098,
    per_year: 4.330,
};

/// Recommended daily calories for a goal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalCalories {
    pub goal: Goal,
    pub activity_level: ActivityLevel,
    pub bmr: f64,
    pub tdee: f64,
    pub recommended_calories: f64,
    pub description: &'static str,
}

impl Profile {
    /// Basal metabolic rate in kcal/day, rounded to 2 decimals
    pub fn calculate_bmr(&self) -> f64 {
        let hb = match self.gender() {
            Gender::Male => &HARRIS_BENEDICT_MALE,
            Gender::Female => &HARRIS_BENEDICT_FEMALE,
        };

        let bmr = hb.base + hb.per_kg * self.weight() + hb.per_cm * self.height()
            - hb.per_year * f64::from(self.age());

        round_to(bmr, 2)
    }

    /// Total daily energy expenditure in kcal/day, rounded to 2 decimals
    pub fn calculate_tdee(&self, activity_level: ActivityLevel) -> f64 {
        round_to(self.calculate_bmr() * activity_level.tdee_multiplier(), 2)
    }

    /// Calories to eat per day to reach `goal` at the given activity level
    pub fn calories_for_goal(&self, goal: Goal, activity_level: ActivityLevel) -> GoalCalories {
        let tdee = self.calculate_tdee(activity_level);

        GoalCalories {
            goal,
            activity_level,
            bmr: self.calculate_bmr(),
            tdee,
            recommended_calories: round_to(tdee + goal.calorie_offset(), 2),
            description: goal.description(),
        }
    }

    /// Recommended water intake in liters/day for this profile's weight
    pub fn calculate_water_intake(&self, activity_level: ActivityLevel) -> f64 {
        super::hydration::liters_for(self.weight(), activity_level.water_factor())
    }
}
