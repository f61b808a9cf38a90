//! Energy MCP Tools
//!
//! BMR, TDEE and goal-calorie tools over a profile.

use serde::Serialize;

use crate::error::CalcResult;
use crate::models::{ActivityLevel, Goal, Profile};
use crate::nutrition::GoalCalories;

/// Response for calculate_bmr
#[derive(Debug, Serialize)]
pub struct BmrResponse {
    pub profile: Profile,
    pub bmr: f64,
}

/// Response for calculate_tdee
#[derive(Debug, Serialize)]
pub struct TdeeResponse {
    pub profile: Profile,
    pub activity_level: ActivityLevel,
    pub multiplier: f64,
    pub bmr: f64,
    pub tdee: f64,
}

/// TDEE at one activity level
#[derive(Debug, Serialize)]
pub struct LevelTdee {
    pub activity_level: ActivityLevel,
    pub description: &'static str,
    pub multiplier: f64,
    pub tdee: f64,
}

/// Response for energy_summary
#[derive(Debug, Serialize)]
pub struct EnergySummary {
    pub profile: Profile,
    pub bmr: f64,
    pub tdee_by_level: Vec<LevelTdee>,
    pub goals: Vec<GoalCalories>,
    pub water_liters: f64,
}

pub fn calculate_bmr(profile: &Profile) -> BmrResponse {
    BmrResponse {
        profile: *profile,
        bmr: profile.calculate_bmr(),
    }
}

pub fn calculate_tdee(profile: &Profile, activity_level: &str) -> CalcResult<TdeeResponse> {
    let level: ActivityLevel = activity_level.parse()?;

    Ok(TdeeResponse {
        profile: *profile,
        activity_level: level,
        multiplier: level.tdee_multiplier(),
        bmr: profile.calculate_bmr(),
        tdee: profile.calculate_tdee(level),
    })
}

pub fn calories_for_goal(
    profile: &Profile,
    goal: &str,
    activity_level: &str,
) -> CalcResult<GoalCalories> {
    // Activity level first, so a bad level is reported the same way as in calculate_tdee
    let level: ActivityLevel = activity_level.parse()?;
    let goal: Goal = goal.parse()?;

    Ok(profile.calories_for_goal(goal, level))
}

/// BMR, TDEE at every level and each goal at the default activity level
pub fn energy_summary(profile: &Profile) -> EnergySummary {
    let level = ActivityLevel::default();

    EnergySummary {
        profile: *profile,
        bmr: profile.calculate_bmr(),
        tdee_by_level: ActivityLevel::ALL
            .iter()
            .map(|&activity_level| LevelTdee {
                activity_level,
                description: activity_level.description(),
                multiplier: activity_level.tdee_multiplier(),
                tdee: profile.calculate_tdee(activity_level),
            })
            .collect(),
        goals: Goal::ALL
            .iter()
            .map(|&goal| profile.calories_for_goal(goal, level))
            .collect(),
        water_liters: profile.calculate_water_intake(level),
    }
}
