//! Profile model
//!
//! Static physiological attributes of one user. Immutable once built.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ensure_positive, CalcError, CalcResult};

/// Gender enum, selects the Harris-Benedict equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(CalcError::invalid_choice(
                "gender",
                s,
                &Self::ALL.map(|gender| gender.as_str()),
            )),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upper bounds for a profile's measurements
pub const MAX_AGE: u32 = 150;
pub const MAX_WEIGHT_KG: f64 = 1000.0;
pub const MAX_HEIGHT_CM: f64 = 300.0;

fn ensure_at_most(field: &str, value: f64, max: f64) -> CalcResult<f64> {
    if value <= max {
        Ok(value)
    } else {
        Err(CalcError::InvalidInput(format!(
            "{} must be at most {}, got {}",
            field, max, value
        )))
    }
}

/// A user's profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Profile {
    age: u32,    // years
    weight: f64, // kilograms
    height: f64, // centimeters
    gender: Gender,
}

impl Profile {
    /// Create a validated profile
    pub fn new(age: u32, weight: f64, height: f64, gender: Gender) -> CalcResult<Self> {
        if age == 0 || age > MAX_AGE {
            return Err(CalcError::InvalidInput(format!(
                "age must be between 1 and {} years, got {}",
                MAX_AGE, age
            )));
        }

        let weight = ensure_positive("weight", weight)?;
        let height = ensure_positive("height", height)?;

        Ok(Self {
            age,
            weight: ensure_at_most("weight", weight, MAX_WEIGHT_KG)?,
            height: ensure_at_most("height", height, MAX_HEIGHT_CM)?,
            gender,
        })
    }

    /// Create a profile with the gender given as text ("male" / "female")
    pub fn parse(age: u32, weight: f64, height: f64, gender: &str) -> CalcResult<Self> {
        Self::new(age, weight, height, gender.parse()?)
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile() {
        let profile = Profile::new(30, 70.0, 175.0, Gender::Male).unwrap();
        assert_eq!(profile.age(), 30);
        assert_eq!(profile.weight(), 70.0);
        assert_eq!(profile.height(), 175.0);
        assert_eq!(profile.gender(), Gender::Male);
    }

    #[test]
    fn test_parse_gender_case_insensitive() {
        let profile = Profile::parse(25, 60.0, 165.0, " Female").unwrap();
        assert_eq!(profile.gender(), Gender::Female);
    }

    #[test]
    fn test_unknown_gender_rejected() {
        let CalcError::InvalidInput(msg) = Profile::parse(25, 60.0, 165.0, "other").unwrap_err();
        assert!(msg.contains("male, female"));
    }

    #[test]
    fn test_invalid_measurements_rejected() {
        assert!(Profile::new(0, 70.0, 175.0, Gender::Male).is_err());
        assert!(Profile::new(30, 0.0, 175.0, Gender::Male).is_err());
        assert!(Profile::new(30, 70.0, -1.0, Gender::Male).is_err());
        assert!(Profile::new(30, f64::NAN, 175.0, Gender::Female).is_err());
    }

    #[test]
    fn test_out_of_range_measurements_rejected() {
        assert!(Profile::new(MAX_AGE + 1, 70.0, 175.0, Gender::Male).is_err());
        assert!(Profile::new(30, 1e307, 175.0, Gender::Male).is_err());
        assert!(Profile::new(30, 70.0, 1e10, Gender::Female).is_err());

        let edge = Profile::new(MAX_AGE, MAX_WEIGHT_KG, MAX_HEIGHT_CM, Gender::Male).unwrap();
        assert!(edge.calculate_bmr().is_finite());
    }
}
