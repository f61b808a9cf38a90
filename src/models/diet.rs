//! Diet type model
//!
//! Each diet maps to a fixed share of total calories per macronutrient.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalcError;

/// Share of total calories per macronutrient (fractions summing to 1.0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroDistribution {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// Diet type enum
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    #[default]
    Balanced,
    HighProtein,
    LowCarb,
}

impl DietType {
    pub const ALL: [DietType; 3] = [DietType::Balanced, DietType::HighProtein, DietType::LowCarb];

    pub fn as_str(&self) -> &'static str {
        match self {
            DietType::Balanced => "balanced",
            DietType::HighProtein => "high_protein",
            DietType::LowCarb => "low_carb",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DietType::Balanced => "Equilibrada",
            DietType::HighProtein => "Alta en proteína",
            DietType::LowCarb => "Baja en carbohidratos",
        }
    }

    pub fn distribution(&self) -> MacroDistribution {
        match self {
            DietType::Balanced => MacroDistribution {
                protein: 0.30,
                carbs: 0.40,
                fats: 0.30,
            },
            DietType::HighProtein => MacroDistribution {
                protein: 0.40,
                carbs: 0.30,
                fats: 0.30,
            },
            DietType::LowCarb => MacroDistribution {
                protein: 0.35,
                carbs: 0.20,
                fats: 0.45,
            },
        }
    }
}

impl FromStr for DietType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "balanced" => Ok(DietType::Balanced),
            "high_protein" => Ok(DietType::HighProtein),
            "low_carb" => Ok(DietType::LowCarb),
            _ => Err(CalcError::invalid_choice(
                "diet type",
                s,
                &Self::ALL.map(|diet| diet.as_str()),
            )),
        }
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distributions_sum_to_one() {
        for diet in DietType::ALL {
            let d = diet.distribution();
            assert!((d.protein + d.carbs + d.fats - 1.0).abs() < 1e-9, "{}", diet);
        }
    }

    #[test]
    fn test_parse_diet_type() {
        assert_eq!("high_protein".parse::<DietType>(), Ok(DietType::HighProtein));
        assert_eq!("LOW_CARB".parse::<DietType>(), Ok(DietType::LowCarb));

        let CalcError::InvalidInput(msg) = "keto".parse::<DietType>().unwrap_err();
        assert!(msg.contains("balanced, high_protein, low_carb"));
    }
}
