//! Weight goal model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalcError;

/// Calorie offset that moves weight by roughly 0.5 kg per week
pub const WEEKLY_HALF_KG_KCAL: f64 = 500.0;

/// Weight goal enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    Maintain,
    Gain,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Lose, Goal::Maintain, Goal::Gain];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Lose => "lose",
            Goal::Maintain => "maintain",
            Goal::Gain => "gain",
        }
    }

    /// Daily calories added to TDEE
    pub fn calorie_offset(&self) -> f64 {
        match self {
            Goal::Lose => -WEEKLY_HALF_KG_KCAL,
            Goal::Maintain => 0.0,
            Goal::Gain => WEEKLY_HALF_KG_KCAL,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Goal::Lose => "Pérdida de peso (déficit de 500 cal)",
            Goal::Maintain => "Mantenimiento de peso",
            Goal::Gain => "Ganancia de peso (superávit de 500 cal)",
        }
    }
}

impl FromStr for Goal {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lose" => Ok(Goal::Lose),
            "maintain" => Ok(Goal::Maintain),
            "gain" => Ok(Goal::Gain),
            _ => Err(CalcError::invalid_choice(
                "goal",
                s,
                &Self::ALL.map(|goal| goal.as_str()),
            )),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets() {
        assert_eq!(Goal::Lose.calorie_offset(), -500.0);
        assert_eq!(Goal::Maintain.calorie_offset(), 0.0);
        assert_eq!(Goal::Gain.calorie_offset(), 500.0);
    }

    #[test]
    fn test_parse_goal() {
        assert_eq!("Gain".parse::<Goal>(), Ok(Goal::Gain));

        let CalcError::InvalidInput(msg) = "bulk".parse::<Goal>().unwrap_err();
        assert!(msg.ends_with("Use: lose, maintain, gain"));
    }
}
