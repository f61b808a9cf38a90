//! Macronutrient and body-composition result types

use serde::{Deserialize, Serialize};

/// kcal per gram of protein
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// kcal per gram of carbohydrate
pub const KCAL_PER_G_CARBS: f64 = 4.0;
/// kcal per gram of fat
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Daily macronutrient targets
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroGrams {
    pub protein: f64, // grams
    pub carbs: f64,   // grams
    pub fats: f64,    // grams
}

impl MacroGrams {
    /// Energy carried by these grams
    pub fn calories(&self) -> f64 {
        self.protein * KCAL_PER_G_PROTEIN
            + self.carbs * KCAL_PER_G_CARBS
            + self.fats * KCAL_PER_G_FAT
    }
}

/// BMI classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Lower bounds of Normal, Overweight and Obese
    pub const NORMAL_FROM: f64 = 18.5;
    pub const OVERWEIGHT_FROM: f64 = 25.0;
    pub const OBESE_FROM: f64 = 30.0;

    /// Classify a BMI value; each boundary belongs to the upper category
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < Self::NORMAL_FROM {
            BmiCategory::Underweight
        } else if bmi < Self::OVERWEIGHT_FROM {
            BmiCategory::Normal
        } else if bmi < Self::OBESE_FROM {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Bajo peso",
            BmiCategory::Normal => "Peso normal",
            BmiCategory::Overweight => "Sobrepeso",
            BmiCategory::Obese => "Obesidad",
        }
    }
}

/// BMI value with its category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiResult {
    pub bmi: f64,
    pub category: BmiCategory,
    pub label: &'static str,
}
