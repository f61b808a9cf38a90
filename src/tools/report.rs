//! Demonstration report
//!
//! Plain-text summary of everything the calculator derives for one profile.

use crate::error::CalcResult;
use crate::models::{ActivityLevel, DietType, Gender, Goal, Profile};
use crate::nutrition::{bmi_category, calculate_macros};

/// Profile used by the `kcalc` binary
pub fn demo_profile() -> CalcResult<Profile> {
    Profile::new(30, 70.0, 175.0, Gender::Male)
}

/// Render the report for `profile`
pub fn render_report(profile: &Profile) -> CalcResult<String> {
    let level = ActivityLevel::default();
    let rule = "=".repeat(50);

    let mut out = String::new();

    out.push_str(&format!("{}\n", rule));
    out.push_str("CALCULADORA DE CALORÍAS\n");
    out.push_str(&format!("{}\n", rule));

    out.push_str("\nDatos del usuario:\n");
    out.push_str(&format!("  Edad: {} años\n", profile.age()));
    out.push_str(&format!("  Peso: {} kg\n", profile.weight()));
    out.push_str(&format!("  Altura: {} cm\n", profile.height()));
    out.push_str(&format!("  Género: {}\n", profile.gender()));

    let bmi = bmi_category(profile.weight(), profile.height())?;
    out.push_str(&format!("\nÍndice de Masa Corporal (BMI): {} ({})\n", bmi.bmi, bmi.label));
    out.push_str(&format!(
        "Ingesta de agua recomendada: {} litros/día\n",
        profile.calculate_water_intake(level)
    ));
    out.push_str(&format!(
        "Tasa Metabólica Basal (BMR): {} calorías/día\n",
        profile.calculate_bmr()
    ));

    out.push_str("\nGasto Energético Diario Total (TDEE) por nivel de actividad:\n");
    for activity_level in ActivityLevel::ALL {
        out.push_str(&format!(
            "  {}: {} calorías/día\n",
            activity_level,
            profile.calculate_tdee(activity_level)
        ));
    }

    out.push_str("\nRecomendaciones según objetivo:\n");
    for goal in Goal::ALL {
        let result = profile.calories_for_goal(goal, level);
        out.push_str(&format!("\n  {}:\n", goal.as_str().to_uppercase()));
        out.push_str(&format!("    BMR: {} cal\n", result.bmr));
        out.push_str(&format!("    TDEE: {} cal\n", result.tdee));
        out.push_str(&format!("    Recomendación: {} cal/día\n", result.recommended_calories));
        out.push_str(&format!("    ({})\n", result.description));
    }

    let maintenance = profile.calculate_tdee(level);
    out.push_str(&format!("\nMacronutrientes para {} cal/día:\n", maintenance));
    for diet in DietType::ALL {
        let grams = calculate_macros(maintenance, diet)?;
        out.push_str(&format!(
            "  {}: proteína {} g, carbohidratos {} g, grasas {} g\n",
            diet.display_name(),
            grams.protein,
            grams.carbs,
            grams.fats
        ));
    }

    Ok(out)
}
