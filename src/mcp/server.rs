//! kcalc MCP Server Implementation
//!
//! Exposes the calculator as MCP tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use crate::models::Profile;
use crate::tools::energy;
use crate::tools::nutrition;
use crate::tools::status::StatusTracker;

/// kcalc MCP Service
#[derive(Clone)]
pub struct KcalcService {
    status_tracker: Arc<StatusTracker>,
    tool_router: ToolRouter<KcalcService>,
}

impl KcalcService {
    pub fn new() -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new()),
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for KcalcService {
    fn default() -> Self {
        Self::new()
    }
}

fn invalid_input(e: CalcError) -> McpError {
    McpError::invalid_params(e.to_string(), None)
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ProfileParams {
    /// Age in years
    pub age: u32,
    /// Weight in kilograms
    pub weight: f64,
    /// Height in centimeters
    pub height: f64,
    /// "male" or "female"
    pub gender: String,
}

impl ProfileParams {
    fn to_profile(&self) -> Result<Profile, McpError> {
        Profile::parse(self.age, self.weight, self.height, &self.gender).map_err(invalid_input)
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ProfileOnlyParams {
    pub profile: ProfileParams,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct TdeeParams {
    pub profile: ProfileParams,
    /// sedentary, light, moderate, active, very_active
    pub activity_level: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GoalParams {
    pub profile: ProfileParams,
    /// lose, maintain, gain
    pub goal: String,
    /// sedentary, light, moderate, active, very_active (default moderate)
    #[serde(default = "default_activity_level")]
    pub activity_level: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MacrosParams {
    /// Total daily calories
    pub calories: f64,
    /// balanced, high_protein, low_carb (default balanced)
    #[serde(default = "default_diet_type")]
    pub diet_type: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct BmiParams {
    /// Weight in kilograms
    pub weight: f64,
    /// Height in centimeters
    pub height: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct WaterParams {
    /// Weight in kilograms
    pub weight: f64,
    /// Activity level (default moderate); unknown values use the sedentary factor
    #[serde(default = "default_activity_level")]
    pub activity_level: String,
}

fn default_activity_level() -> String { "moderate".to_string() }
fn default_diet_type() -> String { "balanced".to_string() }

// ============================================================================
// Tool Router
// ============================================================================

#[tool_router]
impl KcalcService {
    // --- Status ---

    #[tool(description = "Get the current status of the kcalc service including build info and process information")]
    fn kcalc_status(&self) -> Result<CallToolResult, McpError> {
        json_result(&self.status_tracker.get_status())
    }

    #[tool(description = "Get the calculator usage guide: profile fields, valid selector values and formulas. Call this before the first calculation.")]
    fn calculator_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CALCULATOR_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CALCULATOR_INSTRUCTIONS)]))
    }

    // --- Energy ---

    #[tool(description = "Calculate Basal Metabolic Rate (kcal/day) with the Harris-Benedict equation")]
    fn calculate_bmr(&self, Parameters(p): Parameters<ProfileOnlyParams>) -> Result<CallToolResult, McpError> {
        let profile = p.profile.to_profile()?;
        json_result(&energy::calculate_bmr(&profile))
    }

    #[tool(description = "Calculate Total Daily Energy Expenditure (kcal/day) for an activity level")]
    fn calculate_tdee(&self, Parameters(p): Parameters<TdeeParams>) -> Result<CallToolResult, McpError> {
        let profile = p.profile.to_profile()?;
        let result = energy::calculate_tdee(&profile, &p.activity_level).map_err(invalid_input)?;
        json_result(&result)
    }

    #[tool(description = "Recommended daily calories for a goal (lose: TDEE - 500, maintain: TDEE, gain: TDEE + 500)")]
    fn calories_for_goal(&self, Parameters(p): Parameters<GoalParams>) -> Result<CallToolResult, McpError> {
        let profile = p.profile.to_profile()?;
        let result = energy::calories_for_goal(&profile, &p.goal, &p.activity_level)
            .map_err(invalid_input)?;
        json_result(&result)
    }

    #[tool(description = "BMR, TDEE at every activity level, calories for every goal and water intake in one call. PREFERRED when the user wants an overview.")]
    fn energy_summary(&self, Parameters(p): Parameters<ProfileOnlyParams>) -> Result<CallToolResult, McpError> {
        let profile = p.profile.to_profile()?;
        json_result(&energy::energy_summary(&profile))
    }

    // --- Nutrition ---

    #[tool(description = "Split daily calories into grams of protein, carbs and fat for a diet type")]
    fn calculate_macros(&self, Parameters(p): Parameters<MacrosParams>) -> Result<CallToolResult, McpError> {
        let result = nutrition::macros(p.calories, &p.diet_type).map_err(invalid_input)?;
        json_result(&result)
    }

    #[tool(description = "Calculate Body Mass Index and its category from weight (kg) and height (cm)")]
    fn bmi_category(&self, Parameters(p): Parameters<BmiParams>) -> Result<CallToolResult, McpError> {
        let result = nutrition::bmi(p.weight, p.height).map_err(invalid_input)?;
        json_result(&result)
    }

    #[tool(description = "Recommended daily water intake in liters from weight (kg) and activity level")]
    fn calculate_water_intake(&self, Parameters(p): Parameters<WaterParams>) -> Result<CallToolResult, McpError> {
        let result = nutrition::water_intake(p.weight, &p.activity_level).map_err(invalid_input)?;
        json_result(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for KcalcService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "kcalc".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("kcalc Calorie Calculator".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "kcalc - stateless calorie and nutrition calculator. \
                 Call calculator_instructions first. \
                 Energy: calculate_bmr, calculate_tdee, calories_for_goal, energy_summary. \
                 Nutrition: calculate_macros, bmi_category, calculate_water_intake. \
                 Status: kcalc_status."
                    .into(),
            ),
        }
    }
}
