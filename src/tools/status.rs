//! kcalc Status Tool
//!
//! Runtime status of the MCP server and the usage guide served to clients.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info;

/// Calculator usage instructions for AI assistants
pub const CALCULATOR_INSTRUCTIONS: &str = r#"
# kcalc Calculator Instructions

All tools are stateless. Nothing is stored between calls, so pass the full
profile every time.

## Profile

| Field  | Type    | Unit        |
|--------|---------|-------------|
| age    | integer | years, 1 to 150 |
| weight | number  | kilograms, up to 1000 |
| height | number  | centimeters, up to 300 |
| gender | string  | "male" or "female" |

## Selectors

- **activity_level**: sedentary, light, moderate, active, very_active
  (default: moderate)
- **goal**: lose (-500 kcal), maintain, gain (+500 kcal)
- **diet_type**: balanced, high_protein, low_carb (default: balanced)

An unknown selector is rejected with an invalid-params error listing the valid
values. The one exception is `calculate_water_intake`: an unknown activity level
falls back to the sedentary factor and the response reports
`activity_level_recognized: false`.

## Typical Workflow

1. `energy_summary` with the profile for BMR, TDEE at every level and goal calories
2. `calculate_macros` with the `recommended_calories` of the chosen goal
3. `bmi_category` and `calculate_water_intake` as needed

## Formulas

- BMR (Harris-Benedict)
  - male: 88.362 + 13.397 x kg + 4.799 x cm - 5.677 x years
  - female: 447.593 + 9.247 x kg + 3.098 x cm - 4.330 x years
- TDEE = BMR x activity multiplier (1.2 / 1.375 / 1.55 / 1.725 / 1.9)
- Macros: protein and carbs 4 kcal/g, fat 9 kcal/g
- BMI = kg / m^2 (18.5 normal, 25 overweight, 30 obese; boundaries go up)
- Water = kg x 0.033 L x factor (1.0 / 1.1 / 1.2 / 1.3 / 1.5)
"#;

/// Runtime status of the kcalc service
#[derive(Debug, Clone, Serialize)]
pub struct KcalcStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Process information
    pub started_at: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: DateTime<Utc>,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }

    pub fn get_status(&self) -> KcalcStatus {
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        KcalcStatus {
            build_number: build_info::build_number(),
            build_timestamp: build_info::BUILD_TIMESTAMP,
            version: build_info::VERSION,
            started_at: self.started_at,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reports_this_process() {
        let status = StatusTracker::new().get_status();
        assert_eq!(status.process_id, std::process::id());
        assert_eq!(status.version, env!("CARGO_PKG_VERSION"));
        assert!(status.started_at <= Utc::now());
    }

    #[test]
    fn test_instructions_cover_every_selector() {
        for name in ["very_active", "high_protein", "low_carb", "maintain"] {
            assert!(CALCULATOR_INSTRUCTIONS.contains(name));
        }
    }
}
