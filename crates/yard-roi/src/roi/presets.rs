use super::domain::RoiInputs;
use super::industry::{industry_profiles, IndustryProfile};
use super::quick::{from_quick_mode, QuickModeInputs};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresetError {
    #[error("unknown scenario '{0}' (expected one of pilot_1, regional_10, enterprise_50, enterprise_260)")]
    UnknownScenario(String),
    #[error("unknown mode '{0}' (expected one of conservative, expected, upside)")]
    UnknownMode(String),
    #[error("unknown industry '{0}' (expected one of retail, 3pl, manufacturing, food_bev, automotive)")]
    UnknownIndustry(String),
}

/// Canned network sizes offered by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioId {
    #[serde(rename = "pilot_1")]
    Pilot1,
    #[serde(rename = "regional_10")]
    Regional10,
    #[serde(rename = "enterprise_50")]
    Enterprise50,
    #[serde(rename = "enterprise_260")]
    Enterprise260,
}

impl ScenarioId {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Pilot1,
            Self::Regional10,
            Self::Enterprise50,
            Self::Enterprise260,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Pilot1 => "pilot_1",
            Self::Regional10 => "regional_10",
            Self::Enterprise50 => "enterprise_50",
            Self::Enterprise260 => "enterprise_260",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pilot1 => "Pilot (1 site)",
            Self::Regional10 => "Network (10 sites)",
            Self::Enterprise50 => "Network (50 sites)",
            Self::Enterprise260 => "Enterprise (260 sites)",
        }
    }

    pub const fn facilities(self) -> u32 {
        match self {
            Self::Pilot1 => 1,
            Self::Regional10 => 10,
            Self::Enterprise50 => 50,
            Self::Enterprise260 => 260,
        }
    }
}

impl Default for ScenarioId {
    fn default() -> Self {
        Self::Enterprise50
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ScenarioId {
    type Err = PresetError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|scenario| scenario.key() == needle)
            .ok_or_else(|| PresetError::UnknownScenario(value.to_string()))
    }
}

/// Assumption stance applied on top of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EconomicsMode {
    Conservative,
    Expected,
    Upside,
}

impl EconomicsMode {
    pub const fn ordered() -> [Self; 3] {
        [Self::Conservative, Self::Expected, Self::Upside]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Conservative => "conservative",
            Self::Expected => "expected",
            Self::Upside => "upside",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Conservative => "Conservative",
            Self::Expected => "Expected",
            Self::Upside => "Upside",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Conservative => "Higher costs, lower throughput gains",
            Self::Expected => "Industry-standard assumptions",
            Self::Upside => "Optimistic throughput, lower costs",
        }
    }

    fn profile(self) -> ModeProfile {
        match self {
            Self::Conservative => ModeProfile {
                shipments_per_day_per_facility: 120.0,
                avg_dwell_minutes: 60.0,
                detention_cost_per_hour: 85.0,
                labor_cost_per_hour: 32.0,
                gate_staff_per_facility: 5.0,
            },
            Self::Expected => ModeProfile {
                shipments_per_day_per_facility: 150.0,
                avg_dwell_minutes: 55.0,
                detention_cost_per_hour: 75.0,
                labor_cost_per_hour: 28.0,
                gate_staff_per_facility: 4.0,
            },
            Self::Upside => ModeProfile {
                shipments_per_day_per_facility: 180.0,
                avg_dwell_minutes: 50.0,
                detention_cost_per_hour: 65.0,
                labor_cost_per_hour: 25.0,
                gate_staff_per_facility: 3.0,
            },
        }
    }
}

impl Default for EconomicsMode {
    fn default() -> Self {
        Self::Expected
    }
}

impl fmt::Display for EconomicsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for EconomicsMode {
    type Err = PresetError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|mode| mode.key() == needle)
            .ok_or_else(|| PresetError::UnknownMode(value.to_string()))
    }
}

struct ModeProfile {
    shipments_per_day_per_facility: f64,
    avg_dwell_minutes: f64,
    detention_cost_per_hour: f64,
    labor_cost_per_hour: f64,
    gate_staff_per_facility: f64,
}

pub fn quick_inputs_for_preset(scenario: ScenarioId, mode: EconomicsMode) -> QuickModeInputs {
    let profile = mode.profile();
    QuickModeInputs {
        facilities: f64::from(scenario.facilities()),
        shipments_per_day_per_facility: profile.shipments_per_day_per_facility,
        avg_dwell_minutes: profile.avg_dwell_minutes,
        detention_cost_per_hour: profile.detention_cost_per_hour,
        labor_cost_per_hour: profile.labor_cost_per_hour,
        gate_staff_per_facility: profile.gate_staff_per_facility,
    }
}

pub fn inputs_for_preset(scenario: ScenarioId, mode: EconomicsMode) -> RoiInputs {
    from_quick_mode(&quick_inputs_for_preset(scenario, mode))
}

/// A preset choice as submitted by a caller. `adoption_percent` is
/// narrative only and never reaches [`RoiInputs`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PresetSelection {
    #[serde(default)]
    pub scenario: ScenarioId,
    #[serde(default)]
    pub mode: EconomicsMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adoption_percent: Option<f64>,
}

impl PresetSelection {
    pub fn quick_inputs(&self) -> QuickModeInputs {
        quick_inputs_for_preset(self.scenario, self.mode)
    }

    pub fn inputs(&self) -> RoiInputs {
        inputs_for_preset(self.scenario, self.mode)
    }
}

/// Catalog entry describing one scenario or mode for pickers.
#[derive(Debug, Clone, Serialize)]
pub struct PresetCatalogEntry {
    pub key: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facilities: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PresetCatalog {
    pub scenarios: Vec<PresetCatalogEntry>,
    pub modes: Vec<PresetCatalogEntry>,
    pub industries: Vec<IndustryProfile>,
    pub default_scenario: ScenarioId,
    pub default_mode: EconomicsMode,
}

pub fn catalog() -> PresetCatalog {
    PresetCatalog {
        scenarios: ScenarioId::ordered()
            .into_iter()
            .map(|scenario| PresetCatalogEntry {
                key: scenario.key(),
                label: scenario.label(),
                facilities: Some(scenario.facilities()),
                description: None,
            })
            .collect(),
        modes: EconomicsMode::ordered()
            .into_iter()
            .map(|mode| PresetCatalogEntry {
                key: mode.key(),
                label: mode.label(),
                facilities: None,
                description: Some(mode.description()),
            })
            .collect(),
        industries: industry_profiles(),
        default_scenario: ScenarioId::default(),
        default_mode: EconomicsMode::default(),
    }
}
