use serde::{Deserialize, Serialize};

pub const LT_MOTOR: &str = "LT MOTOR";
pub const FHP_MOTOR: &str = "FHP MOTOR";

/// Product divisions offered when creating a model, in display order.
pub const DIVISIONS: &[&str] = &[
    "FANS",
    "PUMP",
    "SDA",
    "LIGHT",
    "IWH",
    "SWH",
    "COOLER",
    FHP_MOTOR,
    LT_MOTOR,
    "HT MOTOR",
    "ALTERNATOR",
    "OTHERS",
];

pub const REWINDING_TYPES: &[&str] = &["Copper", "Aluminium"];

/// Winding type preset for LT motors.
pub const LT_DEFAULT_REWINDING_TYPE: &str = "Copper";

/// Divisions whose rewinding charge comes from the rate table.
pub fn has_rate_table(division: &str) -> bool {
    division == LT_MOTOR || division == FHP_MOTOR
}

/// Body of `POST model/create`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateModel {
    pub division: String,
    pub model: String,
    pub frame: Option<String>,
    pub hp_rating: Option<f64>,
    pub winding_type: Option<String>,
    pub rewinding_charge: Option<i64>,
}

/// Body of `POST rewinding_rate/rewinding_rate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewindingChargeRequest {
    pub division: String,
    pub frame: Option<String>,
    pub hp_rating: Option<f64>,
    pub winding_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RewindingChargeResponse {
    #[serde(default)]
    pub rewinding_cost: Option<f64>,
}

/// Body of `POST model/model_list` and `POST model/cost_details`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelRequest {
    pub division: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// Response of `POST model/cost_details`; only the rewinding base cost is read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelCostDetails {
    #[serde(default)]
    pub rewinding_cost: Option<f64>,
}
