pub mod repo;

use serde::{Deserialize, Serialize};

/// Per-user profile and daily targets. Written by the external profile
/// management flow; this service only reads it (or accepts an inline
/// snapshot on the chat endpoint).
#[derive(Debug, Clone, Default, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub display_name: Option<String>,
    pub age: Option<i32>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub goal: Option<String>,
    pub activity_level: Option<String>,
    pub daily_calorie_target: Option<f64>,
    pub daily_protein_target: Option<f64>,
    pub daily_carbs_target: Option<f64>,
    pub daily_fat_target: Option<f64>,
    #[serde(default)]
    pub health_conditions: Vec<String>,
    #[serde(default)]
    pub dietary_preferences: Vec<String>,
}
