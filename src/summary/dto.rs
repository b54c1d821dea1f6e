use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Default, Deserialize)]
pub struct DailySummaryRequest {
    /// Calendar date as YYYY-MM-DD; today (server-local) when absent.
    pub date: Option<String>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FoodLogRow {
    pub id: Uuid,
    pub food_name: Option<String>,
    pub serving_size: Option<String>,
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbohydrates: Option<f64>,
    pub fat: Option<f64>,
    pub fiber: Option<f64>,
    pub sugar: Option<f64>,
    pub sodium: Option<f64>,
    pub was_user_corrected: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub logged_at: OffsetDateTime,
}

#[derive(Debug, Default, PartialEq, Serialize)]
pub struct NutrientTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutrientGoals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct NutrientRemaining {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Percent of each goal reached, rounded to whole percents.
#[derive(Debug, PartialEq, Serialize)]
pub struct NutrientProgress {
    pub calories: i64,
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    pub date: String,
    pub food_logs: Vec<FoodLogRow>,
    pub totals: NutrientTotals,
    pub goals: NutrientGoals,
    pub remaining: NutrientRemaining,
    pub progress: NutrientProgress,
}
