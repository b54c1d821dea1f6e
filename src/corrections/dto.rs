use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectFoodAnalysisRequest {
    pub food_log_id: Option<Uuid>,
    pub original_analysis: Option<Value>,
    pub correction: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct CorrectionResponse {
    pub message: String,
}

/// The correctable subset of a food log. Anything outside this allow-list
/// stays in the audit record but is never patched onto the log.
#[derive(Debug, Default, PartialEq)]
pub struct CorrectionPatch {
    pub food_name: Option<String>,
    pub serving_size: Option<String>,
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbohydrates: Option<f64>,
    pub fat: Option<f64>,
    pub fiber: Option<f64>,
    pub sugar: Option<f64>,
    pub sodium: Option<f64>,
}

impl CorrectionPatch {
    pub fn from_correction(correction: &Value) -> Self {
        let s = |key: &str| correction.get(key).and_then(Value::as_str).map(String::from);
        let n = |key: &str| correction.get(key).and_then(Value::as_f64);
        Self {
            food_name: s("foodName"),
            serving_size: s("servingSize"),
            calories: n("calories"),
            protein: n("protein"),
            carbohydrates: n("carbohydrates"),
            fat: n("fat"),
            fiber: n("fiber"),
            sugar: n("sugar"),
            sodium: n("sodium"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn picks_up_allow_listed_keys() {
        let patch = CorrectionPatch::from_correction(&json!({
            "calories": 300,
            "foodName": "Grilled chicken",
            "sodium": 250.5,
        }));
        assert_eq!(patch.calories, Some(300.0));
        assert_eq!(patch.food_name.as_deref(), Some("Grilled chicken"));
        assert_eq!(patch.sodium, Some(250.5));
        assert_eq!(patch.protein, None);
    }

    #[test]
    fn ignores_unknown_keys() {
        let patch = CorrectionPatch::from_correction(&json!({
            "wasUserCorrected": false,
            "userId": "someone-else",
            "healthScore": 11,
        }));
        assert_eq!(patch, CorrectionPatch::default());
    }

    #[test]
    fn ignores_wrongly_typed_values() {
        let patch = CorrectionPatch::from_correction(&json!({
            "calories": "three hundred",
            "foodName": 42,
        }));
        assert_eq!(patch.calories, None);
        assert_eq!(patch.food_name, None);
    }
}
