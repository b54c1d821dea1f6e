use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeFoodRequest {
    pub image_base64: Option<String>,
    pub mime_type: Option<String>,
    pub user_context: Option<String>,
}

/// Nutrition facts for one analyzed item, as promised by the prompt
/// contract. Parsed from the model reply and range-checked before it is
/// returned to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub food_name: String,
    pub description: Option<String>,
    pub serving_size: Option<String>,
    pub serving_size_grams: Option<f64>,
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
    pub fiber: Option<f64>,
    pub sugar: Option<f64>,
    pub sodium: Option<f64>,
    pub saturated_fat: Option<f64>,
    pub trans_fat: Option<f64>,
    pub cholesterol: Option<f64>,
    pub potassium: Option<f64>,
    pub vitamin_a: Option<f64>,
    pub vitamin_c: Option<f64>,
    pub calcium: Option<f64>,
    pub iron: Option<f64>,
    pub glycemic_index: Option<f64>,
    pub glycemic_load: Option<f64>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    pub health_score: Option<f64>,
    pub health_notes: Option<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
    pub confidence: Option<f64>,
}

impl AnalysisResult {
    /// Derives `glycemicLoad` (= index x carb grams / 100) when the model
    /// left it out.
    pub fn fill_derived(&mut self) {
        if self.glycemic_load.is_none() {
            if let Some(gi) = self.glycemic_index {
                self.glycemic_load = Some(gi * self.carbohydrates / 100.0);
            }
        }
    }

    /// Rejects replies that parsed as JSON but carry out-of-range numbers.
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, value) in [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbohydrates", self.carbohydrates),
            ("fat", self.fat),
        ] {
            anyhow::ensure!(
                value.is_finite() && value >= 0.0,
                "{name} must be a non-negative number, got {value}"
            );
        }
        for (name, value) in [
            ("fiber", self.fiber),
            ("sugar", self.sugar),
            ("sodium", self.sodium),
        ] {
            if let Some(v) = value {
                anyhow::ensure!(
                    v.is_finite() && v >= 0.0,
                    "{name} must be a non-negative number, got {v}"
                );
            }
        }
        if let Some(score) = self.health_score {
            anyhow::ensure!(
                (0.0..=10.0).contains(&score),
                "healthScore must be within 0-10, got {score}"
            );
        }
        if let Some(gi) = self.glycemic_index {
            anyhow::ensure!(
                (0.0..=100.0).contains(&gi),
                "glycemicIndex must be within 0-100, got {gi}"
            );
        }
        if let Some(confidence) = self.confidence {
            anyhow::ensure!(
                (0.0..=1.0).contains(&confidence),
                "confidence must be within 0-1, got {confidence}"
            );
        }
        Ok(())
    }
}
