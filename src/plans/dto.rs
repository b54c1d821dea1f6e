use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMealPlanRequest {
    pub target_calories: Option<f64>,
    pub target_protein: Option<f64>,
    pub target_carbs: Option<f64>,
    pub target_fat: Option<f64>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    #[serde(default)]
    pub preferences: Vec<String>,
    #[serde(default = "default_days_count")]
    pub days_count: u32,
}

fn default_days_count() -> u32 {
    7
}

impl Default for GenerateMealPlanRequest {
    fn default() -> Self {
        Self {
            target_calories: None,
            target_protein: None,
            target_carbs: None,
            target_fat: None,
            dietary_restrictions: Vec::new(),
            preferences: Vec::new(),
            days_count: default_days_count(),
        }
    }
}
