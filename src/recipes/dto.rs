use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRecipeRequest {
    pub recipe_name: Option<String>,
    pub target_calories: Option<f64>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    #[serde(default = "default_servings")]
    pub servings: u32,
    pub cuisine: Option<String>,
    pub difficulty: Option<String>,
}

fn default_servings() -> u32 {
    4
}

impl Default for GenerateRecipeRequest {
    fn default() -> Self {
        Self {
            recipe_name: None,
            target_calories: None,
            dietary_restrictions: Vec::new(),
            servings: default_servings(),
            cuisine: None,
            difficulty: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_defaults_servings_to_four() {
        let req: GenerateRecipeRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.servings, 4);
        assert!(req.recipe_name.is_none());
    }
}
