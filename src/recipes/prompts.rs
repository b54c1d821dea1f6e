use super::dto::GenerateRecipeRequest;

pub const SYSTEM_PROMPT: &str = r#"You are an expert chef and nutritionist. Create detailed recipes with nutritional information.

Return as valid JSON:
{
  "name": "Recipe Name",
  "description": "Brief description",
  "cuisine": "Italian",
  "difficulty": "easy|medium|hard",
  "prepTime": 15,
  "cookTime": 30,
  "totalTime": 45,
  "servings": 4,
  "caloriesPerServing": 350,
  "nutritionPerServing": {
    "calories": 350,
    "protein": 25,
    "carbs": 30,
    "fat": 15,
    "fiber": 5,
    "sugar": 8,
    "sodium": 500
  },
  "ingredients": [
    {"item": "ingredient", "amount": "1 cup", "notes": "optional notes"}
  ],
  "instructions": [
    {"step": 1, "instruction": "Step description", "duration": 5}
  ],
  "tips": ["Helpful tip"],
  "substitutions": [
    {"original": "ingredient", "substitute": "alternative", "notes": "why"}
  ],
  "storage": "Storage instructions",
  "tags": ["healthy", "quick", "high-protein"]
}"#;

pub fn user_prompt(req: &GenerateRecipeRequest) -> String {
    format!(
        "Create a recipe for: {}\n\
         - Target calories per serving: {}\n\
         - Servings: {}\n\
         - Cuisine: {}\n\
         - Difficulty: {}\n\
         - Dietary restrictions: {}",
        req.recipe_name.as_deref().unwrap_or("a healthy meal"),
        req.target_calories.unwrap_or(400.0),
        req.servings,
        req.cuisine.as_deref().unwrap_or("Any"),
        req.difficulty.as_deref().unwrap_or("medium"),
        if req.dietary_restrictions.is_empty() {
            "None".to_string()
        } else {
            req.dietary_restrictions.join(", ")
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_every_line() {
        let prompt = user_prompt(&GenerateRecipeRequest::default());
        assert!(prompt.contains("a healthy meal"));
        assert!(prompt.contains("Target calories per serving: 400"));
        assert!(prompt.contains("Servings: 4"));
        assert!(prompt.contains("Cuisine: Any"));
        assert!(prompt.contains("Difficulty: medium"));
        assert!(prompt.contains("Dietary restrictions: None"));
    }

    #[test]
    fn explicit_fields_appear_verbatim() {
        let req = GenerateRecipeRequest {
            recipe_name: Some("shakshuka".into()),
            cuisine: Some("Middle Eastern".into()),
            dietary_restrictions: vec!["vegetarian".into()],
            ..Default::default()
        };
        let prompt = user_prompt(&req);
        assert!(prompt.contains("Create a recipe for: shakshuka"));
        assert!(prompt.contains("Middle Eastern"));
        assert!(prompt.contains("vegetarian"));
    }
}
