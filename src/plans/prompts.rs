use super::dto::GenerateMealPlanRequest;

pub fn system_prompt(days_count: u32) -> String {
    format!(
        r#"You are an expert nutritionist creating personalized meal plans.

Create a {days_count}-day meal plan based on the user's requirements.

Return as valid JSON:
{{
  "planName": "Custom {days_count}-Day Plan",
  "description": "Brief description",
  "days": [
    {{
      "day": 1,
      "dayName": "Monday",
      "meals": [
        {{
          "mealType": "breakfast",
          "name": "Meal name",
          "description": "Brief description",
          "calories": 400,
          "protein": 20,
          "carbs": 45,
          "fat": 15,
          "prepTime": 15,
          "ingredients": ["ingredient1", "ingredient2"],
          "instructions": ["step1", "step2"]
        }}
      ],
      "totalCalories": 2000,
      "totalProtein": 100,
      "totalCarbs": 200,
      "totalFat": 80
    }}
  ],
  "shoppingList": {{
    "proteins": ["item1"],
    "vegetables": ["item2"],
    "grains": ["item3"],
    "dairy": ["item4"],
    "other": ["item5"]
  }},
  "tips": ["Helpful tip 1", "Helpful tip 2"]
}}"#
    )
}

pub fn user_prompt(req: &GenerateMealPlanRequest) -> String {
    format!(
        "Create a meal plan with:\n\
         - Daily calories: {}\n\
         - Protein: {}g\n\
         - Carbs: {}g\n\
         - Fat: {}g\n\
         - Dietary restrictions: {}\n\
         - Preferences: {}\n\
         - Days: {}",
        req.target_calories.unwrap_or(2000.0),
        req.target_protein.unwrap_or(100.0),
        req.target_carbs.unwrap_or(200.0),
        req.target_fat.unwrap_or(70.0),
        join_or_none(&req.dietary_restrictions),
        join_or_none(&req.preferences),
        req.days_count,
    )
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}
