// Prompt contract for the analyzer. The JSON shape below is what the typed
// `AnalysisResult` expects back; numeric ranges are re-checked after parsing.

const JSON_CONTRACT: &str = r#"Return your response as a valid JSON object with this exact structure:
{
  "foodName": "Name of the food/dish",
  "description": "Brief description of the food",
  "servingSize": "Estimated serving size (e.g., '1 cup', '150g')",
  "servingSizeGrams": 150,
  "calories": 250,
  "protein": 12.5,
  "carbohydrates": 30.0,
  "fat": 8.5,
  "fiber": 3.0,
  "sugar": 5.0,
  "sodium": 400,
  "saturatedFat": 2.5,
  "transFat": 0,
  "cholesterol": 25,
  "potassium": 300,
  "vitaminA": 10,
  "vitaminC": 15,
  "calcium": 8,
  "iron": 12,
  "glycemicIndex": 55,
  "glycemicLoad": 10,
  "ingredients": ["ingredient1", "ingredient2"],
  "healthScore": 7.5,
  "healthNotes": "Brief health assessment",
  "warnings": ["Any dietary warnings or allergens"],
  "confidence": 0.85
}

All numeric values should be numbers (not strings). Percentages for vitamins/minerals are daily value percentages.
glycemicIndex should be a number from 0-100 indicating how quickly the food raises blood sugar.
glycemicLoad takes into account portion size (low: 0-10, medium: 11-19, high: 20+)."#;

pub fn text_system_prompt() -> String {
    format!(
        "You are an expert nutritionist and food analyst. Analyze the food description and provide detailed nutritional information.\n\n{JSON_CONTRACT}\nBe as accurate as possible with nutritional estimates based on typical serving sizes."
    )
}

pub fn image_system_prompt() -> String {
    format!(
        "You are an expert nutritionist and food analyst. Analyze the food in the image and provide detailed nutritional information.\n\n{JSON_CONTRACT}\nIf you cannot identify the food, still return the JSON structure with reasonable estimates and lower confidence."
    )
}

pub fn text_user_prompt(context: &str) -> String {
    format!("Analyze this food and provide nutritional information: {context}")
}

pub fn image_user_prompt(context: Option<&str>) -> String {
    match context {
        Some(ctx) => format!("Analyze this food. Additional context: {ctx}"),
        None => "Analyze this food and provide nutritional information.".to_string(),
    }
}
