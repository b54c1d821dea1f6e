use crate::profiles::UserProfile;

use super::dto::HistoryEntry;

/// Only the tail of the conversation is forwarded to the provider.
pub const HISTORY_LIMIT: usize = 6;

pub fn truncate_history(history: &[HistoryEntry]) -> &[HistoryEntry] {
    let skip = history.len().saturating_sub(HISTORY_LIMIT);
    &history[skip..]
}

/// Compact natural-language profile block embedded in the system prompt.
pub fn render_profile(profile: &UserProfile) -> String {
    let name = profile.display_name.as_deref().unwrap_or("Not specified");
    let age = profile
        .age
        .map(|a| a.to_string())
        .unwrap_or_else(|| "Not specified".into());
    let body = match (profile.height_cm, profile.weight_kg) {
        (Some(h), Some(w)) => format!("{h} cm, {w} kg"),
        (Some(h), None) => format!("{h} cm"),
        (None, Some(w)) => format!("{w} kg"),
        (None, None) => "Not specified".into(),
    };
    let goal = profile.goal.as_deref().unwrap_or("Not specified");
    let targets = format!(
        "{} kcal, {}g protein, {}g carbs, {}g fat",
        fmt_target(profile.daily_calorie_target),
        fmt_target(profile.daily_protein_target),
        fmt_target(profile.daily_carbs_target),
        fmt_target(profile.daily_fat_target),
    );
    let conditions = join_or_none(&profile.health_conditions);
    let preferences = join_or_none(&profile.dietary_preferences);
    let activity = profile.activity_level.as_deref().unwrap_or("Not specified");

    format!(
        "User Profile:\n\
         - Name: {name}\n\
         - Age: {age}\n\
         - Height/Weight: {body}\n\
         - Goal: {goal}\n\
         - Daily targets: {targets}\n\
         - Health conditions: {conditions}\n\
         - Dietary preferences: {preferences}\n\
         - Activity level: {activity}"
    )
}

fn fmt_target(v: Option<f64>) -> String {
    v.map(|v| v.to_string()).unwrap_or_else(|| "?".into())
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}

pub fn system_prompt(profile: Option<&UserProfile>) -> String {
    let context = profile.map(render_profile).unwrap_or_default();
    format!(
        "You are Snapie, a friendly and knowledgeable AI nutrition assistant. You help users with:\n\
         - Nutrition advice and education\n\
         - Diet planning and meal suggestions\n\
         - Understanding food labels and ingredients\n\
         - Healthy eating habits\n\
         - Answering food-related questions\n\
         \n\
         {context}\n\
         \n\
         Be conversational, supportive, and provide actionable advice. Keep responses concise but helpful.\n\
         If asked about specific medical conditions, recommend consulting a healthcare professional."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::Role;

    fn entry(i: usize) -> HistoryEntry {
        HistoryEntry {
            role: if i % 2 == 0 { Role::User } else { Role::Assistant },
            content: format!("message {i}"),
        }
    }

    #[test]
    fn short_history_is_untouched() {
        let history: Vec<_> = (0..4).map(entry).collect();
        assert_eq!(truncate_history(&history).len(), 4);
    }

    #[test]
    fn long_history_keeps_the_most_recent_six() {
        let history: Vec<_> = (0..10).map(entry).collect();
        let kept = truncate_history(&history);
        assert_eq!(kept.len(), HISTORY_LIMIT);
        assert_eq!(kept.first().unwrap().content, "message 4");
        assert_eq!(kept.last().unwrap().content, "message 9");
    }

    #[test]
    fn profile_block_renders_present_fields() {
        let profile = UserProfile {
            display_name: Some("Sam".into()),
            age: Some(31),
            height_cm: Some(175.0),
            weight_kg: Some(70.0),
            goal: Some("lose weight".into()),
            daily_calorie_target: Some(1800.0),
            health_conditions: vec!["type 2 diabetes".into()],
            dietary_preferences: vec!["vegetarian".into()],
            ..Default::default()
        };
        let block = render_profile(&profile);
        assert!(block.contains("Name: Sam"));
        assert!(block.contains("175 cm, 70 kg"));
        assert!(block.contains("1800 kcal"));
        assert!(block.contains("type 2 diabetes"));
        assert!(block.contains("vegetarian"));
    }

    #[test]
    fn missing_fields_fall_back_to_not_specified() {
        let block = render_profile(&UserProfile::default());
        assert!(block.contains("Name: Not specified"));
        assert!(block.contains("Health conditions: None"));
        assert!(block.contains("Activity level: Not specified"));
    }

    #[test]
    fn system_prompt_embeds_profile_and_disclaimer() {
        let profile = UserProfile {
            goal: Some("bulk".into()),
            ..Default::default()
        };
        let prompt = system_prompt(Some(&profile));
        assert!(prompt.contains("You are Snapie"));
        assert!(prompt.contains("Goal: bulk"));
        assert!(prompt.contains("healthcare professional"));

        let bare = system_prompt(None);
        assert!(!bare.contains("User Profile:"));
    }
}
