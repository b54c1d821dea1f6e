use time::{Date, OffsetDateTime, Time, UtcOffset};

use crate::profiles::UserProfile;

use super::dto::{FoodLogRow, NutrientGoals, NutrientProgress, NutrientRemaining, NutrientTotals};

/// Folds the day's logs; a missing field contributes zero.
pub fn sum_logs(logs: &[FoodLogRow]) -> NutrientTotals {
    logs.iter().fold(NutrientTotals::default(), |acc, log| NutrientTotals {
        calories: acc.calories + log.calories.unwrap_or_default(),
        protein: acc.protein + log.protein.unwrap_or_default(),
        carbs: acc.carbs + log.carbohydrates.unwrap_or_default(),
        fat: acc.fat + log.fat.unwrap_or_default(),
        fiber: acc.fiber + log.fiber.unwrap_or_default(),
        sugar: acc.sugar + log.sugar.unwrap_or_default(),
    })
}

/// Each goal defaults independently when the profile is missing or sparse.
pub fn goals_from_profile(profile: Option<&UserProfile>) -> NutrientGoals {
    NutrientGoals {
        calories: profile.and_then(|p| p.daily_calorie_target).unwrap_or(2000.0),
        protein: profile.and_then(|p| p.daily_protein_target).unwrap_or(100.0),
        carbs: profile.and_then(|p| p.daily_carbs_target).unwrap_or(250.0),
        fat: profile.and_then(|p| p.daily_fat_target).unwrap_or(70.0),
    }
}

/// May go negative once a goal is exceeded.
pub fn remaining(goals: NutrientGoals, totals: &NutrientTotals) -> NutrientRemaining {
    NutrientRemaining {
        calories: goals.calories - totals.calories,
        protein: goals.protein - totals.protein,
        carbs: goals.carbs - totals.carbs,
        fat: goals.fat - totals.fat,
    }
}

pub fn progress(goals: NutrientGoals, totals: &NutrientTotals) -> NutrientProgress {
    NutrientProgress {
        calories: pct(totals.calories, goals.calories),
        protein: pct(totals.protein, goals.protein),
        carbs: pct(totals.carbs, goals.carbs),
        fat: pct(totals.fat, goals.fat),
    }
}

// A non-positive goal reports 0% rather than dividing by zero.
fn pct(total: f64, goal: f64) -> i64 {
    if goal <= 0.0 {
        0
    } else {
        (total / goal * 100.0).round() as i64
    }
}

/// Inclusive bounds of the calendar day in the given offset.
pub fn day_bounds(date: Date, offset: UtcOffset) -> (OffsetDateTime, OffsetDateTime) {
    let start = date.midnight().assume_offset(offset);
    let end = date.with_time(Time::MAX).assume_offset(offset);
    (start, end)
}
