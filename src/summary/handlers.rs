use axum::{extract::State, routing::post, Json, Router};
use time::{format_description::FormatItem, macros::format_description, Date, OffsetDateTime, UtcOffset};
use tracing::instrument;

use crate::auth::AuthUser;
use crate::error::{success, ApiError, ApiSuccess};
use crate::profiles;
use crate::state::AppState;

use super::dto::{DailySummary, DailySummaryRequest};
use super::{repo, services};

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

pub fn router() -> Router<AppState> {
    Router::new().route("/summary/daily", post(get_daily_summary))
}

#[instrument(skip(state))]
pub async fn get_daily_summary(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<DailySummaryRequest>,
) -> Result<Json<ApiSuccess<DailySummary>>, ApiError> {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    let date = match body.date.as_deref().filter(|s| !s.is_empty()) {
        Some(s) => Date::parse(s, DATE_FORMAT)
            .map_err(|_| ApiError::InvalidArgument("date must be formatted YYYY-MM-DD".into()))?,
        None => OffsetDateTime::now_utc().to_offset(offset).date(),
    };
    let internal = |e: anyhow::Error| ApiError::Internal(format!("failed to get summary: {e}"));

    let (start, end) = services::day_bounds(date, offset);
    let food_logs = repo::list_logs_between(&state.db, user_id, start, end)
        .await
        .map_err(internal)?;

    let profile = profiles::repo::fetch_profile(&state.db, user_id)
        .await
        .map_err(internal)?;

    let totals = services::sum_logs(&food_logs);
    let goals = services::goals_from_profile(profile.as_ref());
    let remaining = services::remaining(goals, &totals);
    let progress = services::progress(goals, &totals);

    Ok(success(DailySummary {
        date: date.format(DATE_FORMAT).map_err(|e| internal(e.into()))?,
        food_logs,
        totals,
        goals,
        remaining,
        progress,
    }))
}
