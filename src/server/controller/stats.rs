use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, stats::StatsDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::stats::StatsService,
        state::AppState,
    },
};

/// Tag for grouping statistics endpoints in OpenAPI documentation
pub static STATS_TAG: &str = "stats";

/// Count recorded payouts and messages.
///
/// `totalMessages` includes announcements.
///
/// # Access Control
/// Requires an authenticated session.
#[utoipa::path(
    get,
    path = "/api/stats",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "History totals", body = StatsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&session).require().await?;

    let stats = StatsService::new(&state.db).get().await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}
