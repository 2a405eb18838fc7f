use axum::{routing::any, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, health, history, message, payout, stats},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "payoutboard",
    description = "Admin API for posting payout notifications to Discord"
))]
struct ApiDoc;

/// Builds the API router with OpenAPI docs served at `/api/docs`.
///
/// Unknown paths under `/api` answer with a JSON 404; everything else is left to
/// the web client router.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::auth_status))
        .routes(routes!(payout::send_payout))
        .routes(routes!(message::send_custom_message))
        .routes(routes!(message::send_announcement))
        .routes(routes!(history::get_payout_history))
        .routes(routes!(history::get_payout_by_transaction_id))
        .routes(routes!(history::get_message_history))
        .routes(routes!(stats::get_stats))
        .routes(routes!(health::health))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
        .route("/api/{*path}", any(health::not_found))
}
