use axum::{
    body::{to_bytes, Body},
    extract::{rejection::JsonRejection, FromRequest, Path, Query, State},
    http::{header::CONTENT_TYPE, Request, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DatabaseConnection;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        auth::{AuthStatusDto, LoginDto},
        message::{CreateAnnouncementDto, CreateCustomMessageDto, MessageHistoryDto, MessageSentDto},
        payout::{CreatePayoutDto, PayoutDto, PayoutHistoryDto, PayoutSentDto},
        stats::StatsDto,
    },
    server::{
        controller::{auth, health, history, message, payout, stats},
        middleware::session::AuthSession,
        service::notification::{builder::Branding, mock::RecordingPublisher},
        state::AppState,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod payout_test;
mod stats_test;

const ADMIN_PASSWORD: &str = "correct horse battery staple";

fn app_state(db: &DatabaseConnection, publisher: &Arc<RecordingPublisher>) -> AppState {
    AppState::new(
        db.clone(),
        publisher.clone(),
        Branding::new("Payout Bot", None),
        ADMIN_PASSWORD.to_string(),
    )
}

/// Marks the session as logged in without going through the login handler.
async fn authenticate(session: &Session) {
    AuthSession::new(session).set_authenticated().await.unwrap();
}

async fn body_json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Runs the JSON extractor over a raw request body, as the router would.
async fn json_body<T: DeserializeOwned>(
    content_type: &str,
    body: &'static str,
) -> Result<Json<T>, JsonRejection> {
    let request = Request::builder()
        .method("POST")
        .header(CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap();

    Json::<T>::from_request(request, &()).await
}

async fn current_stats(state: &AppState, session: &Session) -> StatsDto {
    let response = stats::get_stats(State(state.clone()), session.clone())
        .await
        .into_response();
    body_json(response).await
}

fn payout_dto(transaction_id: &str) -> CreatePayoutDto {
    CreatePayoutDto {
        recipient_name: "Alice".to_string(),
        amount: "$100".to_string(),
        transaction_id: transaction_id.to_string(),
        transaction_link: None,
        notes: None,
    }
}
