use super::*;
use crate::server::data::payout::PayoutRepository;

async fn post_payout(state: &AppState, session: &Session, dto: CreatePayoutDto) -> Response {
    post_payout_body(state, session, Ok(Json(dto))).await
}

async fn post_payout_body(
    state: &AppState,
    session: &Session,
    body: Result<Json<CreatePayoutDto>, JsonRejection>,
) -> Response {
    payout::send_payout(State(state.clone()), session.clone(), body)
        .await
        .into_response()
}

/// Tests that an unauthenticated request changes nothing.
///
/// Expected: 401, nothing published, nothing stored
#[tokio::test]
async fn rejects_unauthenticated_payout() {
    let mut test = TestBuilder::new().with_history_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let publisher = Arc::new(RecordingPublisher::new());
    let state = app_state(db, &publisher);

    let response = post_payout(&state, session, payout_dto("abc123")).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: ErrorDto = body_json(response).await;
    assert_eq!(body.error, "Unauthorized. Please login first.");
    assert!(publisher.published().is_empty());
    assert_eq!(PayoutRepository::new(db).count().await.unwrap(), 0);
}

/// Tests validation of required fields.
///
/// Expected: 400 for a missing amount and for a whitespace-only recipient; nothing
/// published or stored
#[tokio::test]
async fn rejects_missing_required_fields() {
    let mut test = TestBuilder::new().with_history_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let publisher = Arc::new(RecordingPublisher::new());
    let state = app_state(db, &publisher);
    authenticate(session).await;

    let mut missing_amount = payout_dto("abc123");
    missing_amount.amount = String::new();
    let mut blank_recipient = payout_dto("abc123");
    blank_recipient.recipient_name = "   ".to_string();

    for dto in [missing_amount, blank_recipient] {
        let response = post_payout(&state, session, dto).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorDto = body_json(response).await;
        assert_eq!(
            body.error,
            "Missing required fields: recipientName, amount, transactionId"
        );
    }

    assert!(publisher.published().is_empty());
    assert_eq!(PayoutRepository::new(db).count().await.unwrap(), 0);
}

/// Tests the successful payout flow with a long transaction ID.
///
/// Expected: 200 with payoutId; the stored ID is the full 21-character value
#[tokio::test]
async fn announces_and_records_payout() {
    let mut test = TestBuilder::new().with_history_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let publisher = Arc::new(RecordingPublisher::new());
    let state = app_state(db, &publisher);
    authenticate(session).await;

    let mut dto = payout_dto("abc123def456ghi789jkl");
    dto.notes = Some("".to_string());

    let response = post_payout(&state, session, dto).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: PayoutSentDto = body_json(response).await;
    assert!(body.success);
    assert_eq!(body.message, "Payout message sent successfully to Discord!");
    assert!(body.payout_id.is_some());
    assert!(body.warning.is_none());

    assert_eq!(publisher.published().len(), 1);

    let stored = PayoutRepository::new(db)
        .find_by_transaction_id("abc123def456ghi789jkl")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(Some(stored.id), body.payout_id);
    assert_eq!(stored.notes, None);
    assert_eq!(current_stats(&state, session).await.total_payouts, 1);
}

/// Tests that a publish failure is terminal.
///
/// Expected: 500 with error and details; stats unchanged
#[tokio::test]
async fn publish_failure_returns_500_and_records_nothing() {
    let mut test = TestBuilder::new().with_history_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let publisher = Arc::new(RecordingPublisher::failing("Missing Permissions"));
    let state = app_state(db, &publisher);
    authenticate(session).await;

    let before = current_stats(&state, session).await;

    let response = post_payout(&state, session, payout_dto("abc123")).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorDto = body_json(response).await;
    assert_eq!(
        body.error,
        "Failed to send message to Discord. Please check bot permissions."
    );
    assert!(body.details.unwrap().contains("Missing Permissions"));

    assert_eq!(current_stats(&state, session).await, before);
}

/// Tests the partial-success contract when history cannot be written.
///
/// Expected: 200 with a warning and no payoutId
#[tokio::test]
async fn history_failure_returns_warning() {
    // No payout table, so the insert after publishing fails.
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Message)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let publisher = Arc::new(RecordingPublisher::new());
    let state = app_state(db, &publisher);
    authenticate(session).await;

    let response = post_payout(&state, session, payout_dto("abc123")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: PayoutSentDto = body_json(response).await;
    assert!(body.success);
    assert_eq!(body.message, "Payout sent to Discord (database save failed)");
    assert_eq!(body.warning.as_deref(), Some("History may not be saved"));
    assert!(body.payout_id.is_none());
    assert_eq!(publisher.published().len(), 1);
}

/// Tests that an explicit `null` in a required field is treated like a missing field.
///
/// Expected: 400 with the missing-fields message; nothing published
#[tokio::test]
async fn null_required_field_is_missing() {
    let mut test = TestBuilder::new().with_history_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let publisher = Arc::new(RecordingPublisher::new());
    let state = app_state(db, &publisher);
    authenticate(session).await;

    let body = json_body::<CreatePayoutDto>(
        "application/json",
        r#"{"recipientName":null,"amount":"$100","transactionId":"abc123"}"#,
    )
    .await;
    assert!(body.is_ok());

    let response = post_payout_body(&state, session, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = body_json(response).await;
    assert_eq!(
        body.error,
        "Missing required fields: recipientName, amount, transactionId"
    );
    assert!(publisher.published().is_empty());
}

/// Tests that the login check runs before the body is inspected.
///
/// Expected: 401 JSON for a malformed body sent without a session
#[tokio::test]
async fn unauthenticated_malformed_body_is_unauthorized() {
    let mut test = TestBuilder::new().with_history_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let publisher = Arc::new(RecordingPublisher::new());
    let state = app_state(db, &publisher);

    let body = json_body::<CreatePayoutDto>("text/plain", "recipient=Alice").await;
    assert!(body.is_err());

    let response = post_payout_body(&state, session, body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: ErrorDto = body_json(response).await;
    assert_eq!(body.error, "Unauthorized. Please login first.");
}

/// Tests that a body the JSON extractor rejects still gets a JSON error.
///
/// Expected: 400 with an `error` field for broken JSON and for a mistyped field
#[tokio::test]
async fn malformed_body_is_bad_request() {
    let mut test = TestBuilder::new().with_history_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let publisher = Arc::new(RecordingPublisher::new());
    let state = app_state(db, &publisher);
    authenticate(session).await;

    for raw in [r#"{"recipientName":"#, r#"{"recipientName":42}"#] {
        let body = json_body::<CreatePayoutDto>("application/json", raw).await;

        let response = post_payout_body(&state, session, body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorDto = body_json(response).await;
        assert!(body.error.starts_with("Invalid request body"));
    }

    assert!(publisher.published().is_empty());
}
