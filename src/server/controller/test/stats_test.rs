use super::*;

/// Tests that message totals include announcements.
///
/// Expected: totalPayouts 1, totalMessages 2
#[tokio::test]
async fn counts_history_rows() {
    let mut test = TestBuilder::new().with_history_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let publisher = Arc::new(RecordingPublisher::new());
    let state = app_state(db, &publisher);
    authenticate(session).await;

    factory::create_payout(db).await.unwrap();
    factory::create_custom_message(db, "hello").await.unwrap();
    factory::create_announcement(db, "news").await.unwrap();

    let stats = current_stats(&state, session).await;

    assert_eq!(stats.total_payouts, 1);
    assert_eq!(stats.total_messages, 2);
}

#[tokio::test]
async fn stats_require_login() {
    let mut test = TestBuilder::new().with_history_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let publisher = Arc::new(RecordingPublisher::new());
    let state = app_state(db, &publisher);

    let response = stats::get_stats(State(state), session.clone())
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
