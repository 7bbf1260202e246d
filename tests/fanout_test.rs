//! Fan-out pipeline integration tests
//!
//! Exercise the full subscription pipeline - hub, SSE handler, client
//! transport, envelope unwrapping - without a database: the server runs
//! with storage unconfigured and events are published straight into the
//! hub handle kept by the test.

mod common;

use collab_notes::backend::server::state::AppState;
use collab_notes::client::{ApiClient, ClientConfig, NoteSubscription};
use collab_notes::shared::event::{NoteEvent, NOTE_CREATED};
use collab_notes::shared::types::{Note, UserSummary};
use tokio::time::{timeout, Duration};

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

fn sample_note(title: &str) -> Note {
    Note {
        id: uuid::Uuid::new_v4().to_string(),
        title: title.to_string(),
        content: "Body1".to_string(),
        user: UserSummary {
            id: uuid::Uuid::new_v4().to_string(),
            email: "a@x.com".to_string(),
            name: None,
        },
    }
}

#[tokio::test]
async fn test_subscriber_receives_published_note() {
    let state = AppState::new(None);
    let hub = state.note_hub.clone();
    let base_url = common::spawn_server(state).await;
    let config = ClientConfig::with_server_url(&base_url);

    let mut subscription = NoteSubscription::connect(&config, None).await.unwrap();

    let note = sample_note("Title1");
    hub.publish(NOTE_CREATED, NoteEvent::note_created(&note));

    let delivered = timeout(RECV_TIMEOUT, subscription.next_event())
        .await
        .expect("delivery within timeout")
        .expect("stream still open");
    assert_eq!(delivered, Some(note));
}

#[tokio::test]
async fn test_every_subscriber_receives_the_event() {
    let state = AppState::new(None);
    let hub = state.note_hub.clone();
    let base_url = common::spawn_server(state).await;
    let config = ClientConfig::with_server_url(&base_url);

    let mut first = NoteSubscription::connect(&config, None).await.unwrap();
    let mut second = NoteSubscription::connect(&config, None).await.unwrap();

    let note = sample_note("Title1");
    hub.publish(NOTE_CREATED, NoteEvent::note_created(&note));

    for subscription in [&mut first, &mut second] {
        let delivered = timeout(RECV_TIMEOUT, subscription.next_event())
            .await
            .expect("delivery within timeout")
            .expect("stream still open");
        assert_eq!(delivered, Some(note.clone()));
    }
}

#[tokio::test]
async fn test_late_subscriber_misses_prior_events() {
    let state = AppState::new(None);
    let hub = state.note_hub.clone();
    let base_url = common::spawn_server(state).await;
    let config = ClientConfig::with_server_url(&base_url);

    // Published before anyone is connected: delivered to no one, and
    // never replayed.
    hub.publish(NOTE_CREATED, NoteEvent::note_created(&sample_note("before")));

    let mut subscription = NoteSubscription::connect(&config, None).await.unwrap();

    let after = sample_note("after");
    hub.publish(NOTE_CREATED, NoteEvent::note_created(&after));

    let delivered = timeout(RECV_TIMEOUT, subscription.next_event())
        .await
        .expect("delivery within timeout")
        .expect("stream still open");
    assert_eq!(delivered, Some(after), "first delivery must be the post-subscribe event");
}

#[tokio::test]
async fn test_malformed_envelope_is_delivered_as_null() {
    let state = AppState::new(None);
    let hub = state.note_hub.clone();
    let base_url = common::spawn_server(state).await;
    let config = ClientConfig::with_server_url(&base_url);

    let mut subscription = NoteSubscription::connect(&config, None).await.unwrap();

    hub.publish(
        NOTE_CREATED,
        NoteEvent::new(NOTE_CREATED, serde_json::json!({"bogus": true})),
    );

    let delivered = timeout(RECV_TIMEOUT, subscription.next_event())
        .await
        .expect("delivery within timeout")
        .expect("stream still open");
    assert_eq!(delivered, None);
}

#[tokio::test]
async fn test_storage_backed_routes_answer_503_without_database() {
    let state = AppState::new(None);
    let base_url = common::spawn_server(state).await;
    let api = ApiClient::new(ClientConfig::with_server_url(&base_url));

    let error = api.notes().await.unwrap_err();
    match error {
        collab_notes::client::ClientError::Api { status, .. } => assert_eq!(status, 503),
        other => panic!("expected an API error, got {:?}", other),
    }
}
