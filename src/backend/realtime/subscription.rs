/**
 * Note Subscription Handler
 *
 * Server-Sent Events handler for GET /subscriptions/notes. Each connection
 * registers one receiver with the fan-out hub and forwards every delivered
 * event as one SSE event, unwrapping the envelope to the note payload (or
 * null when the envelope is malformed).
 *
 * # Connection Management
 *
 * - Connections are kept alive with the SSE keep-alive mechanism
 * - Closing the connection drops the stream and its receiver, which
 *   deregisters the channel from the hub promptly
 * - A receiver that lags skips events and keeps going; it never stalls
 *   the publisher or other subscribers
 */
use crate::backend::realtime::hub::NoteHub;
use crate::shared::event::NOTE_CREATED;
use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures_util::stream;
use tokio::sync::broadcast::error::RecvError;

/// Handle a note-created subscription (GET /subscriptions/notes)
///
/// # Returns
///
/// An SSE stream yielding one `note_created` event per note creation,
/// starting from the moment the connection was registered (no backlog).
///
/// # Example Response
///
/// ```http
/// HTTP/1.1 200 OK
/// Content-Type: text/event-stream
///
/// event: note_created
/// data: {"id":"...","title":"Title1","content":"Body1","user":{...}}
/// ```
pub async fn handle_notes_subscription(
    State(hub): State<NoteHub>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, axum::Error>>> {
    tracing::info!("subscription opened");

    let receiver = hub.subscribe(NOTE_CREATED);

    let stream = stream::unfold(receiver, move |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(event) => {
                    // Unwrap the envelope; a malformed payload is forwarded
                    // as null rather than dropping the connection.
                    let note = event.note();
                    if note.is_none() {
                        tracing::warn!("malformed event payload on '{}'", event.topic);
                    }

                    let data = match serde_json::to_string(&note) {
                        Ok(data) => data,
                        Err(e) => {
                            tracing::error!("failed to serialize event payload: {:?}", e);
                            continue;
                        }
                    };

                    let sse_event = Event::default().event(NOTE_CREATED).data(data);
                    return Some((Ok(sse_event), rx));
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("subscriber lagged, skipped {} events", skipped);
                    continue;
                }
                Err(RecvError::Closed) => {
                    tracing::info!("fan-out channel closed, ending stream");
                    return None;
                }
            }
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
