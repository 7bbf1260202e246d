/**
 * Note Fan-out Hub
 *
 * A topic-keyed registry of broadcast channels. The hub is created at
 * server start, owned by `AppState`, and passed by reference wherever
 * publishing or subscribing happens.
 *
 * # Fan-out
 *
 * Each topic maps to one `tokio::sync::broadcast` channel. Every
 * subscriber holds a receiver; publishing sends one copy of the event to
 * each of them. Publish is fire-and-forget: a topic with no subscribers,
 * a receiver that lags, or a receiver that was dropped never fails or
 * blocks the publish call.
 *
 * # Registry Lifecycle
 *
 * Registry mutation is mutex-guarded and safe against concurrent publish.
 * Dropping a receiver deregisters it from its channel; senders whose
 * receivers are all gone are pruned by `cleanup_idle_topics`.
 */
use crate::shared::event::NoteEvent;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::broadcast;

/// Capacity of each topic's broadcast channel. A subscriber further than
/// this behind the publisher starts skipping events instead of exerting
/// backpressure.
const CHANNEL_CAPACITY: usize = 1000;

/// Topic-keyed fan-out registry.
///
/// Cloning is cheap and shares the same registry.
#[derive(Clone)]
pub struct NoteHub {
    channels: Arc<Mutex<HashMap<String, broadcast::Sender<NoteEvent>>>>,
}

impl NoteHub {
    pub fn new() -> Self {
        Self {
            channels: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Get or create the broadcast sender for a topic.
    fn sender(&self, topic: &str) -> broadcast::Sender<NoteEvent> {
        let mut channels = self.channels.lock().unwrap();
        channels
            .entry(topic.to_string())
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
            .clone()
    }

    /// Register a new subscriber on a topic.
    ///
    /// The returned receiver yields every event published after this call;
    /// there is no backlog or replay. Dropping the receiver deregisters it.
    pub fn subscribe(&self, topic: &str) -> broadcast::Receiver<NoteEvent> {
        self.sender(topic).subscribe()
    }

    /// Publish an event to every current subscriber of a topic.
    ///
    /// # Returns
    ///
    /// Number of subscribers the event was delivered to (0 if none).
    pub fn publish(&self, topic: &str, event: NoteEvent) -> usize {
        let sender = {
            let channels = self.channels.lock().unwrap();
            channels.get(topic).cloned()
        };

        match sender {
            Some(tx) => match tx.send(event) {
                Ok(subscriber_count) => {
                    tracing::debug!(
                        "published to {} subscribers on '{}'",
                        subscriber_count,
                        topic
                    );
                    subscriber_count
                }
                Err(_) => {
                    // All receivers dropped since the channel was created.
                    tracing::debug!("no subscribers on '{}'", topic);
                    0
                }
            },
            None => {
                tracing::debug!("no channel for '{}'", topic);
                0
            }
        }
    }

    /// Current subscriber count for a topic.
    pub fn subscriber_count(&self, topic: &str) -> usize {
        let channels = self.channels.lock().unwrap();
        channels
            .get(topic)
            .map(|tx| tx.receiver_count())
            .unwrap_or(0)
    }

    /// Drop topics whose subscribers are all gone.
    pub fn cleanup_idle_topics(&self) {
        let mut channels = self.channels.lock().unwrap();
        channels.retain(|_, tx| tx.receiver_count() > 0);
    }
}

impl Default for NoteHub {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::event::NOTE_CREATED;
    use crate::shared::types::{Note, UserSummary};

    fn sample_event(title: &str) -> NoteEvent {
        NoteEvent::note_created(&Note {
            id: "n1".to_string(),
            title: title.to_string(),
            content: "Body1".to_string(),
            user: UserSummary {
                id: "u1".to_string(),
                email: "a@x.com".to_string(),
                name: None,
            },
        })
    }

    #[tokio::test]
    async fn test_publish_reaches_every_subscriber() {
        let hub = NoteHub::new();
        let mut first = hub.subscribe(NOTE_CREATED);
        let mut second = hub.subscribe(NOTE_CREATED);

        let delivered = hub.publish(NOTE_CREATED, sample_event("Title1"));
        assert_eq!(delivered, 2);

        assert_eq!(first.recv().await.unwrap().note().unwrap().title, "Title1");
        assert_eq!(second.recv().await.unwrap().note().unwrap().title, "Title1");
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_is_not_an_error() {
        let hub = NoteHub::new();
        assert_eq!(hub.publish(NOTE_CREATED, sample_event("Title1")), 0);
    }

    #[tokio::test]
    async fn test_late_subscriber_sees_no_backlog() {
        let hub = NoteHub::new();
        // Keep one receiver alive so the channel exists and the publish
        // actually delivers somewhere.
        let _early = hub.subscribe(NOTE_CREATED);
        hub.publish(NOTE_CREATED, sample_event("before"));

        let mut late = hub.subscribe(NOTE_CREATED);
        assert!(matches!(
            late.try_recv(),
            Err(broadcast::error::TryRecvError::Empty)
        ));

        hub.publish(NOTE_CREATED, sample_event("after"));
        assert_eq!(late.recv().await.unwrap().note().unwrap().title, "after");
    }

    #[tokio::test]
    async fn test_stalled_subscriber_does_not_block_publish() {
        let hub = NoteHub::new();
        // This receiver never consumes anything.
        let _stalled = hub.subscribe(NOTE_CREATED);
        let mut active = hub.subscribe(NOTE_CREATED);

        for i in 0..10 {
            let delivered = hub.publish(NOTE_CREATED, sample_event(&format!("t{}", i)));
            assert_eq!(delivered, 2);
        }
        assert_eq!(active.recv().await.unwrap().note().unwrap().title, "t0");
    }

    #[tokio::test]
    async fn test_dropped_receiver_deregisters() {
        let hub = NoteHub::new();
        let receiver = hub.subscribe(NOTE_CREATED);
        assert_eq!(hub.subscriber_count(NOTE_CREATED), 1);

        drop(receiver);
        assert_eq!(hub.subscriber_count(NOTE_CREATED), 0);

        hub.cleanup_idle_topics();
        assert_eq!(hub.publish(NOTE_CREATED, sample_event("Title1")), 0);
    }

    #[tokio::test]
    async fn test_concurrent_publish_and_subscribe() {
        let hub = NoteHub::new();
        let mut receiver = hub.subscribe(NOTE_CREATED);

        let publishers: Vec<_> = (0..8)
            .map(|i| {
                let hub = hub.clone();
                tokio::spawn(async move {
                    hub.publish(NOTE_CREATED, sample_event(&format!("t{}", i)));
                })
            })
            .collect();
        for handle in publishers {
            handle.await.unwrap();
        }

        let mut received = 0;
        while receiver.try_recv().is_ok() {
            received += 1;
        }
        assert_eq!(received, 8);
    }
}
