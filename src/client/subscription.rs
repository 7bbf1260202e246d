/**
 * Subscription Transport
 *
 * The persistent connection for the note-created subscription. Opens one
 * SSE stream against the server and yields `Option<Note>` values: `Some`
 * for each created note, `None` when the server forwarded a malformed
 * envelope as null.
 *
 * # Stream Parsing
 *
 * The byte stream is accumulated into a line buffer and parsed
 * incrementally: `data:` lines carry JSON payloads, comment lines
 * (keep-alives) are skipped, and a partial line at the end of a chunk
 * waits for the next chunk.
 */
use bytes::Bytes;
use futures_util::{Stream, StreamExt};
use std::collections::VecDeque;
use std::pin::Pin;

use crate::client::config::ClientConfig;
use crate::client::error::ClientError;
use crate::shared::types::Note;

type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, reqwest::Error>> + Send>>;

/// An open note-created subscription.
pub struct NoteSubscription {
    stream: ByteStream,
    buffer: String,
    pending: VecDeque<Option<Note>>,
}

impl NoteSubscription {
    /// Open the subscription connection.
    ///
    /// The connection is registered with the server's fan-out hub before
    /// this returns, so every note created afterwards is delivered. Notes
    /// created before the call are never delivered (no backlog).
    pub async fn connect(
        config: &ClientConfig,
        token: Option<&str>,
    ) -> Result<Self, ClientError> {
        let mut request = reqwest::Client::new().get(config.api_url("/subscriptions/notes"));
        if let Some(token) = token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        tracing::info!("subscription connected");

        Ok(Self {
            stream: Box::pin(response.bytes_stream()),
            buffer: String::new(),
            pending: VecDeque::new(),
        })
    }

    /// Next delivered value.
    ///
    /// `Some(Some(note))` for a created note, `Some(None)` for a null
    /// payload, and `None` once the connection is closed.
    pub async fn next_event(&mut self) -> Option<Option<Note>> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Some(event);
            }

            match self.stream.next().await {
                Some(Ok(chunk)) => {
                    self.buffer.push_str(&String::from_utf8_lossy(&chunk));
                    let (events, rest) = parse_sse_lines(&self.buffer);
                    self.buffer = rest;
                    self.pending.extend(events);
                }
                Some(Err(e)) => {
                    tracing::warn!("subscription stream error: {}", e);
                    return None;
                }
                None => {
                    tracing::info!("subscription stream closed");
                    return None;
                }
            }
        }
    }
}

/// Parse complete SSE lines out of the buffer.
///
/// Returns the parsed events and the unconsumed remainder (the trailing
/// partial line, if any). Only `data:` lines produce events; event-name
/// lines, comments, and blank separators are skipped. A `data:` payload
/// that is not valid JSON for `Option<Note>` is treated as null.
pub(crate) fn parse_sse_lines(buffer: &str) -> (Vec<Option<Note>>, String) {
    let mut events = Vec::new();
    let mut rest = buffer;

    while let Some(newline_pos) = rest.find('\n') {
        let line = rest[..newline_pos].trim_end_matches('\r');
        let remainder = &rest[newline_pos + 1..];

        if let Some(data) = line.strip_prefix("data:") {
            let data = data.trim_start();
            match serde_json::from_str::<Option<Note>>(data) {
                Ok(note) => events.push(note),
                Err(e) => {
                    tracing::warn!("unparseable subscription payload: {}", e);
                    events.push(None);
                }
            }
        }
        // Everything else - "event:" lines, ":" keep-alive comments,
        // blank separators - carries no payload.

        rest = remainder;
    }

    (events, rest.to_string())
}
