//! Server-Sent Events handler for load progress

use crate::state::{AppState, ServerEvent};
use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::Stream;
use std::convert::Infallible;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

/// Event name and JSON payload for a server event
pub fn encode_event(event: &ServerEvent) -> (&'static str, String) {
    match event {
        ServerEvent::Progress { progress } => (
            "progress",
            serde_json::json!({ "progress": progress }).to_string(),
        ),
        ServerEvent::Loaded { books } => {
            ("loaded", serde_json::json!({ "books": books }).to_string())
        }
        ServerEvent::Failed { message } => (
            "failed",
            serde_json::json!({ "message": message }).to_string(),
        ),
    }
}

fn to_sse(event: &ServerEvent) -> Event {
    let (event_type, data) = encode_event(event);
    Event::default().event(event_type).data(data)
}

/// SSE endpoint streaming load progress.
///
/// The current load state is sent first so late subscribers still see a
/// terminal `loaded` or `failed` event.
pub async fn sync_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    // Subscribe before reading the state so no transition falls in between
    let rx = state.subscribe();
    let current = state.current_event().await;

    let initial = tokio_stream::iter(current.map(|event| Ok(to_sse(&event))));
    let updates = BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(event) => Some(Ok(to_sse(&event))),
        Err(_) => None, // Lagged, skip
    });

    Sse::new(initial.chain(updates)).keep_alive(KeepAlive::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_event() {
        assert_eq!(
            encode_event(&ServerEvent::Progress { progress: 42 }),
            ("progress", r#"{"progress":42}"#.to_string())
        );
        assert_eq!(
            encode_event(&ServerEvent::Loaded { books: 7 }),
            ("loaded", r#"{"books":7}"#.to_string())
        );
    }
}
