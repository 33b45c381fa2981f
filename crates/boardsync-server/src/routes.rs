//! State endpoint handlers

use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};
use boardsync::model::Document;
use boardsync::store::StateStore;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{with_store, SharedState};

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    "OK"
}

/// GET /state
///
/// Always 200. Any failure, including a storage timeout, is served as the empty
/// board so pollers never see an error just because nothing was written yet.
pub async fn get_state<S: StateStore + 'static>(
    State(state): State<SharedState<S>>,
) -> Json<Document> {
    match with_store(&state, |api, _| Ok(api.state())).await {
        Ok(doc) => Json(doc),
        Err(e) => {
            warn!(error = %e, "serving empty board");
            Json(Document::default())
        }
    }
}

/// Acknowledgement for POST /state
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StateAck {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// POST /state - replace the whole board
///
/// The raw body is validated before anything is written. Bad JSON, a malformed
/// record and a failed or timed-out write all answer 500 with the error text,
/// and in every such case the previously committed board is left in place.
pub async fn post_state<S: StateStore + 'static>(
    State(state): State<SharedState<S>>,
    body: Bytes,
) -> (StatusCode, Json<StateAck>) {
    match with_store(&state, move |api, token| api.replace_state_json(&body, token)).await {
        Ok(result) => {
            if let Some(doc) = &result.document {
                info!(
                    elements = doc.elements.len(),
                    logs = doc.logs.len(),
                    links = doc.links.len(),
                    "state replaced"
                );
            }
            (
                StatusCode::OK,
                Json(StateAck {
                    success: true,
                    error: None,
                }),
            )
        }
        Err(e) => {
            warn!(error = %e, "state replace rejected");
            failure(e.to_string())
        }
    }
}

fn failure(error: String) -> (StatusCode, Json<StateAck>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(StateAck {
            success: false,
            error: Some(error),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppState;
    use boardsync::api::BoardApi;
    use boardsync::error::{BoardError, Result};
    use boardsync::store::memory::MemStore;
    use boardsync::store::CommitToken;
    use serde_json::json;
    use std::time::Duration;

    fn mem_state() -> SharedState<MemStore> {
        AppState::new(BoardApi::new(MemStore::new()), Duration::from_secs(2))
    }

    fn body(value: serde_json::Value) -> Bytes {
        Bytes::from(serde_json::to_vec(&value).unwrap())
    }

    /// Store whose calls outlive the endpoint's patience. Writes spend the
    /// delay staging before their commit point, like a large fsync would.
    struct SlowStore {
        inner: MemStore,
        delay: Duration,
    }

    impl SlowStore {
        fn new(delay: Duration) -> Self {
            Self {
                inner: MemStore::new(),
                delay,
            }
        }
    }

    impl StateStore for SlowStore {
        fn load(&self) -> Result<Document> {
            std::thread::sleep(self.delay);
            self.inner.load()
        }

        fn replace(&self, doc: &Document) -> Result<()> {
            self.replace_guarded(doc, &CommitToken::new())
        }

        fn replace_guarded(&self, doc: &Document, token: &CommitToken) -> Result<()> {
            std::thread::sleep(self.delay);
            if !token.begin_commit() {
                return Err(BoardError::Persistence("abandoned".to_string()));
            }
            self.inner.replace(doc)
        }
    }

    #[tokio::test]
    async fn get_on_empty_store_is_empty_board() {
        let Json(doc) = get_state(State(mem_state())).await;
        assert_eq!(doc, Document::default());
    }

    #[tokio::test]
    async fn post_then_get_round_trips() {
        let state = mem_state();
        let payload = json!({
            "elements": [{"id": "n1", "type": "database", "x": 1, "y": 2,
                          "label": "DB", "color": "#123456"}],
            "logs": [{"id": "l1", "agent": "GPT-4o", "message": "hi",
                      "type": "warning", "timestamp": "09:00:00"}],
            "links": [{"id": "k1", "from": "n1", "to": "ghost", "color": "#fff"}]
        });

        let (status, Json(ack)) = post_state(State(state.clone()), body(payload.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            ack,
            StateAck {
                success: true,
                error: None
            }
        );

        let Json(doc) = get_state(State(state)).await;
        assert_eq!(serde_json::to_value(doc).unwrap(), payload_normalized(payload));
    }

    // Integers come back as floats for coordinates.
    fn payload_normalized(mut payload: serde_json::Value) -> serde_json::Value {
        payload["elements"][0]["x"] = json!(1.0);
        payload["elements"][0]["y"] = json!(2.0);
        payload
    }

    #[tokio::test]
    async fn malformed_post_is_rejected_without_mutation() {
        let state = mem_state();
        state.api.run("log", Some("keep me")).unwrap();

        let (status, Json(ack)) = post_state(
            State(state.clone()),
            body(json!({"elements": [{"id": "x"}], "logs": [], "links": []})),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!ack.success);
        assert!(ack.error.unwrap().contains("elements[0]"));

        let Json(doc) = get_state(State(state)).await;
        assert_eq!(doc.logs.len(), 1);
        assert_eq!(doc.logs[0].message, "keep me");
    }

    #[tokio::test]
    async fn invalid_json_is_rejected() {
        let (status, Json(ack)) =
            post_state(State(mem_state()), Bytes::from_static(b"not json")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(ack.error.unwrap().contains("invalid JSON"));
    }

    #[tokio::test]
    async fn write_failure_is_reported() {
        let state = mem_state();
        state.api.store().set_simulate_write_error(true);

        let (status, Json(ack)) = post_state(
            State(state),
            body(json!({"elements": [], "logs": [], "links": []})),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(ack.error.unwrap().contains("Simulated write error"));
    }

    #[tokio::test]
    async fn slow_storage_times_out() {
        let state = AppState::new(
            BoardApi::new(SlowStore::new(Duration::from_millis(500))),
            Duration::from_millis(50),
        );

        let (status, Json(ack)) = post_state(
            State(state.clone()),
            body(json!({"elements": [], "logs": [], "links": []})),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(ack.error.unwrap().contains("timed out"));

        let Json(doc) = get_state(State(state)).await;
        assert_eq!(doc, Document::default());
    }

    #[tokio::test]
    async fn timed_out_write_never_lands() {
        let state = AppState::new(
            BoardApi::new(SlowStore::new(Duration::from_millis(200))),
            Duration::from_millis(50),
        );
        state.api.store().inner.replace(&Document::default()).unwrap();

        let late = json!({
            "elements": [],
            "logs": [{"id": "l1", "agent": "Dolsoe", "message": "too late",
                      "type": "info", "timestamp": "09:00:00"}],
            "links": []
        });
        let (status, Json(ack)) = post_state(State(state.clone()), body(late)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(ack.error.unwrap().contains("timed out"));

        // Outlast the abandoned staging so it reaches its commit point.
        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(state.api.store().inner.load().unwrap(), Document::default());
    }

    #[tokio::test]
    async fn write_that_beats_the_timeout_is_acknowledged() {
        let state = AppState::new(
            BoardApi::new(SlowStore::new(Duration::from_millis(10))),
            Duration::from_secs(2),
        );
        let (status, _) = post_state(
            State(state.clone()),
            body(json!({"elements": [], "logs": [], "links": []})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(state.api.store().inner.load().unwrap(), Document::default());
    }
}
