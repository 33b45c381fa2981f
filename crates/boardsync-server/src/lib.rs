//! HTTP state endpoint for boardsync.
//!
//! Pollers fetch `GET /state` on a fixed interval and re-render; writers may
//! replace the whole board with `POST /state`. There is no push channel: a
//! missed poll is harmless because the next one re-fetches everything.
//!
//! Store calls are blocking file I/O, so they run on tokio's blocking pool and
//! are bounded by the configured storage timeout.

pub mod routes;

use axum::{routing::get, Router};
use boardsync::api::BoardApi;
use boardsync::error::{BoardError, Result};
use boardsync::store::{CommitToken, StateStore};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::debug;

/// Endpoint state shared across handlers
pub struct AppState<S: StateStore> {
    pub api: BoardApi<S>,
    pub storage_timeout: Duration,
}

pub type SharedState<S> = Arc<AppState<S>>;

impl<S: StateStore + 'static> AppState<S> {
    pub fn new(api: BoardApi<S>, storage_timeout: Duration) -> SharedState<S> {
        Arc::new(Self {
            api,
            storage_timeout,
        })
    }
}

/// Run `op` against the API on the blocking pool, giving up after the storage timeout.
///
/// `op` receives a [`CommitToken`] to guard its write. On expiry the token is
/// abandoned so the write never lands after the caller has been told it failed.
/// If the commit already started, the call waits for it and reports its outcome.
pub async fn with_store<S, T, F>(state: &SharedState<S>, op: F) -> Result<T>
where
    S: StateStore + 'static,
    T: Send + 'static,
    F: FnOnce(&BoardApi<S>, &CommitToken) -> Result<T> + Send + 'static,
{
    let shared = Arc::clone(state);
    let token = Arc::new(CommitToken::new());
    let guard = Arc::clone(&token);
    let mut task = tokio::task::spawn_blocking(move || op(&shared.api, &guard));

    let waited = tokio::time::timeout(state.storage_timeout, &mut task).await;
    let joined = match waited {
        Ok(joined) => joined,
        Err(_) if token.abandon() => {
            return Err(BoardError::Persistence(format!(
                "storage call timed out after {}ms",
                state.storage_timeout.as_millis()
            )));
        }
        Err(_) => {
            debug!("storage timeout hit mid-commit, waiting for it");
            task.await
        }
    };
    joined.map_err(|e| BoardError::Persistence(format!("storage task failed: {}", e)))?
}

/// Create the endpoint router
pub fn create_router<S: StateStore + 'static>(state: SharedState<S>) -> Router {
    Router::new()
        .route(
            "/state",
            get(routes::get_state::<S>).post(routes::post_state::<S>),
        )
        .route("/health", get(routes::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
