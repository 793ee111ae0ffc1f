//! REST API handlers for the storefront presentation layer
//!
//! The presentation layer renders from `GET /api/view` and sends each user
//! action to `POST /api/actions`, receiving the re-rendered view back.

use super::{helpers::*, state::SharedState};
use crate::error::Error;
use crate::store::Action;
use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

/// Creates routes for storefront operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/api/view", get(view))
        .route("/api/actions", post(dispatch))
        .route("/api/catalog", get(catalog))
        .route("/health", get(|| async { "ok" }))
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self {
            Error::UnknownProduct(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Endpoint: GET /api/view
/// Renders the session's current view. Does not register the session.
async fn view(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    // Session work may touch the cart file; keep it off the async workers.
    let id = session_id.clone();
    let response = match tokio::task::spawn_blocking(move || state.render_session(&id)).await {
        Ok(view) => Json(view).into_response(),
        Err(e) => Error::from(e).into_response(),
    };

    with_session_cookie(response, &session_id, is_new_session)
}

/// Endpoint: POST /api/actions
/// Applies one user action and returns the re-rendered view.
async fn dispatch(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(action): Json<Action>,
) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);
    let mutates_cart = action.mutates_cart();

    let id = session_id.clone();
    let result = tokio::task::spawn_blocking(move || {
        state.with_session(&id, |store| {
            store.dispatch(action)?;
            if mutates_cart {
                tracing::info!(
                    session = %id,
                    cart = %store.cart().summary(),
                    "cart updated"
                );
            }
            Ok::<_, Error>(store.view())
        })
    })
    .await
    .map_err(Error::from)
    .and_then(|result| result);

    let response = match result {
        Ok(view) => Json(view).into_response(),
        Err(e) => {
            tracing::warn!(session = %session_id, error = %e, "action rejected");
            e.into_response()
        }
    };
    with_session_cookie(response, &session_id, is_new_session)
}

/// Endpoint: GET /api/catalog
/// The full catalog in source order.
async fn catalog(State(state): State<SharedState>) -> impl IntoResponse {
    Json(state.catalog().clone())
}

fn with_session_cookie(mut response: Response, session_id: &str, is_new_session: bool) -> Response {
    if is_new_session {
        if let Ok(value) = HeaderValue::from_str(&session_cookie(session_id)) {
            response.headers_mut().insert(header::SET_COOKIE, value);
        }
    }
    response
}
