//! Session cookie helpers.

use axum::http::{header, HeaderMap};
use uuid::Uuid;

/// Cookie carrying the session id
pub const SESSION_COOKIE: &str = "storefront_session";

/// Returns the session id from the request cookies, or a fresh one.
///
/// The boolean is `true` when the id was just created and the response has
/// to set the cookie. Only well-formed UUIDs are accepted, normalized to
/// their simple (unhyphenated) form since the id doubles as a directory name.
pub fn resolve_session_id(headers: &HeaderMap) -> (String, bool) {
    let existing = headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok());

    match existing {
        Some(id) => (id.simple().to_string(), false),
        None => (Uuid::new_v4().simple().to_string(), true),
    }
}

pub fn session_cookie(session_id: &str) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax",
        SESSION_COOKIE, session_id
    )
}
