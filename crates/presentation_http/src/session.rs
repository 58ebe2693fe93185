//! Cookie-keyed sessions and form tokens
//!
//! Each browser session gets a random id stored in a cookie and a random
//! form token kept server-side. A POST is accepted only when the token in
//! the submitted form matches the one bound to the session, compared in
//! constant time.

use std::collections::HashMap;

use axum::http::HeaderMap;
use parking_lot::RwLock;
use rand::RngCore;
use subtle::ConstantTimeEq;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "windlantern_session";

/// Bytes of randomness per identifier (hex-encoded to twice this length)
const TOKEN_BYTES: usize = 24;

/// In-memory session store mapping session ids to form tokens.
///
/// Sessions never expire; the store lives as long as the process, which
/// is acceptable for a single-user page.
#[derive(Debug, Default)]
pub struct SessionStore {
    tokens: RwLock<HashMap<String, String>>,
}

impl SessionStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new session, returning its id and form token
    pub fn create_session(&self) -> (String, String) {
        let session_id = random_hex();
        let token = random_hex();
        self.tokens
            .write()
            .insert(session_id.clone(), token.clone());
        (session_id, token)
    }

    /// Form token bound to a session, if the session exists
    #[must_use]
    pub fn token_for(&self, session_id: &str) -> Option<String> {
        self.tokens.read().get(session_id).cloned()
    }

    /// Constant-time check of a submitted form token against the session's
    #[must_use]
    pub fn verify(&self, session_id: &str, submitted: &str) -> bool {
        self.tokens.read().get(session_id).is_some_and(|token| {
            token.as_bytes().ct_eq(submitted.as_bytes()).into()
        })
    }
}

fn random_hex() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Extract the session id from the request's Cookie header
#[must_use]
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(axum::http::header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

/// Set-Cookie value binding the session id to the browser
#[must_use]
pub fn session_cookie(session_id: &str) -> String {
    format!("{SESSION_COOKIE}={session_id}; Path=/; HttpOnly; SameSite=Lax")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn created_session_verifies_its_own_token() {
        let store = SessionStore::new();
        let (sid, token) = store.create_session();
        assert!(store.verify(&sid, &token));
    }

    #[test]
    fn wrong_token_is_rejected() {
        let store = SessionStore::new();
        let (sid, _token) = store.create_session();
        assert!(!store.verify(&sid, "0000"));
    }

    #[test]
    fn unknown_session_is_rejected() {
        let store = SessionStore::new();
        assert!(!store.verify("nope", "anything"));
    }

    #[test]
    fn tokens_are_48_hex_chars() {
        let store = SessionStore::new();
        let (sid, token) = store.create_session();
        assert_eq!(sid.len(), 48);
        assert_eq!(token.len(), 48);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn sessions_are_distinct() {
        let store = SessionStore::new();
        let (a, _) = store.create_session();
        let (b, _) = store.create_session();
        assert_ne!(a, b);
    }

    #[test]
    fn cookie_round_trips_through_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::COOKIE,
            HeaderValue::from_str(&format!("other=1; {SESSION_COOKIE}=abc123")).unwrap(),
        );
        assert_eq!(session_id_from_headers(&headers), Some("abc123".to_string()));
    }

    #[test]
    fn missing_cookie_yields_none() {
        let headers = HeaderMap::new();
        assert!(session_id_from_headers(&headers).is_none());
    }

    #[test]
    fn cookie_attributes_restrict_scope() {
        let value = session_cookie("abc");
        assert!(value.contains("HttpOnly"));
        assert!(value.contains("SameSite=Lax"));
        assert!(value.starts_with("windlantern_session=abc"));
    }
}
