//! Shopping session state.
//!
//! A session owns the cart and the signed-in user for one shopper. It is a
//! plain value: the presentation layer decides where to keep it between
//! interactions and passes it to whatever needs it.

use crate::account::UserRecord;
use crate::cart::CartStore;
use crate::checkout::OrderConfirmation;
use crate::money::Currency;
use crate::CommerceError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A unique session identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Create a new session ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new random session ID.
    pub fn generate() -> Self {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
        use rand::Rng;

        let bytes: [u8; 18] = rand::thread_rng().gen();
        Self(format!("sess_{}", URL_SAFE_NO_PAD.encode(bytes)))
    }

    /// Get the session ID as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Everything a shopper carries between page views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionState {
    /// The session ID.
    pub id: SessionId,
    /// The cart; only this session mutates it.
    pub cart: CartStore,
    /// Signed-in user, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserRecord>,
    /// Receipt of the most recent order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_order: Option<OrderConfirmation>,
    /// Bumped on every saved change.
    pub version: u64,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// When the session was last changed.
    pub updated_at: DateTime<Utc>,
}

impl SessionState {
    /// Start a fresh session with an empty cart.
    pub fn new(currency: Currency, now: DateTime<Utc>) -> Self {
        Self {
            id: SessionId::generate(),
            cart: CartStore::new(currency),
            user: None,
            last_order: None,
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record a change.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.version += 1;
        self.updated_at = now;
    }

    /// Store the signed-in user.
    pub fn sign_in(&mut self, user: UserRecord) {
        self.user = Some(user);
    }

    /// Forget the signed-in user. The cart is kept.
    pub fn sign_out(&mut self) -> Option<UserRecord> {
        self.user.take()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, CommerceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a session saved with [`to_json`](Self::to_json).
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartCandidate;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn test_session_id_generate_format() {
        let id = SessionId::generate();
        assert!(id.as_str().starts_with("sess_"));
        // 18 bytes base64 without padding = 24 chars
        assert_eq!(id.as_str().len(), 29);
        assert_ne!(id, SessionId::generate());
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = SessionState::new(Currency::INR, now());
        assert!(session.cart.is_empty());
        assert!(!session.is_signed_in());
        assert_eq!(session.version, 1);
    }

    #[test]
    fn test_touch_bumps_version() {
        let mut session = SessionState::new(Currency::INR, now());
        let later = Utc.timestamp_opt(1_700_000_060, 0).unwrap();
        session.touch(later);
        assert_eq!(session.version, 2);
        assert_eq!(session.updated_at, later);
        assert_eq!(session.created_at, now());
    }

    #[test]
    fn test_sign_out_keeps_cart() {
        let mut session = SessionState::new(Currency::INR, now());
        session.cart.add_item(CartCandidate::new("p1", "Shirt", 500, "x"));
        session.sign_in(UserRecord::from_email("asha@example.com"));

        let user = session.sign_out().unwrap();
        assert_eq!(user.name, "asha");
        assert_eq!(session.cart.item_count(), 1);
    }

    #[test]
    fn test_json_restores_session() {
        let mut session = SessionState::new(Currency::INR, now());
        session.cart.add_units(CartCandidate::new("p1", "Shirt", 500, "x"), 3);
        session.sign_in(UserRecord::from_email("asha@example.com"));

        let restored = SessionState::from_json(&session.to_json().unwrap()).unwrap();
        assert_eq!(restored, session);
        assert_eq!(restored.cart.total().amount, 1500);
    }
}
