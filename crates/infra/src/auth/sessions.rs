//! In-process session store.
//!
//! Sessions are opaque random tokens mapped to user ids. They are not
//! persisted; restarting the service signs everyone out, matching the
//! original deployment's memory session store.

use std::collections::HashMap;

use parking_lot::RwLock;
use rand::RngCore;
use shiftclock_domain::constants::SESSION_TOKEN_BYTES;
use uuid::Uuid;

/// Thread-safe session token registry.
#[derive(Default)]
pub struct SessionManager {
    sessions: RwLock<HashMap<String, Uuid>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a session for the user and return the opaque token.
    pub fn create(&self, user_id: Uuid) -> String {
        let mut bytes = [0u8; SESSION_TOKEN_BYTES];
        rand::thread_rng().fill_bytes(&mut bytes);
        let token = hex::encode(bytes);

        self.sessions.write().insert(token.clone(), user_id);
        token
    }

    /// Resolve a token to the owning user, if the session is live.
    pub fn resolve(&self, token: &str) -> Option<Uuid> {
        self.sessions.read().get(token).copied()
    }

    /// Revoke a session. Returns whether a live session was removed.
    pub fn revoke(&self, token: &str) -> bool {
        self.sessions.write().remove(token).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_resolve_revoke_cycle() {
        let sessions = SessionManager::new();
        let user_id = Uuid::new_v4();

        let token = sessions.create(user_id);
        assert_eq!(sessions.resolve(&token), Some(user_id));

        assert!(sessions.revoke(&token));
        assert_eq!(sessions.resolve(&token), None);
        assert!(!sessions.revoke(&token));
    }

    #[test]
    fn tokens_are_unique_per_login() {
        let sessions = SessionManager::new();
        let user_id = Uuid::new_v4();
        assert_ne!(sessions.create(user_id), sessions.create(user_id));
    }
}
