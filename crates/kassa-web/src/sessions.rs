use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "session";

/// In-process session store mapping opaque tokens to account ids.
/// Sessions do not survive a restart; users log in again.
#[derive(Clone, Default)]
pub struct Sessions {
    inner: Arc<Mutex<HashMap<String, u32>>>,
}

impl Sessions {
    /// Create a session for an account and return its token.
    pub fn create(&self, account_id: u32) -> String {
        let token = Uuid::new_v4().to_string();
        self.inner
            .lock()
            .unwrap()
            .insert(token.clone(), account_id);
        token
    }

    pub fn account_id(&self, token: &str) -> Option<u32> {
        self.inner.lock().unwrap().get(token).copied()
    }

    pub fn remove(&self, token: &str) {
        self.inner.lock().unwrap().remove(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_lifecycle() {
        let sessions = Sessions::default();
        let token = sessions.create(7);
        assert_eq!(sessions.account_id(&token), Some(7));

        sessions.remove(&token);
        assert_eq!(sessions.account_id(&token), None);
    }

    #[test]
    fn test_tokens_are_unique() {
        let sessions = Sessions::default();
        assert_ne!(sessions.create(1), sessions.create(1));
    }
}
