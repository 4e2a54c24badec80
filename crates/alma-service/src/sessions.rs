//! Session ownership for the transport layer.
//!
//! The manager is the single owner of every [`SessionState`]: handlers
//! mutate a session only through [`SessionManager::with_session`], which
//! holds the write lock for the duration of the mutation. That upholds
//! the single-writer-per-session rule without any further locking in the
//! core, and keeps one session's failure from touching another's state.

use std::collections::HashMap;
use std::sync::RwLock;

use alma_cadence::SessionState;
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::error::ApiError;

struct SessionEntry {
    state: SessionState,
    last_active: DateTime<Utc>,
}

/// In-memory session table keyed by session identifier.
pub struct SessionManager {
    sessions: RwLock<HashMap<String, SessionEntry>>,
    config: SessionConfig,
}

impl SessionManager {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            config,
        }
    }

    /// Create a session, evicting idle-expired ones first if at capacity.
    pub fn create_session(&self, now: DateTime<Utc>) -> Result<String, ApiError> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| ApiError::Internal("session table lock poisoned".into()))?;

        if sessions.len() >= self.config.max_sessions {
            let cutoff = now - Duration::minutes(self.config.idle_expiry_minutes);
            sessions.retain(|_, entry| entry.last_active > cutoff);
            if sessions.len() >= self.config.max_sessions {
                return Err(ApiError::TooManySessions);
            }
        }

        let id = format!("session-{}", uuid::Uuid::new_v4());
        sessions.insert(
            id.clone(),
            SessionEntry {
                state: SessionState::new(now),
                last_active: now,
            },
        );
        info!(session_id = %id, "Session created");
        Ok(id)
    }

    /// Mutate one session under the write lock.
    pub fn with_session<T>(
        &self,
        id: &str,
        now: DateTime<Utc>,
        f: impl FnOnce(&mut SessionState) -> T,
    ) -> Result<T, ApiError> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| ApiError::Internal("session table lock poisoned".into()))?;

        let entry = sessions
            .get_mut(id)
            .ok_or_else(|| ApiError::NotFound(format!("session {id}")))?;
        entry.last_active = now;
        Ok(f(&mut entry.state))
    }

    /// Destroy a session at conversation end.
    pub fn end_session(&self, id: &str) -> Result<(), ApiError> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| ApiError::Internal("session table lock poisoned".into()))?;

        if sessions.remove(id).is_none() {
            return Err(ApiError::NotFound(format!("session {id}")));
        }
        info!(session_id = %id, "Session ended");
        Ok(())
    }

    /// Drop sessions idle past the configured expiry. Returns how many
    /// were removed.
    pub fn cleanup_expired(&self, now: DateTime<Utc>) -> Result<usize, ApiError> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| ApiError::Internal("session table lock poisoned".into()))?;

        let cutoff = now - Duration::minutes(self.config.idle_expiry_minutes);
        let before = sessions.len();
        sessions.retain(|_, entry| entry.last_active > cutoff);
        let removed = before - sessions.len();
        if removed > 0 {
            debug!(removed, "Expired idle sessions");
        }
        Ok(removed)
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.read().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
