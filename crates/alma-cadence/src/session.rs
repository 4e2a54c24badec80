use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Mutable per-conversation counters.
///
/// One instance per conversation, owned exclusively by the transport
/// layer, which delegates mutation to the cadence tracker. Lifecycle:
/// created when a conversation begins, destroyed when it ends. For
/// stateless request-style transports the state is reconstructed each
/// call from a caller-supplied counter instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Messages received so far. Starts at 0, advances by exactly 1 per
    /// inbound message, monotonically non-decreasing.
    pub query_count: u64,
    /// When the opposing viewpoint last fired. Initialized to session
    /// creation time.
    pub last_viewpoint_injection: DateTime<Utc>,
    /// Session creation time.
    pub created_at: DateTime<Utc>,
}

impl SessionState {
    /// Create a fresh session at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            query_count: 0,
            last_viewpoint_injection: now,
            created_at: now,
        }
    }

    /// Reconstruct session state from a caller-supplied counter, for
    /// stateless transports with no server-side persistence.
    ///
    /// The injection timestamp is set to `now`, so viewpoint injection
    /// never fires in this mode — the caller carries no timestamp to
    /// reconstruct the window from.
    pub fn from_query_count(query_count: u64, now: DateTime<Utc>) -> Self {
        Self {
            query_count,
            last_viewpoint_injection: now,
            created_at: now,
        }
    }

    /// Advance the message counter. This is the only place the counter
    /// moves, and it must happen exactly once per inbound message.
    ///
    /// Saturates at `u64::MAX`: a caller-supplied counter at the ceiling
    /// must not wrap the monotonic invariant (or panic the transport).
    pub fn record_message(&mut self) {
        self.query_count = self.query_count.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_at_zero() {
        let now = Utc::now();
        let session = SessionState::new(now);
        assert_eq!(session.query_count, 0);
        assert_eq!(session.last_viewpoint_injection, now);
        assert_eq!(session.created_at, now);
    }

    #[test]
    fn counter_advances_by_one() {
        let mut session = SessionState::new(Utc::now());
        for expected in 1..=10 {
            session.record_message();
            assert_eq!(session.query_count, expected);
        }
    }

    #[test]
    fn counter_saturates_at_the_ceiling() {
        let mut session = SessionState::from_query_count(u64::MAX, Utc::now());
        session.record_message();
        assert_eq!(session.query_count, u64::MAX);
        // Still monotonically non-decreasing on further messages.
        session.record_message();
        assert_eq!(session.query_count, u64::MAX);
    }

    #[test]
    fn reconstruction_carries_the_counter() {
        let now = Utc::now();
        let session = SessionState::from_query_count(42, now);
        assert_eq!(session.query_count, 42);
        assert_eq!(session.last_viewpoint_injection, now);
    }
}
