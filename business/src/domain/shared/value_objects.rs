use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Numeric shopper identifier used to key the remote cart.
///
/// The upstream cart API only knows a small pool of numeric user ids, so an
/// authenticated session key is folded deterministically into that pool:
/// the same session key always maps to the same shopper id, across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShopperId(u64);

impl ShopperId {
    /// Fallback identity for unauthenticated visitors.
    pub const GUEST: ShopperId = ShopperId(1);

    /// Size of the upstream user-id pool (ids 1..=POOL_SIZE).
    const POOL_SIZE: u64 = 10;

    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Derives a stable shopper id from a session key.
    pub fn from_session_key(key: &str) -> Self {
        let digest = Sha256::digest(key.as_bytes());
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest[..8]);
        Self(1 + u64::from_be_bytes(prefix) % Self::POOL_SIZE)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ShopperId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_same_session_key_to_same_id() {
        let first = ShopperId::from_session_key("session-abc");
        let second = ShopperId::from_session_key("session-abc");

        assert_eq!(first, second);
    }

    #[test]
    fn should_stay_within_upstream_pool() {
        for key in ["a", "b", "c", "longer-session-key", ""] {
            let id = ShopperId::from_session_key(key).value();
            assert!((1..=10).contains(&id), "id {} out of pool", id);
        }
    }

    #[test]
    fn should_default_guest_to_one() {
        assert_eq!(ShopperId::GUEST.value(), 1);
    }

    #[test]
    fn should_display_numeric_value() {
        assert_eq!(format!("{}", ShopperId::new(7)), "7");
    }
}
