use business::domain::shared::value_objects::ShopperId;

/// Resolves the shopper identity for a request from the optional
/// `X-Session-Id` header. A present, non-blank session key maps
/// deterministically to a shopper id; anything else is the guest identity.
pub fn resolve_shopper(session_key: Option<&str>) -> ShopperId {
    match session_key {
        Some(key) if !key.trim().is_empty() => ShopperId::from_session_key(key),
        _ => ShopperId::GUEST,
    }
}
