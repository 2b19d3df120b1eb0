/// Remote-boundary errors shared by all gateway ports.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("gateway.network")]
    Network,
    #[error("gateway.status")]
    Status(u16),
    #[error("gateway.malformed_payload")]
    MalformedPayload,
}

impl GatewayError {
    pub fn network() -> Self {
        GatewayError::Network
    }
    pub fn status(code: u16) -> Self {
        GatewayError::Status(code)
    }
    pub fn malformed_payload() -> Self {
        GatewayError::MalformedPayload
    }
}
