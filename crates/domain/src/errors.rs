use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Failed to encode DNS message: {0}")]
    EncodeFailed(String),

    #[error("Question count mismatch: sent {expected}, received {actual}")]
    QuestionCountMismatch { expected: usize, actual: usize },

    #[error("Transaction ID mismatch: sent {expected:#06x}, received {actual:#06x}")]
    TransactionIdMismatch { expected: u16, actual: u16 },

    #[error("Secure random source unavailable for transaction ID")]
    RandomIdUnavailable,

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Transport timeout waiting for {server}")]
    TransportTimeout { server: String },

    #[error("Upstream {server} answered {rcode}")]
    UpstreamServerError { server: String, rcode: String },

    #[error("No candidate server set to query")]
    TransportNoCandidates,

    #[error("All upstream servers are unreachable")]
    TransportAllServersUnreachable,

    #[error("Retry budget exhausted after {attempts} failed attempts: {last_error}")]
    RetryBudgetExhausted { attempts: u32, last_error: String },

    #[error("Delegation descent budget exhausted")]
    DescentBudgetExhausted,

    #[error("Nameserver lookup nesting exceeded depth {0}")]
    NestingTooDeep(u32),

    #[error("No address found for any delegated nameserver")]
    NoNameserverAddress,
}

impl DomainError {
    /// Errors that a fresh attempt against the same server set may clear.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidDnsResponse(_)
                | DomainError::EncodeFailed(_)
                | DomainError::QuestionCountMismatch { .. }
                | DomainError::TransactionIdMismatch { .. }
                | DomainError::RandomIdUnavailable
                | DomainError::IoError(_)
                | DomainError::TransportTimeout { .. }
                | DomainError::UpstreamServerError { .. }
                | DomainError::TransportAllServersUnreachable
        )
    }
}
