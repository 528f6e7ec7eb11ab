pub mod udp;

use crate::dns::forwarding::UpstreamResponse;
use async_trait::async_trait;
use rootward_domain::{DnsQuery, DomainError, ServerSet};

/// One query attempt against a candidate server set.
///
/// Implementations pick the first reachable candidate, send `query` under a
/// fresh transaction id and return the validated reply. Any error means the
/// attempt failed; the caller decides whether to retry.
#[async_trait]
pub trait UpstreamTransport: Send + Sync {
    async fn send(
        &self,
        servers: &ServerSet,
        query: &DnsQuery,
    ) -> Result<UpstreamResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}
