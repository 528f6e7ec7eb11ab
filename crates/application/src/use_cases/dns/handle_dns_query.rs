use crate::ports::{DnsResolver, ResolutionOutcome};
use rootward_domain::{DnsRequest, RootHints};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Resolves one client question from the root hints down.
pub struct HandleDnsQueryUseCase {
    resolver: Arc<dyn DnsResolver>,
    root_hints: RootHints,
}

impl HandleDnsQueryUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>, root_hints: RootHints) -> Self {
        Self {
            resolver,
            root_hints,
        }
    }

    pub fn root_hints(&self) -> &RootHints {
        &self.root_hints
    }

    pub async fn execute(&self, request: &DnsRequest) -> ResolutionOutcome {
        let start = Instant::now();
        let query = request.to_query();

        debug!(
            domain = %query.domain,
            record_type = %query.record_type,
            client = %request.client_ip,
            roots = self.root_hints.len(),
            "Starting resolution from root hints"
        );

        let outcome = self
            .resolver
            .resolve(&query, &self.root_hints.server_set())
            .await;

        let elapsed_ms = start.elapsed().as_millis() as u64;

        match &outcome {
            ResolutionOutcome::Answer(resolution) => {
                info!(
                    domain = %query.domain,
                    record_type = %query.record_type,
                    client = %request.client_ip,
                    answers = resolution.answers.len(),
                    descents = resolution.descents,
                    elapsed_ms,
                    status = outcome.status(),
                    "Query resolved"
                );
            }
            ResolutionOutcome::NameError => {
                info!(
                    domain = %query.domain,
                    record_type = %query.record_type,
                    client = %request.client_ip,
                    elapsed_ms,
                    status = outcome.status(),
                    "Name does not exist"
                );
            }
            ResolutionOutcome::ServerFailure(reason) => {
                warn!(
                    domain = %query.domain,
                    record_type = %query.record_type,
                    client = %request.client_ip,
                    error = %reason,
                    elapsed_ms,
                    status = outcome.status(),
                    "Resolution failed"
                );
            }
        }

        outcome
    }
}
