use super::budget::ResolutionBudget;
use super::delegation;
use crate::dns::forwarding::{ResponseParser, UpstreamResponse};
use crate::dns::transport::UpstreamTransport;
use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt};
use hickory_proto::rr::Name;
use rootward_application::ports::{DnsResolution, DnsResolver, ResolutionOutcome};
use rootward_domain::{DnsQuery, DomainError, ResolverConfig, RootHints, ServerSet};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, info, trace};

/// Walks the delegation tree from a starting server set to an authoritative
/// answer.
///
/// Each level is one query step: ask the current servers, then either stop
/// (authoritative reply, or nothing left to follow) or descend to the servers
/// named in the referral. Referrals without glue trigger nested `A` lookups
/// for the nameserver names, started from the root hints and paid for out of
/// the same [`ResolutionBudget`].
pub struct IterativeResolver {
    transport: Arc<dyn UpstreamTransport>,
    root_hints: RootHints,
    config: ResolverConfig,
}

impl IterativeResolver {
    pub fn new(
        transport: Arc<dyn UpstreamTransport>,
        root_hints: RootHints,
        config: ResolverConfig,
    ) -> Self {
        info!(
            transport = transport.protocol_name(),
            roots = root_hints.len(),
            retry_budget = config.retry_budget,
            descent_budget = config.descent_budget,
            max_nesting_depth = config.max_nesting_depth,
            glue_policy = ?config.glue_policy,
            "Iterative resolver created"
        );

        Self {
            transport,
            root_hints,
            config,
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Query `servers` until one attempt succeeds or the retry budget for
    /// this level is spent. Each retry starts from the next candidate.
    async fn query_step(
        &self,
        query: &DnsQuery,
        servers: &ServerSet,
    ) -> Result<UpstreamResponse, DomainError> {
        let mut failures: u32 = 0;

        loop {
            let candidates = servers.rotated(failures as usize);

            let error = match self.transport.send(&candidates, query).await {
                Ok(response) if response.is_server_error() => DomainError::UpstreamServerError {
                    server: response.server().to_string(),
                    rcode: ResponseParser::rcode_to_status(response.response_code()).to_string(),
                },
                Ok(response) => return Ok(response),
                Err(e) => e,
            };

            if !error.is_transport_error() {
                return Err(error);
            }

            failures += 1;
            if failures >= self.config.retry_budget {
                return Err(DomainError::RetryBudgetExhausted {
                    attempts: failures,
                    last_error: error.to_string(),
                });
            }

            debug!(
                query = %query,
                servers = %candidates,
                attempt = failures,
                error = %error,
                "Upstream attempt failed, retrying"
            );
        }
    }

    fn walk<'a>(
        &'a self,
        query: &'a DnsQuery,
        start: ServerSet,
        budget: &'a mut ResolutionBudget,
        depth: u32,
    ) -> BoxFuture<'a, ResolutionOutcome> {
        async move {
            let outcome = self.descend(query, start, budget, depth).await;

            debug!(
                domain = %query.domain,
                record_type = %query.record_type,
                depth,
                descents = budget.descents_used(),
                status = outcome.status(),
                "Delegation walk finished"
            );

            outcome
        }
        .boxed()
    }

    async fn descend(
        &self,
        query: &DnsQuery,
        start: ServerSet,
        budget: &mut ResolutionBudget,
        depth: u32,
    ) -> ResolutionOutcome {
        let mut servers = start;

        loop {
            if let Err(e) = budget.take_descent() {
                return ResolutionOutcome::ServerFailure(e);
            }

            trace!(query = %query, depth, servers = %servers, "Querying delegation level");

            let response = match self.query_step(query, &servers).await {
                Ok(response) => response,
                Err(e) => return ResolutionOutcome::ServerFailure(e),
            };

            if response.authoritative() {
                let resolution = DnsResolution::new(response.answers().to_vec(), true)
                    .with_authorities(response.authorities().to_vec())
                    .with_response_code(response.response_code())
                    .from_server(response.server(), budget.descents_used());
                return ResolutionOutcome::Answer(resolution);
            }

            let ns_names = response.delegation_names();
            if ns_names.is_empty() {
                return ResolutionOutcome::NameError;
            }

            let mut next =
                delegation::glue_addresses(&response, &ns_names, self.config.glue_policy);

            if next.is_empty() {
                debug!(
                    query = %query,
                    nameservers = ns_names.len(),
                    "Referral without glue, resolving nameserver addresses"
                );
                next = match self.lookup_nameservers(&ns_names, budget, depth + 1).await {
                    Ok(next) => next,
                    Err(e) => return ResolutionOutcome::ServerFailure(e),
                };
            }

            trace!(
                query = %query,
                from = %response.server(),
                next = %next,
                "Following referral"
            );

            servers = next;
        }
    }

    /// Resolve nameserver names to addresses, one name at a time, until one
    /// of them yields at least one `A` record.
    async fn lookup_nameservers(
        &self,
        ns_names: &[Name],
        budget: &mut ResolutionBudget,
        depth: u32,
    ) -> Result<ServerSet, DomainError> {
        budget.check_depth(depth)?;

        for ns_name in ns_names {
            let ns_query = DnsQuery::nameserver_address(ns_name.to_utf8());

            match self
                .walk(&ns_query, self.root_hints.server_set(), budget, depth)
                .await
            {
                ResolutionOutcome::Answer(resolution) => {
                    let addrs = resolution.ipv4_addresses();
                    if !addrs.is_empty() {
                        return Ok(addrs.into_iter().map(IpAddr::V4).collect());
                    }
                    debug!(nameserver = %ns_name, "Nameserver lookup returned no addresses");
                }
                ResolutionOutcome::NameError => {
                    debug!(nameserver = %ns_name, "Nameserver name does not exist");
                }
                ResolutionOutcome::ServerFailure(e) => {
                    if budget.is_exhausted() {
                        return Err(DomainError::DescentBudgetExhausted);
                    }
                    debug!(nameserver = %ns_name, error = %e, "Nameserver lookup failed");
                }
            }
        }

        Err(DomainError::NoNameserverAddress)
    }
}

#[async_trait]
impl DnsResolver for IterativeResolver {
    async fn resolve(&self, query: &DnsQuery, servers: &ServerSet) -> ResolutionOutcome {
        let mut budget = ResolutionBudget::from_config(&self.config);
        self.walk(query, servers.clone(), &mut budget, 0).await
    }
}
