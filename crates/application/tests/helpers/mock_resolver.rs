#![allow(dead_code)]

use async_trait::async_trait;
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{Name, RData, Record};
use rootward_application::ports::{DnsResolution, DnsResolver, ResolutionOutcome};
use rootward_domain::{DnsQuery, DomainError, ServerSet};
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

/// Resolver double: scripted outcomes per domain, records every call.
#[derive(Clone, Default)]
pub struct MockDnsResolver {
    outcomes: Arc<Mutex<HashMap<String, ResolutionOutcome>>>,
    calls: Arc<Mutex<Vec<(DnsQuery, ServerSet)>>>,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_outcome(&self, domain: &str, outcome: ResolutionOutcome) {
        self.outcomes
            .lock()
            .unwrap()
            .insert(domain.to_string(), outcome);
    }

    pub fn calls(&self) -> Vec<(DnsQuery, ServerSet)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(&self, query: &DnsQuery, servers: &ServerSet) -> ResolutionOutcome {
        self.calls
            .lock()
            .unwrap()
            .push((query.clone(), servers.clone()));

        self.outcomes
            .lock()
            .unwrap()
            .get(query.domain.as_ref())
            .cloned()
            .unwrap_or(ResolutionOutcome::ServerFailure(
                DomainError::NoNameserverAddress,
            ))
    }
}

pub fn answer_a(domain: &str, ip: Ipv4Addr) -> ResolutionOutcome {
    let record = Record::from_rdata(Name::from_str(domain).unwrap(), 300, RData::A(A(ip)));
    ResolutionOutcome::Answer(DnsResolution::new(vec![record], true))
}
