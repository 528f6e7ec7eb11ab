use async_trait::async_trait;
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::{RData, Record};
use rootward_domain::{DnsQuery, DomainError, ServerSet};
use std::net::{IpAddr, Ipv4Addr};

/// Final answer material returned by an authoritative server.
#[derive(Debug, Clone)]
pub struct DnsResolution {
    pub answers: Vec<Record>,
    /// Authority section of the answering message (SOA for NODATA, NXDOMAIN).
    pub authorities: Vec<Record>,
    pub authoritative: bool,
    pub response_code: ResponseCode,
    /// Server that produced the answer.
    pub upstream_server: Option<IpAddr>,
    /// Delegation descents spent reaching the answer.
    pub descents: u32,
}

impl DnsResolution {
    pub fn new(answers: Vec<Record>, authoritative: bool) -> Self {
        Self {
            answers,
            authorities: Vec::new(),
            authoritative,
            response_code: ResponseCode::NoError,
            upstream_server: None,
            descents: 0,
        }
    }

    pub fn with_authorities(mut self, authorities: Vec<Record>) -> Self {
        self.authorities = authorities;
        self
    }

    pub fn with_response_code(mut self, response_code: ResponseCode) -> Self {
        self.response_code = response_code;
        self
    }

    pub fn from_server(mut self, server: IpAddr, descents: u32) -> Self {
        self.upstream_server = Some(server);
        self.descents = descents;
        self
    }

    /// IPv4 addresses carried by `A` records in the answer section.
    pub fn ipv4_addresses(&self) -> Vec<Ipv4Addr> {
        self.answers
            .iter()
            .filter_map(|record| match record.data() {
                Some(RData::A(a)) => Some(a.0),
                _ => None,
            })
            .collect()
    }
}

/// Terminal state of one delegation walk.
#[derive(Debug, Clone)]
pub enum ResolutionOutcome {
    /// An authoritative server answered.
    Answer(DnsResolution),
    /// No authoritative data and no further delegation: the name does not exist.
    NameError,
    /// Budgets exhausted or no server usable; carries the reason.
    ServerFailure(DomainError),
}

impl ResolutionOutcome {
    pub fn is_answer(&self) -> bool {
        matches!(self, ResolutionOutcome::Answer(_))
    }

    pub fn is_name_error(&self) -> bool {
        matches!(self, ResolutionOutcome::NameError)
    }

    pub fn is_server_failure(&self) -> bool {
        matches!(self, ResolutionOutcome::ServerFailure(_))
    }

    pub fn resolution(&self) -> Option<&DnsResolution> {
        match self {
            ResolutionOutcome::Answer(resolution) => Some(resolution),
            _ => None,
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            ResolutionOutcome::Answer(resolution)
                if resolution.response_code == ResponseCode::NXDomain =>
            {
                "NXDOMAIN"
            }
            ResolutionOutcome::Answer(_) => "NOERROR",
            ResolutionOutcome::NameError => "NXDOMAIN",
            ResolutionOutcome::ServerFailure(_) => "SERVFAIL",
        }
    }
}

#[async_trait]
pub trait DnsResolver: Send + Sync {
    /// Walk the delegation tree for `query`, starting at `servers`.
    async fn resolve(&self, query: &DnsQuery, servers: &ServerSet) -> ResolutionOutcome;
}
