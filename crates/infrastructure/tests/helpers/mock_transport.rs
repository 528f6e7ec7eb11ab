#![allow(dead_code)]
use async_trait::async_trait;
use hickory_proto::op::Message;
use rootward_domain::{DnsQuery, DomainError, RecordType, ServerSet};
use rootward_infrastructure::dns::{UpstreamResponse, UpstreamTransport};
use std::collections::{HashMap, VecDeque};
use std::net::IpAddr;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub enum ScriptedReply {
    Message(Message),
    Fail(DomainError),
}

/// One recorded `send` call.
#[derive(Debug, Clone)]
pub struct TransportCall {
    pub servers: ServerSet,
    pub domain: String,
    pub record_type: RecordType,
}

/// In-memory upstream: replies are scripted per (first candidate, qname).
///
/// A route with one reply left keeps returning it; a route with several
/// pops them in order. The wildcard qname `*` matches any name for that
/// server. Unscripted routes fail as unreachable.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    routes: Arc<Mutex<HashMap<(IpAddr, String), VecDeque<ScriptedReply>>>>,
    calls: Arc<Mutex<Vec<TransportCall>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, server: IpAddr, domain: &str, message: Message) -> &Self {
        self.push(server, domain, ScriptedReply::Message(message))
    }

    pub fn fail(&self, server: IpAddr, domain: &str, error: DomainError) -> &Self {
        self.push(server, domain, ScriptedReply::Fail(error))
    }

    fn push(&self, server: IpAddr, domain: &str, reply: ScriptedReply) -> &Self {
        self.routes
            .lock()
            .unwrap()
            .entry((server, normalize(domain)))
            .or_default()
            .push_back(reply);
        self
    }

    pub fn calls(&self) -> Vec<TransportCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Queried domains in call order.
    pub fn queried_domains(&self) -> Vec<String> {
        self.calls().into_iter().map(|call| call.domain).collect()
    }

    fn next_reply(&self, server: IpAddr, domain: &str) -> Option<ScriptedReply> {
        let mut routes = self.routes.lock().unwrap();
        let key = if routes.contains_key(&(server, domain.to_string())) {
            (server, domain.to_string())
        } else {
            (server, "*".to_string())
        };
        let queue = routes.get_mut(&key)?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

fn normalize(domain: &str) -> String {
    domain.trim_end_matches('.').to_ascii_lowercase()
}

#[async_trait]
impl UpstreamTransport for ScriptedTransport {
    async fn send(
        &self,
        servers: &ServerSet,
        query: &DnsQuery,
    ) -> Result<UpstreamResponse, DomainError> {
        let domain = normalize(&query.domain);
        self.calls.lock().unwrap().push(TransportCall {
            servers: servers.clone(),
            domain: domain.clone(),
            record_type: query.record_type,
        });

        let server = *servers
            .as_slice()
            .first()
            .ok_or(DomainError::TransportNoCandidates)?;

        match self.next_reply(server, &domain) {
            Some(ScriptedReply::Message(message)) => Ok(UpstreamResponse::new(message, server)),
            Some(ScriptedReply::Fail(error)) => Err(error),
            None => Err(DomainError::TransportAllServersUnreachable),
        }
    }

    fn protocol_name(&self) -> &'static str {
        "SCRIPTED"
    }
}
