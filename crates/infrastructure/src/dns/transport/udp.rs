//! UDP Transport for iterative DNS queries (RFC 1035 §4.2.1)
//!
//! One ephemeral socket per attempt, connected to the chosen server so the
//! kernel discards datagrams from any other source. Plain DNS only: replies
//! are read into a 512-byte buffer and truncation is not followed up.

use super::UpstreamTransport;
use crate::dns::forwarding::message_builder::MAX_DNS_MESSAGE_SIZE;
use crate::dns::forwarding::{MessageBuilder, ResponseParser, UpstreamResponse};
use crate::dns::transaction_id::{SecureIdGenerator, TransactionIdSource};
use async_trait::async_trait;
use rootward_domain::{DnsQuery, DomainError, ServerSet};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, trace};

pub const DEFAULT_DNS_PORT: u16 = 53;

/// How long one attempt waits for its reply.
pub const READ_TIMEOUT: Duration = Duration::from_secs(5);

/// DNS over UDP transport
pub struct UdpTransport {
    port: u16,
    id_source: Arc<dyn TransactionIdSource>,
}

impl UdpTransport {
    pub fn new() -> Self {
        Self::with_port(DEFAULT_DNS_PORT)
    }

    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            id_source: Arc::new(SecureIdGenerator::new()),
        }
    }

    pub fn with_id_source(mut self, id_source: Arc<dyn TransactionIdSource>) -> Self {
        self.id_source = id_source;
        self
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Connect to the first candidate that accepts a connected socket.
    async fn connect_first(&self, servers: &ServerSet) -> Result<(UdpSocket, IpAddr), DomainError> {
        for server in servers.iter() {
            let target = SocketAddr::new(*server, self.port);
            match Self::open_socket(target).await {
                Ok(socket) => return Ok((socket, *server)),
                Err(e) => {
                    debug!(server = %target, error = %e, "Skipping unreachable candidate");
                }
            }
        }

        Err(DomainError::TransportAllServersUnreachable)
    }

    async fn open_socket(target: SocketAddr) -> Result<UdpSocket, DomainError> {
        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr = if target.is_ipv4() {
            SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0)
        } else {
            SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 0)
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to bind UDP socket: {}", e)))?;

        socket.connect(target).await.map_err(|e| {
            DomainError::IoError(format!("Failed to connect UDP socket to {}: {}", target, e))
        })?;

        Ok(socket)
    }
}

impl Default for UdpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UpstreamTransport for UdpTransport {
    async fn send(
        &self,
        servers: &ServerSet,
        query: &DnsQuery,
    ) -> Result<UpstreamResponse, DomainError> {
        if servers.is_empty() {
            return Err(DomainError::TransportNoCandidates);
        }

        let (socket, server) = self.connect_first(servers).await?;

        let id = self.id_source.next_id()?;
        let message = MessageBuilder::build_message(query, id)?;
        let message_bytes = MessageBuilder::serialize_message(&message)?;

        let bytes_sent = socket.send(&message_bytes).await.map_err(|e| {
            DomainError::IoError(format!("Failed to send UDP query to {}: {}", server, e))
        })?;

        trace!(server = %server, id, bytes_sent, query = %query, "UDP query sent");

        let mut recv_buf = [0u8; MAX_DNS_MESSAGE_SIZE];

        let bytes_received = tokio::time::timeout(READ_TIMEOUT, socket.recv(&mut recv_buf))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: server.to_string(),
            })?
            .map_err(|e| {
                DomainError::IoError(format!(
                    "Failed to receive UDP response from {}: {}",
                    server, e
                ))
            })?;

        trace!(server = %server, bytes_received, "UDP response received");

        let reply = ResponseParser::parse(&recv_buf[..bytes_received])?;
        ResponseParser::validate(&message, &reply)?;

        Ok(UpstreamResponse::new(reply, server))
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}
