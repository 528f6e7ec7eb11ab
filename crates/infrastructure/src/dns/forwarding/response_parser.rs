use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::{Name, RData, Record, RecordType};
use rootward_domain::DomainError;
use std::net::{IpAddr, Ipv4Addr};
use tracing::debug;

/// A validated upstream reply and the server that sent it.
///
/// Sections stay inside the decoded message; callers take what they need
/// through the accessors.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    message: Message,
    server: IpAddr,
}

impl UpstreamResponse {
    pub fn new(message: Message, server: IpAddr) -> Self {
        Self { message, server }
    }

    pub fn server(&self) -> IpAddr {
        self.server
    }

    pub fn id(&self) -> u16 {
        self.message.id()
    }

    pub fn authoritative(&self) -> bool {
        self.message.authoritative()
    }

    pub fn response_code(&self) -> ResponseCode {
        self.message.response_code()
    }

    pub fn answers(&self) -> &[Record] {
        self.message.answers()
    }

    pub fn authorities(&self) -> &[Record] {
        self.message.name_servers()
    }

    pub fn additionals(&self) -> &[Record] {
        self.message.additionals()
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    /// SERVFAIL, REFUSED, NOTIMP and FORMERR say nothing about the name.
    pub fn is_server_error(&self) -> bool {
        matches!(
            self.response_code(),
            ResponseCode::ServFail
                | ResponseCode::Refused
                | ResponseCode::NotImp
                | ResponseCode::FormErr
        )
    }

    /// Nameserver names from the NS records of the authority section, in
    /// message order, duplicates removed.
    pub fn delegation_names(&self) -> Vec<Name> {
        let mut names: Vec<Name> = Vec::new();
        for record in self.authorities() {
            if record.record_type() != RecordType::NS {
                continue;
            }
            if let Some(RData::NS(ns)) = record.data() {
                if !names.contains(&ns.0) {
                    names.push(ns.0.clone());
                }
            }
        }
        names
    }

    /// IPv4 glue for `ns_name` from the additional section.
    pub fn glue_for(&self, ns_name: &Name) -> Vec<Ipv4Addr> {
        self.additionals()
            .iter()
            .filter(|record| record.name() == ns_name)
            .filter_map(|record| match record.data() {
                Some(RData::A(a)) => Some(a.0),
                _ => None,
            })
            .collect()
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<Message, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        debug!(
            id = message.id(),
            rcode = ?message.response_code(),
            authoritative = message.authoritative(),
            answers = message.answers().len(),
            authority = message.name_servers().len(),
            additional = message.additionals().len(),
            "DNS response parsed"
        );

        Ok(message)
    }

    /// Check that `response` actually answers `query`.
    pub fn validate(query: &Message, response: &Message) -> Result<(), DomainError> {
        if response.message_type() != MessageType::Response {
            return Err(DomainError::InvalidDnsResponse(
                "QR bit not set in reply".to_string(),
            ));
        }

        if response.id() != query.id() {
            return Err(DomainError::TransactionIdMismatch {
                expected: query.id(),
                actual: response.id(),
            });
        }

        if response.queries().len() != query.queries().len() {
            return Err(DomainError::QuestionCountMismatch {
                expected: query.queries().len(),
                actual: response.queries().len(),
            });
        }

        Ok(())
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
