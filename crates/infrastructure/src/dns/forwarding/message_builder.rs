//! DNS Message Builder
//!
//! Constructs iterative query messages in wire format using `hickory-proto`.
//! Recursion-desired is always cleared: every upstream we talk to is asked
//! only for what it knows itself.

use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::Name;
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use rootward_domain::{DnsQuery, DomainError};
use std::str::FromStr;

/// Plain DNS over UDP, no EDNS.
pub const MAX_DNS_MESSAGE_SIZE: usize = 512;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a single-question query message carrying `id`.
    ///
    /// The message has `OpCode::Query`, `MessageType::Query` and RD cleared.
    pub fn build_message(query: &DnsQuery, id: u16) -> Result<Message, DomainError> {
        let name = Self::parse_name(&query.domain)?;

        let mut question = Query::query(name, RecordTypeMapper::to_hickory(&query.record_type));
        question.set_query_class(RecordTypeMapper::class_to_hickory(&query.record_class));

        let mut message = Message::new();
        message
            .set_id(id)
            .set_message_type(MessageType::Query)
            .set_op_code(OpCode::Query)
            .set_recursion_desired(false)
            .add_query(question);

        Ok(message)
    }

    /// Build a query message and serialize it to wire format bytes
    pub fn build_query(query: &DnsQuery, id: u16) -> Result<Vec<u8>, DomainError> {
        let message = Self::build_message(query, id)?;
        Self::serialize_message(&message)
    }

    /// Serialize a Message to wire format bytes
    pub fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(MAX_DNS_MESSAGE_SIZE);
        let mut encoder = BinEncoder::new(&mut buf);

        message
            .emit(&mut encoder)
            .map_err(|e| DomainError::EncodeFailed(e.to_string()))?;

        Ok(buf)
    }

    pub fn parse_name(domain: &str) -> Result<Name, DomainError> {
        Name::from_str(domain).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", domain, e))
        })
    }
}
