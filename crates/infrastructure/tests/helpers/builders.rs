#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::rdata::{A, NS, SOA};
use hickory_proto::rr::{DNSClass, Name, RData, Record, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

pub fn name(s: &str) -> Name {
    Name::from_str(s).unwrap()
}

pub fn ip(a: u8, b: u8, c: u8, d: u8) -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(a, b, c, d))
}

pub fn a_record(owner: &str, addr: Ipv4Addr) -> Record {
    Record::from_rdata(name(owner), 300, RData::A(A(addr)))
}

pub fn ns_record(zone: &str, ns: &str) -> Record {
    Record::from_rdata(name(zone), 172800, RData::NS(NS(name(ns))))
}

pub fn soa_record(zone: &str) -> Record {
    Record::from_rdata(
        name(zone),
        3600,
        RData::SOA(SOA::new(
            name(&format!("ns1.{}", zone)),
            name(&format!("hostmaster.{}", zone)),
            2024010101,
            7200,
            3600,
            1209600,
            300,
        )),
    )
}

/// Upstream reply fixture.
pub struct ResponseBuilder {
    message: Message,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        let mut message = Message::new();
        message.set_message_type(MessageType::Response);
        Self { message }
    }

    pub fn authoritative(mut self) -> Self {
        self.message.set_authoritative(true);
        self
    }

    pub fn rcode(mut self, code: ResponseCode) -> Self {
        self.message.set_response_code(code);
        self
    }

    pub fn answer(mut self, record: Record) -> Self {
        self.message.add_answer(record);
        self
    }

    pub fn authority(mut self, record: Record) -> Self {
        self.message.add_name_server(record);
        self
    }

    pub fn additional(mut self, record: Record) -> Self {
        self.message.add_additional(record);
        self
    }

    pub fn build(self) -> Message {
        self.message
    }
}

impl Default for ResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Authoritative answer carrying one `A` record for `owner`.
pub fn authoritative_a(owner: &str, addr: Ipv4Addr) -> Message {
    ResponseBuilder::new()
        .authoritative()
        .answer(a_record(owner, addr))
        .build()
}

/// Referral for `zone` to `nameservers`, each with optional IPv4 glue.
pub fn referral(zone: &str, nameservers: &[(&str, Option<Ipv4Addr>)]) -> Message {
    let mut builder = ResponseBuilder::new();
    for (ns, _) in nameservers {
        builder = builder.authority(ns_record(zone, ns));
    }
    for (ns, glue) in nameservers {
        if let Some(addr) = glue {
            builder = builder.additional(a_record(ns, *addr));
        }
    }
    builder.build()
}

/// Client query datagram as it arrives on the listener.
pub fn client_query(id: u16, domain: &str, record_type: RecordType, rd: bool) -> Vec<u8> {
    let mut query = Query::query(name(domain), record_type);
    query.set_query_class(DNSClass::IN);

    let mut message = Message::new();
    message
        .set_id(id)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(rd)
        .add_query(query);
    encode(&message)
}

pub fn encode(message: &Message) -> Vec<u8> {
    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    message.emit(&mut encoder).unwrap();
    buf
}
