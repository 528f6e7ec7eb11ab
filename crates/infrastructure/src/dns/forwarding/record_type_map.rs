//! Mapping between the domain `RecordType`/`RecordClass` and their
//! `hickory_proto` counterparts.

use hickory_proto::rr::{DNSClass, RecordType as HickoryRecordType};
use rootward_domain::{RecordClass, RecordType};

/// Bidirectional mapper between domain and hickory record types
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert domain RecordType → hickory RecordType (for building queries)
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::SOA => HickoryRecordType::SOA,
            RecordType::PTR => HickoryRecordType::PTR,
            RecordType::MX => HickoryRecordType::MX,
            RecordType::TXT => HickoryRecordType::TXT,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::SRV => HickoryRecordType::SRV,
            RecordType::DS => HickoryRecordType::DS,
            RecordType::DNSKEY => HickoryRecordType::DNSKEY,
            RecordType::SVCB => HickoryRecordType::SVCB,
            RecordType::HTTPS => HickoryRecordType::HTTPS,
            RecordType::CAA => HickoryRecordType::CAA,
            RecordType::Other(code) => HickoryRecordType::from(*code),
        }
    }

    /// Convert hickory RecordType → domain RecordType (for incoming queries)
    ///
    /// Types without a domain name come back as `RecordType::Other`.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        RecordType::from_code(u16::from(hickory_type))
    }

    pub fn class_to_hickory(record_class: &RecordClass) -> DNSClass {
        match record_class {
            RecordClass::IN => DNSClass::IN,
            RecordClass::CH => DNSClass::CH,
            RecordClass::HS => DNSClass::HS,
            RecordClass::ANY => DNSClass::ANY,
        }
    }

    pub fn class_from_hickory(class: DNSClass) -> Option<RecordClass> {
        match class {
            DNSClass::IN => Some(RecordClass::IN),
            DNSClass::CH => Some(RecordClass::CH),
            DNSClass::HS => Some(RecordClass::HS),
            DNSClass::ANY => Some(RecordClass::ANY),
            _ => None,
        }
    }
}
