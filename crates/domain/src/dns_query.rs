use super::{RecordClass, RecordType};
use std::fmt;
use std::sync::Arc;

/// The question being resolved: name, type and class.
///
/// Immutable once built; every query attempt for one resolution embeds the
/// same `DnsQuery`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
    pub record_class: RecordClass,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
            record_class: RecordClass::IN,
        }
    }

    pub fn with_class(mut self, record_class: RecordClass) -> Self {
        self.record_class = record_class;
        self
    }

    /// Address lookup for a nameserver name found in a bare delegation.
    pub fn nameserver_address(ns_name: impl Into<Arc<str>>) -> Self {
        Self::new(ns_name, RecordType::A)
    }
}

impl fmt::Display for DnsQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.domain, self.record_class, self.record_type
        )
    }
}
