use super::{DnsQuery, RecordClass, RecordType};
use std::net::IpAddr;
use std::sync::Arc;

/// A decoded client question together with who asked it.
#[derive(Debug, Clone)]
pub struct DnsRequest {
    pub id: u16,
    pub domain: Arc<str>,
    pub record_type: RecordType,
    pub record_class: RecordClass,
    pub client_ip: IpAddr,
}

impl DnsRequest {
    pub fn new(
        id: u16,
        domain: impl Into<Arc<str>>,
        record_type: RecordType,
        client_ip: IpAddr,
    ) -> Self {
        Self {
            id,
            domain: domain.into(),
            record_type,
            record_class: RecordClass::IN,
            client_ip,
        }
    }

    pub fn with_class(mut self, record_class: RecordClass) -> Self {
        self.record_class = record_class;
        self
    }

    pub fn to_query(&self) -> DnsQuery {
        DnsQuery::new(Arc::clone(&self.domain), self.record_type).with_class(self.record_class)
    }
}
