//! rootward domain layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod dns_request;
pub mod errors;
pub mod root_hints;
pub mod server_set;

pub use config::{CliOverrides, Config, GluePolicy, ResolverConfig};
pub use dns_query::DnsQuery;
pub use dns_record::{RecordClass, RecordType};
pub use dns_request::DnsRequest;
pub use errors::DomainError;
pub use root_hints::{RootHints, ROOT_SERVERS};
pub use server_set::ServerSet;
