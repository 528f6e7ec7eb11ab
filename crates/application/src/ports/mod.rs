mod dns_resolver;

pub use dns_resolver::{DnsResolution, DnsResolver, ResolutionOutcome};

// Re-export for convenience
pub use rootward_domain::{DnsQuery, ServerSet};
