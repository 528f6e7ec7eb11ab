//! Built-in root server addresses.
//!
//! A fresh resolution starts from these. The list is fixed at compile time and
//! never reloaded; callers receive it through [`RootHints`] so tests can inject
//! their own starting set.

use super::ServerSet;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

/// IPv4 addresses of `a.root-servers.net` through `m.root-servers.net`.
pub const ROOT_SERVERS: [Ipv4Addr; 13] = [
    Ipv4Addr::new(198, 41, 0, 4),
    Ipv4Addr::new(170, 247, 170, 2),
    Ipv4Addr::new(192, 33, 4, 12),
    Ipv4Addr::new(199, 7, 91, 13),
    Ipv4Addr::new(192, 203, 230, 10),
    Ipv4Addr::new(192, 5, 5, 241),
    Ipv4Addr::new(192, 112, 36, 4),
    Ipv4Addr::new(198, 97, 190, 53),
    Ipv4Addr::new(192, 36, 148, 17),
    Ipv4Addr::new(192, 58, 128, 30),
    Ipv4Addr::new(193, 0, 14, 129),
    Ipv4Addr::new(199, 7, 83, 42),
    Ipv4Addr::new(202, 12, 27, 33),
];

/// Read-only, cheaply clonable starting server set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootHints {
    servers: Arc<[IpAddr]>,
}

impl RootHints {
    pub fn builtin() -> Self {
        Self {
            servers: ROOT_SERVERS.iter().copied().map(IpAddr::V4).collect(),
        }
    }

    /// Substitute hints, e.g. a mock root in tests.
    pub fn from_addrs(addrs: impl IntoIterator<Item = IpAddr>) -> Self {
        Self {
            servers: addrs.into_iter().collect(),
        }
    }

    pub fn addresses(&self) -> &[IpAddr] {
        &self.servers
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    pub fn server_set(&self) -> ServerSet {
        ServerSet::from_addrs(self.servers.iter().copied())
    }
}

impl Default for RootHints {
    fn default() -> Self {
        Self::builtin()
    }
}
