use rootward_domain::{DomainError, RootHints, ServerSet};
use std::net::IpAddr;

fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

#[test]
fn test_insert_keeps_order_and_skips_duplicates() {
    let mut set = ServerSet::new();
    assert!(set.insert(ip("192.0.2.1")));
    assert!(set.insert(ip("192.0.2.2")));
    assert!(!set.insert(ip("192.0.2.1")));

    assert_eq!(set.len(), 2);
    assert_eq!(set.as_slice(), &[ip("192.0.2.1"), ip("192.0.2.2")]);
}

#[test]
fn test_rotated_wraps_around() {
    let set: ServerSet = vec![ip("192.0.2.1"), ip("192.0.2.2"), ip("192.0.2.3")]
        .into_iter()
        .collect();

    assert_eq!(set.rotated(0), set);
    assert_eq!(
        set.rotated(1).as_slice(),
        &[ip("192.0.2.2"), ip("192.0.2.3"), ip("192.0.2.1")]
    );
    assert_eq!(set.rotated(4), set.rotated(1));
}

#[test]
fn test_rotated_empty_set() {
    let set = ServerSet::new();
    assert!(set.rotated(3).is_empty());
}

#[test]
fn test_display() {
    let set = ServerSet::from_addrs(vec![ip("192.0.2.1"), ip("2001:db8::1")]);
    assert_eq!(set.to_string(), "[192.0.2.1, 2001:db8::1]");
}

#[test]
fn test_root_hints_server_set() {
    let set = RootHints::builtin().server_set();
    assert_eq!(set.len(), 13);
    assert!(set.contains(&ip("198.41.0.4")));
    assert!(set.contains(&ip("202.12.27.33")));
}

#[test]
fn test_error_classification() {
    assert!(DomainError::TransportAllServersUnreachable.is_transport_error());
    assert!(DomainError::RandomIdUnavailable.is_transport_error());
    assert!(DomainError::UpstreamServerError {
        server: "192.0.2.1".into(),
        rcode: "SERVFAIL".into()
    }
    .is_transport_error());
    assert!(!DomainError::TransportNoCandidates.is_transport_error());
    assert!(DomainError::QuestionCountMismatch {
        expected: 1,
        actual: 0
    }
    .is_transport_error());
    assert!(!DomainError::DescentBudgetExhausted.is_transport_error());
    assert!(!DomainError::NestingTooDeep(4).is_transport_error());
}
