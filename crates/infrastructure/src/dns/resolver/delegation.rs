//! Reading a referral: which nameservers the zone was handed to and which
//! of their addresses came along as glue.

use crate::dns::forwarding::UpstreamResponse;
use hickory_proto::rr::Name;
use rootward_domain::{GluePolicy, ServerSet};
use std::net::IpAddr;

/// Addresses to query next, taken from the glue of `response`.
///
/// `FirstMatch` stops at the first nameserver name (in authority order) that
/// has glue; `Aggregate` collects every glued address. Glue for names outside
/// `ns_names` is ignored. An empty set means the referral was glue-less.
pub fn glue_addresses(response: &UpstreamResponse, ns_names: &[Name], policy: GluePolicy) -> ServerSet {
    let mut next = ServerSet::new();

    for ns_name in ns_names {
        let glue = response.glue_for(ns_name);
        if glue.is_empty() {
            continue;
        }
        next.extend(glue.into_iter().map(IpAddr::V4));
        if policy == GluePolicy::FirstMatch {
            break;
        }
    }

    next
}
