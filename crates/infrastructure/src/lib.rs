//! rootward infrastructure: wire codec, upstream transport, delegation walk
//! and the client packet handler
pub mod dns;
