pub mod builders;
pub mod dns_server_mock;
pub mod mock_transport;

#[allow(unused_imports)]
pub use builders::*;
#[allow(unused_imports)]
pub use dns_server_mock::{MockBehavior, MockDnsServer};
#[allow(unused_imports)]
pub use mock_transport::{ScriptedReply, ScriptedTransport};
