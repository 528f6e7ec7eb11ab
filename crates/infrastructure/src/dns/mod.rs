pub mod forwarding;
pub mod resolver;
pub mod server;
pub mod transaction_id;
pub mod transport;

pub use forwarding::{MessageBuilder, RecordTypeMapper, ResponseParser, UpstreamResponse};
pub use resolver::{IterativeResolver, ResolutionBudget};
pub use server::DnsPacketHandler;
pub use transaction_id::{SecureIdGenerator, TransactionIdSource};
pub use transport::{udp::UdpTransport, UpstreamTransport};
