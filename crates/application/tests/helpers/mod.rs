mod mock_resolver;

pub use mock_resolver::{answer_a, MockDnsResolver};
