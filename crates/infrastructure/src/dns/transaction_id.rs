//! Transaction identifiers for upstream queries.
//!
//! Every attempt draws a fresh 16-bit id from the operating system CSPRNG so
//! an off-path attacker cannot predict the id of a pending query.

use ring::rand::{SecureRandom, SystemRandom};
use rootward_domain::DomainError;

pub trait TransactionIdSource: Send + Sync {
    fn next_id(&self) -> Result<u16, DomainError>;
}

#[derive(Clone)]
pub struct SecureIdGenerator {
    rng: SystemRandom,
}

impl SecureIdGenerator {
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }
}

impl Default for SecureIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionIdSource for SecureIdGenerator {
    fn next_id(&self) -> Result<u16, DomainError> {
        let mut buf = [0u8; 2];
        self.rng
            .fill(&mut buf)
            .map_err(|_| DomainError::RandomIdUnavailable)?;
        Ok(u16::from_be_bytes(buf))
    }
}
