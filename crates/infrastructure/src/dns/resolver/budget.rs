use rootward_domain::{DomainError, ResolverConfig};

/// Descent and nesting allowance for one client resolution.
///
/// A single budget is threaded through the top-level walk and every nested
/// nameserver lookup it triggers, so the total work for one client question
/// is bounded regardless of how the delegations are shaped.
#[derive(Debug, Clone)]
pub struct ResolutionBudget {
    descents_left: u32,
    descents_used: u32,
    max_nesting_depth: u32,
}

impl ResolutionBudget {
    pub fn new(descent_budget: u32, max_nesting_depth: u32) -> Self {
        Self {
            descents_left: descent_budget,
            descents_used: 0,
            max_nesting_depth,
        }
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(config.descent_budget, config.max_nesting_depth)
    }

    /// Spend one descent; fails once the allowance is gone.
    pub fn take_descent(&mut self) -> Result<(), DomainError> {
        if self.descents_left == 0 {
            return Err(DomainError::DescentBudgetExhausted);
        }
        self.descents_left -= 1;
        self.descents_used += 1;
        Ok(())
    }

    pub fn check_depth(&self, depth: u32) -> Result<(), DomainError> {
        if depth > self.max_nesting_depth {
            return Err(DomainError::NestingTooDeep(self.max_nesting_depth));
        }
        Ok(())
    }

    pub fn descents_used(&self) -> u32 {
        self.descents_used
    }

    pub fn is_exhausted(&self) -> bool {
        self.descents_left == 0
    }
}
