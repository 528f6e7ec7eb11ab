use serde::{Deserialize, Serialize};

/// How glue addresses from an ADDITIONAL section become the next server set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GluePolicy {
    /// Addresses of the first NS name (in authority order) that has glue.
    #[default]
    FirstMatch,
    /// Every glued address of every NS name.
    Aggregate,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Failed transport attempts tolerated per delegation level.
    #[serde(default = "default_retry_budget")]
    pub retry_budget: u32,

    /// Delegation descents allowed for one client resolution, nested
    /// nameserver lookups included.
    #[serde(default = "default_descent_budget")]
    pub descent_budget: u32,

    /// Depth limit for glue-less nameserver address lookups.
    #[serde(default = "default_max_nesting_depth")]
    pub max_nesting_depth: u32,

    #[serde(default)]
    pub glue_policy: GluePolicy,

    /// Destination port for upstream queries.
    #[serde(default = "default_upstream_port")]
    pub upstream_port: u16,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            retry_budget: default_retry_budget(),
            descent_budget: default_descent_budget(),
            max_nesting_depth: default_max_nesting_depth(),
            glue_policy: GluePolicy::default(),
            upstream_port: default_upstream_port(),
        }
    }
}

fn default_retry_budget() -> u32 {
    3
}

fn default_descent_budget() -> u32 {
    24
}

fn default_max_nesting_depth() -> u32 {
    4
}

fn default_upstream_port() -> u16 {
    53
}
