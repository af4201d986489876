use serde::Serialize;

/// Configuration for one alias run.
#[derive(Debug, Clone, Default)]
pub struct AliasInjector {
    /// Literal prefix removed from record names before deriving their alias.
    pub prefix: String,
}

impl AliasInjector {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

/// Number of aliases appended during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AliasStats {
    pub records: usize,
    pub fields: usize,
}
