/// Fatal setup-time errors. Raised at construction, never recovered.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("initial delay {delay_ms}ms outside bounds [{min_ms}, {max_ms}]")]
    DelayOutOfBounds {
        delay_ms: u32,
        min_ms: u32,
        max_ms: u32,
    },

    #[error("step size must be positive")]
    ZeroStep,

    #[error("lower bound {min_ms}ms exceeds upper bound {max_ms}ms")]
    InvertedBounds { min_ms: u32, max_ms: u32 },

    #[error("sequence position {position} names category index {index}, but only {count} categories are configured")]
    UnknownCategoryIndex {
        index: usize,
        position: usize,
        count: usize,
    },

    #[error("category '{category}' has zero quota")]
    ZeroQuota { category: String },

    #[error("category '{category}' has no source items")]
    EmptySource { category: String },
}
