pub mod counterbalance;
pub mod error;
pub mod pool;
pub mod sequence;
pub mod staircase;

pub use error::ConfigError;
pub use sequence::{CategorySpec, SequenceGenerator, SequenceSpec, TrialPlan};
pub use staircase::{Staircase, StaircaseConfig, TrialOutcome};
