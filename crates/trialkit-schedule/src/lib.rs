pub mod feedback;
pub mod iti;
pub mod practice;

pub use feedback::{AssessmentThresholds, BlockIssue, BlockSummary, TrialRecord};
pub use iti::ItiSchedule;
pub use practice::{PracticeDecision, PracticeGate};
