//! Between-block performance assessment.
//!
//! After each test block the trial records are summarized (median go RT,
//! go accuracy, omission rate, stop-success rate) and checked against
//! fixed thresholds. Each violated threshold yields one issue the
//! presentation layer turns into feedback text.

use serde::{Deserialize, Serialize};

/// One scored test trial.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialRecord {
    /// Trial category ("go", "stop", "ignore", ...).
    pub condition: String,
    /// Response time, `None` when no response was emitted.
    pub rt_ms: Option<u32>,
    /// Whether the emitted response (or withheld response on signal
    /// trials) was correct.
    pub correct: bool,
}

/// Aggregate block statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockSummary {
    /// Median RT over answered go trials, `None` if none were answered.
    pub median_go_rt_ms: Option<u32>,
    /// Correct fraction of answered go trials.
    pub go_accuracy: f64,
    /// Fraction of go trials with no response.
    pub missed_rate: f64,
    /// Fraction of signal trials with no response.
    pub stop_success_rate: f64,
}

impl BlockSummary {
    pub fn from_records(records: &[TrialRecord], signal_condition: &str) -> Self {
        let mut go_rts: Vec<u32> = Vec::new();
        let mut go_total = 0usize;
        let mut go_answered_correct = 0usize;
        let mut go_missed = 0usize;
        let mut signal_total = 0usize;
        let mut signal_withheld = 0usize;

        for record in records {
            if record.condition == signal_condition {
                signal_total += 1;
                if record.rt_ms.is_none() {
                    signal_withheld += 1;
                }
            } else if record.condition == "go" {
                go_total += 1;
                match record.rt_ms {
                    Some(rt) => {
                        go_rts.push(rt);
                        if record.correct {
                            go_answered_correct += 1;
                        }
                    }
                    None => go_missed += 1,
                }
            }
        }

        let median_go_rt_ms = median(&mut go_rts);
        let answered = go_total - go_missed;
        Self {
            median_go_rt_ms,
            go_accuracy: ratio(go_answered_correct, answered),
            missed_rate: ratio(go_missed, go_total),
            stop_success_rate: ratio(signal_withheld, signal_total),
        }
    }
}

fn ratio(num: usize, denom: usize) -> f64 {
    if denom == 0 {
        0.0
    } else {
        num as f64 / denom as f64
    }
}

/// Median of the given RTs; averages the middle pair for even counts.
fn median(rts: &mut [u32]) -> Option<u32> {
    if rts.is_empty() {
        return None;
    }
    rts.sort_unstable();
    let mid = rts.len() / 2;
    if rts.len() % 2 == 1 {
        Some(rts[mid])
    } else {
        Some((rts[mid - 1] + rts[mid]) / 2)
    }
}

/// A threshold the block violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockIssue {
    /// Median go RT above the slow-response ceiling.
    RespondingTooSlowly,
    /// Median go RT drifted up relative to the previous block.
    SlowingDown,
    /// Too many go trials without any response.
    MissingResponses,
    /// Go accuracy below the floor.
    InaccurateResponding,
    /// Stopping on too few signal trials.
    StoppingTooRarely,
    /// Stopping on too many signal trials (slowing to wait for the
    /// signal).
    StoppingTooOften,
}

/// Fixed thresholds the blocks are assessed against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentThresholds {
    pub max_median_rt_ms: u32,
    pub max_rt_drift_ms: u32,
    pub max_missed_rate: f64,
    pub min_go_accuracy: f64,
    pub min_stop_success: f64,
    pub max_stop_success: f64,
}

impl Default for AssessmentThresholds {
    fn default() -> Self {
        Self {
            max_median_rt_ms: 1000,
            max_rt_drift_ms: 75,
            max_missed_rate: 0.1,
            min_go_accuracy: 0.8,
            min_stop_success: 0.2,
            max_stop_success: 0.6,
        }
    }
}

impl AssessmentThresholds {
    /// Check a block summary, optionally against the previous block's
    /// median RT. Returns every violated threshold (empty = clean block).
    pub fn assess(
        &self,
        summary: &BlockSummary,
        previous_median_rt_ms: Option<u32>,
    ) -> Vec<BlockIssue> {
        let mut issues = Vec::new();

        if let Some(median_rt) = summary.median_go_rt_ms {
            if median_rt > self.max_median_rt_ms {
                issues.push(BlockIssue::RespondingTooSlowly);
            }
            if let Some(previous) = previous_median_rt_ms {
                if median_rt > previous + self.max_rt_drift_ms {
                    issues.push(BlockIssue::SlowingDown);
                }
            }
        }
        if summary.missed_rate > self.max_missed_rate {
            issues.push(BlockIssue::MissingResponses);
        }
        if summary.go_accuracy < self.min_go_accuracy {
            issues.push(BlockIssue::InaccurateResponding);
        }
        if summary.stop_success_rate < self.min_stop_success {
            issues.push(BlockIssue::StoppingTooRarely);
        } else if summary.stop_success_rate > self.max_stop_success {
            issues.push(BlockIssue::StoppingTooOften);
        }

        issues
    }
}
