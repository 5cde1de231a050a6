//! Practice-to-test gating.
//!
//! A practice block repeats until accuracy clears the threshold, with a
//! hard cap on repeats so a struggling participant still reaches the
//! test phase.

use serde::{Deserialize, Serialize};

/// Whether to advance to the test phase or repeat practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PracticeDecision {
    Advance,
    Repeat,
}

/// Gate configuration and repeat bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeGate {
    /// Accuracy that must be strictly exceeded to advance. Typical: 0.75.
    pub accuracy_threshold: f64,
    /// Repeats after which the gate advances regardless of accuracy.
    pub max_repeats: u32,
    /// Completed practice blocks so far.
    pub repeats: u32,
}

impl Default for PracticeGate {
    fn default() -> Self {
        Self {
            accuracy_threshold: 0.75,
            max_repeats: 3,
            repeats: 0,
        }
    }
}

impl PracticeGate {
    /// Evaluate a finished practice block. Blocks with no scored trials
    /// count as zero accuracy.
    pub fn evaluate(&mut self, correct: usize, total: usize) -> PracticeDecision {
        self.repeats += 1;
        let accuracy = if total == 0 {
            0.0
        } else {
            correct as f64 / total as f64
        };
        if accuracy > self.accuracy_threshold || self.repeats >= self.max_repeats {
            PracticeDecision::Advance
        } else {
            PracticeDecision::Repeat
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advances_above_threshold() {
        let mut gate = PracticeGate::default();
        assert_eq!(gate.evaluate(16, 20), PracticeDecision::Advance);
    }

    #[test]
    fn test_repeats_at_or_below_threshold() {
        let mut gate = PracticeGate::default();
        // Exactly 0.75 does not clear a strict threshold.
        assert_eq!(gate.evaluate(15, 20), PracticeDecision::Repeat);
        assert_eq!(gate.evaluate(10, 20), PracticeDecision::Repeat);
    }

    #[test]
    fn test_repeat_cap_forces_advance() {
        let mut gate = PracticeGate::default();
        assert_eq!(gate.evaluate(0, 20), PracticeDecision::Repeat);
        assert_eq!(gate.evaluate(0, 20), PracticeDecision::Repeat);
        assert_eq!(gate.evaluate(0, 20), PracticeDecision::Advance);
    }

    #[test]
    fn test_empty_block_counts_as_zero_accuracy() {
        let mut gate = PracticeGate::default();
        assert_eq!(gate.evaluate(0, 0), PracticeDecision::Repeat);
    }
}
