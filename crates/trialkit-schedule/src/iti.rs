//! Inter-trial-interval schedules.
//!
//! Each trial's ITI is a fixed base plus the next entry of a
//! pre-optimized jitter list (produced offline alongside the trial
//! order). Practice and test phases use different jitter lists; the
//! schedule is swapped at the phase boundary.

use std::collections::VecDeque;

/// A consumable ITI schedule: fixed base plus a jitter queue.
#[derive(Debug, Clone)]
pub struct ItiSchedule {
    base_ms: u32,
    jitter_ms: VecDeque<u32>,
}

impl ItiSchedule {
    pub fn new(base_ms: u32, jitter_ms: impl IntoIterator<Item = u32>) -> Self {
        Self {
            base_ms,
            jitter_ms: jitter_ms.into_iter().collect(),
        }
    }

    /// Build from jitters expressed in seconds, as the design files
    /// store them.
    pub fn from_seconds(base_ms: u32, jitter_s: &[f64]) -> Self {
        Self::new(
            base_ms,
            jitter_s.iter().map(|&s| (s * 1000.0).round() as u32),
        )
    }

    /// The next trial's ITI. Once the jitter list is drained the bare
    /// base interval is returned.
    pub fn next_ms(&mut self) -> u32 {
        self.base_ms + self.jitter_ms.pop_front().unwrap_or(0)
    }

    /// Jitter entries left.
    pub fn remaining(&self) -> usize {
        self.jitter_ms.len()
    }

    /// Swap in a new jitter list, keeping the base (practice → test
    /// handoff).
    pub fn reset_with(&mut self, jitter_ms: impl IntoIterator<Item = u32>) {
        self.jitter_ms = jitter_ms.into_iter().collect();
    }
}
