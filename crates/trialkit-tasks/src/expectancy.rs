//! Condition algebra for the dot-pattern expectancy protocol.
//!
//! Each trial pairs a cue with a probe; only the valid-cue/valid-probe
//! pairing (AX) takes the target response. The design optimizer encodes
//! conditions as indices 0..=3.

use serde::{Deserialize, Serialize};

/// Cue-probe pairing. 'A' is the valid cue, 'X' the valid probe; 'B'
/// and 'Y' stand for any invalid cue/probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    Ax,
    Ay,
    Bx,
    By,
}

impl Condition {
    /// Decode the design file's 0..=3 coding. Out-of-range is a design
    /// file defect, surfaced as `None`.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Condition::Ax),
            1 => Some(Condition::Ay),
            2 => Some(Condition::Bx),
            3 => Some(Condition::By),
            _ => None,
        }
    }

    /// Whether this trial shows the valid cue.
    pub fn cue_is_target(self) -> bool {
        matches!(self, Condition::Ax | Condition::Ay)
    }

    /// Whether this trial shows the valid probe.
    pub fn probe_is_target(self) -> bool {
        matches!(self, Condition::Ax | Condition::Bx)
    }

    /// The correct key: target key on AX only, nontarget key otherwise.
    pub fn correct_response<K: Copy>(self, target_key: K, nontarget_key: K) -> K {
        if self == Condition::Ax {
            target_key
        } else {
            nontarget_key
        }
    }
}

/// The fixed practice multiset: AX-heavy, matching the test-phase
/// proportions, shuffled by the caller.
pub fn practice_conditions() -> Vec<Condition> {
    vec![
        Condition::Ax,
        Condition::Ax,
        Condition::Ax,
        Condition::Ax,
        Condition::Ay,
        Condition::Bx,
        Condition::By,
        Condition::Ay,
        Condition::Bx,
        Condition::By,
    ]
}
