//! Cue/task resolution for the task-switching protocol.
//!
//! Each trial is labeled with a task transition and a cue transition.
//! On "stay" the task repeats; a cue "switch" flips to the task's other
//! cue. On a task "switch" the other task takes over and its cue is
//! drawn at random. The cue-target interval rides along unchanged.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Transition relative to the previous trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwitchKind {
    Stay,
    Switch,
}

/// One trial's transition labels, as drawn from the counterbalanced set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CueTrial {
    pub task_switch: SwitchKind,
    pub cue_switch: SwitchKind,
    /// Cue-target interval for this trial.
    pub cti_ms: u32,
}

/// The full factorial base set: task × cue × CTI.
pub fn switch_set(ctis_ms: &[u32]) -> Vec<CueTrial> {
    let kinds = [SwitchKind::Stay, SwitchKind::Switch];
    let mut set = Vec::with_capacity(4 * ctis_ms.len());
    for task_switch in kinds {
        for cue_switch in kinds {
            for &cti_ms in ctis_ms {
                set.push(CueTrial {
                    task_switch,
                    cue_switch,
                    cti_ms,
                });
            }
        }
    }
    set
}

/// A task with its two interchangeable cue words.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskCues {
    pub task: String,
    pub cues: [String; 2],
}

/// What the upcoming trial actually shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCue {
    pub task: String,
    pub cue: String,
    pub cti_ms: u32,
}

/// Tracks the current task and cue across trials.
#[derive(Debug, Clone)]
pub struct SwitchResolver {
    tasks: [TaskCues; 2],
    task_index: usize,
    cue_index: usize,
}

impl SwitchResolver {
    /// Start on the given task/cue (drawn at random by the caller, once
    /// per run).
    pub fn new(tasks: [TaskCues; 2], task_index: usize, cue_index: usize) -> Self {
        Self {
            tasks,
            task_index: task_index % 2,
            cue_index: cue_index % 2,
        }
    }

    pub fn current_task(&self) -> &str {
        &self.tasks[self.task_index].task
    }

    /// Apply one trial's transition labels and return what to present.
    pub fn resolve<R: Rng>(&mut self, trial: CueTrial, rng: &mut R) -> ResolvedCue {
        match trial.task_switch {
            SwitchKind::Stay => {
                if trial.cue_switch == SwitchKind::Switch {
                    self.cue_index = 1 - self.cue_index;
                }
            }
            SwitchKind::Switch => {
                self.task_index = 1 - self.task_index;
                self.cue_index = usize::from(rng.gen::<bool>());
            }
        }
        let task = &self.tasks[self.task_index];
        ResolvedCue {
            task: task.task.clone(),
            cue: task.cues[self.cue_index].clone(),
            cti_ms: trial.cti_ms,
        }
    }
}
