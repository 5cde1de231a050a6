//! Stop-signal session wiring.
//!
//! Composes the sequence generator with the staircase: the presentation
//! loop pulls one trial at a time, runs it, and reports the outcome.
//! Only trials of the staircase's signal condition carry a stop-signal
//! delay; the staircase sees every outcome and ignores the rest itself.

use trialkit_core::{
    ConfigError, SequenceGenerator, SequenceSpec, Staircase, StaircaseConfig, TrialOutcome,
    TrialPlan,
};

/// One upcoming stop-signal trial: the plan plus, for signal trials,
/// the delay to schedule the stop cue at.
#[derive(Debug, Clone, PartialEq)]
pub struct StopTrial<T> {
    pub plan: TrialPlan<T>,
    pub ssd_ms: Option<u32>,
}

/// A full stop-signal task run: trial supply plus adaptive delay.
#[derive(Debug)]
pub struct StopSignalSession<T> {
    generator: SequenceGenerator<T>,
    staircase: Staircase,
    signal_condition: String,
}

impl<T: Clone> StopSignalSession<T> {
    pub fn new(
        sequence: SequenceSpec<T>,
        staircase: StaircaseConfig,
    ) -> Result<Self, ConfigError> {
        let signal_condition = staircase.signal_condition.clone();
        Ok(Self {
            generator: SequenceGenerator::new(sequence)?,
            staircase: Staircase::new(staircase)?,
            signal_condition,
        })
    }

    /// Build with a caller-supplied generator (deterministic tests).
    pub fn from_parts(generator: SequenceGenerator<T>, staircase: Staircase) -> Self {
        let signal_condition = staircase.signal_condition().to_string();
        Self {
            generator,
            staircase,
            signal_condition,
        }
    }

    /// The next trial to present, or `None` when the run is complete.
    pub fn next_trial(&mut self) -> Option<StopTrial<T>> {
        let plan = self.generator.next()?;
        let ssd_ms = (plan.category == self.signal_condition).then(|| self.staircase.delay_ms());
        Some(StopTrial { plan, ssd_ms })
    }

    /// Report the finished trial's outcome. Non-signal conditions are
    /// no-ops on the delay.
    pub fn record(&mut self, condition: &str, outcome: TrialOutcome) {
        self.staircase.update(condition, outcome);
    }

    /// Current stop-signal delay.
    pub fn delay_ms(&self) -> u32 {
        self.staircase.delay_ms()
    }

    /// Trials left in the run.
    pub fn remaining(&self) -> usize {
        self.generator.remaining()
    }
}
