//! Adaptive staircase for the stop-signal delay.
//!
//! A strict one-up/one-down staircase: every successful inhibition on a
//! signal trial lengthens the delay by one step (stopping gets harder),
//! every failed inhibition shortens it. The delay converges toward the
//! 50% crossover of the inhibition psychometric function.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Outcome of the controlled response on a single trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrialOutcome {
    /// No response was emitted — the manipulation succeeded.
    Inhibited,
    /// A response was emitted despite the signal.
    Responded,
}

/// Configuration for the staircase controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaircaseConfig {
    /// Delay at task start, in milliseconds.
    pub initial_delay_ms: u32,
    /// Fixed increment/decrement per eligible outcome.
    pub step_ms: u32,
    /// Inclusive lower bound the delay never crosses.
    pub min_delay_ms: u32,
    /// Inclusive upper bound the delay never crosses.
    pub max_delay_ms: u32,
    /// Trial condition that moves the staircase. All other conditions
    /// leave the delay untouched.
    pub signal_condition: String,
}

impl Default for StaircaseConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: 250,
            step_ms: 50,
            min_delay_ms: 0,
            max_delay_ms: 1000,
            signal_condition: "stop".to_string(),
        }
    }
}

/// The staircase controller. One instance per task, mutated once per
/// reported outcome, never reset mid-task.
#[derive(Debug, Clone)]
pub struct Staircase {
    delay_ms: u32,
    config: StaircaseConfig,
}

impl Staircase {
    pub fn new(config: StaircaseConfig) -> Result<Self, ConfigError> {
        if config.min_delay_ms > config.max_delay_ms {
            return Err(ConfigError::InvertedBounds {
                min_ms: config.min_delay_ms,
                max_ms: config.max_delay_ms,
            });
        }
        if config.step_ms == 0 {
            return Err(ConfigError::ZeroStep);
        }
        if config.initial_delay_ms < config.min_delay_ms
            || config.initial_delay_ms > config.max_delay_ms
        {
            return Err(ConfigError::DelayOutOfBounds {
                delay_ms: config.initial_delay_ms,
                min_ms: config.min_delay_ms,
                max_ms: config.max_delay_ms,
            });
        }

        Ok(Self {
            delay_ms: config.initial_delay_ms,
            config,
        })
    }

    /// Current delay, read once per eligible trial to parametrize it.
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// The condition whose outcomes move this staircase.
    pub fn signal_condition(&self) -> &str {
        &self.config.signal_condition
    }

    /// Report a trial outcome. Only trials of the configured signal
    /// condition move the delay; bounds are held, never crossed.
    pub fn update(&mut self, condition: &str, outcome: TrialOutcome) {
        if condition != self.config.signal_condition {
            return;
        }
        match outcome {
            TrialOutcome::Inhibited => {
                if self.delay_ms < self.config.max_delay_ms {
                    self.delay_ms =
                        (self.delay_ms + self.config.step_ms).min(self.config.max_delay_ms);
                }
            }
            TrialOutcome::Responded => {
                if self.delay_ms > self.config.min_delay_ms {
                    self.delay_ms = self
                        .delay_ms
                        .saturating_sub(self.config.step_ms)
                        .max(self.config.min_delay_ms);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staircase() -> Staircase {
        Staircase::new(StaircaseConfig::default()).unwrap()
    }

    #[test]
    fn test_inhibition_raises_delay_by_one_step() {
        let mut s = staircase();
        s.update("stop", TrialOutcome::Inhibited);
        assert_eq!(s.delay_ms(), 300);
    }

    #[test]
    fn test_response_lowers_delay_by_one_step() {
        let mut s = staircase();
        s.update("stop", TrialOutcome::Inhibited);
        s.update("stop", TrialOutcome::Responded);
        assert_eq!(s.delay_ms(), 250);
    }

    #[test]
    fn test_other_conditions_never_move_the_delay() {
        let mut s = staircase();
        s.update("go", TrialOutcome::Inhibited);
        s.update("ignore", TrialOutcome::Responded);
        assert_eq!(s.delay_ms(), 250);
    }

    #[test]
    fn test_delay_holds_at_upper_bound() {
        let mut s = staircase();
        for _ in 0..100 {
            s.update("stop", TrialOutcome::Inhibited);
            assert!(s.delay_ms() <= 1000);
        }
        assert_eq!(s.delay_ms(), 1000);
    }

    #[test]
    fn test_delay_holds_at_lower_bound() {
        let mut s = staircase();
        for _ in 0..100 {
            s.update("stop", TrialOutcome::Responded);
        }
        assert_eq!(s.delay_ms(), 0);
    }

    #[test]
    fn test_delay_stays_in_bounds_for_any_outcome_run() {
        let mut s = Staircase::new(StaircaseConfig {
            initial_delay_ms: 100,
            step_ms: 75,
            min_delay_ms: 50,
            max_delay_ms: 400,
            signal_condition: "stop".into(),
        })
        .unwrap();

        let outcomes = [
            TrialOutcome::Responded,
            TrialOutcome::Inhibited,
            TrialOutcome::Inhibited,
            TrialOutcome::Responded,
            TrialOutcome::Inhibited,
            TrialOutcome::Inhibited,
            TrialOutcome::Inhibited,
            TrialOutcome::Responded,
        ];
        for outcome in outcomes {
            s.update("stop", outcome);
            assert!((50..=400).contains(&s.delay_ms()));
        }
    }

    #[test]
    fn test_rejects_initial_delay_outside_bounds() {
        let err = Staircase::new(StaircaseConfig {
            initial_delay_ms: 1200,
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::DelayOutOfBounds {
                delay_ms: 1200,
                min_ms: 0,
                max_ms: 1000
            }
        );
    }

    #[test]
    fn test_rejects_zero_step() {
        let err = Staircase::new(StaircaseConfig {
            step_ms: 0,
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err, ConfigError::ZeroStep);
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let err = Staircase::new(StaircaseConfig {
            min_delay_ms: 500,
            max_delay_ms: 100,
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvertedBounds {
                min_ms: 500,
                max_ms: 100
            }
        );
    }
}
