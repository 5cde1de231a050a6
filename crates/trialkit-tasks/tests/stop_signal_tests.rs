//! Full stop-signal runs against an optimized trial order, driving the
//! session the way the presentation loop does.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use trialkit_core::{
    CategorySpec, SequenceGenerator, SequenceSpec, Staircase, StaircaseConfig, TrialOutcome,
};
use trialkit_tasks::StopSignalSession;

// 60-trial order at the task's proportions: 60% go, 20% stop, 20% ignore.
const ORDER: [usize; 60] = [
    0, 0, 2, 1, 0, 1, 0, 0, 2, 2, 2, 2, 0, 0, 0, 1, 1, 2, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 2, 1,
    0, 2, 1, 0, 1, 0, 0, 2, 0, 2, 2, 0, 2, 0, 0, 1, 2, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 2,
];

fn session(seed: u64) -> StopSignalSession<&'static str> {
    let sequence = SequenceSpec {
        categories: vec![
            CategorySpec {
                name: "go".into(),
                quota: 9,
                items: vec!["circle", "lshape", "rhombus", "triangle"],
            },
            CategorySpec {
                name: "stop".into(),
                quota: 6,
                items: vec!["circle", "lshape"],
            },
            CategorySpec {
                name: "ignore".into(),
                quota: 6,
                items: vec!["rhombus", "triangle"],
            },
        ],
        order: ORDER.to_vec(),
    };
    let generator =
        SequenceGenerator::with_rng(sequence, ChaCha8Rng::seed_from_u64(seed)).unwrap();
    let staircase = Staircase::new(StaircaseConfig::default()).unwrap();
    StopSignalSession::from_parts(generator, staircase)
}

#[test]
fn test_run_respects_the_optimized_order() {
    let mut session = session(3);
    let names = ["go", "stop", "ignore"];
    for &index in ORDER.iter() {
        let trial = session.next_trial().unwrap();
        assert_eq!(trial.plan.category, names[index]);
        assert_eq!(trial.ssd_ms.is_some(), index == 1);
    }
    assert!(session.next_trial().is_none());
}

#[test]
fn test_stop_stimuli_stay_within_the_stop_source() {
    let mut session = session(8);
    while let Some(trial) = session.next_trial() {
        if trial.plan.category == "stop" {
            assert!(["circle", "lshape"].contains(&trial.plan.stimulus));
        }
        if trial.plan.category == "ignore" {
            assert!(["rhombus", "triangle"].contains(&trial.plan.stimulus));
        }
    }
}

#[test]
fn test_perfect_inhibitor_drives_the_delay_up_only_on_stop_trials() {
    let mut session = session(5);
    let mut stop_trials = 0u32;
    while let Some(trial) = session.next_trial() {
        let condition = trial.plan.category.clone();
        if condition == "stop" {
            assert_eq!(trial.ssd_ms, Some(250 + 50 * stop_trials));
            stop_trials += 1;
            session.record(&condition, TrialOutcome::Inhibited);
        } else {
            session.record(&condition, TrialOutcome::Responded);
        }
    }
    assert_eq!(stop_trials, 12);
    assert_eq!(session.delay_ms(), 250 + 50 * 12);
}

#[test]
fn test_alternating_outcomes_hold_the_delay_near_start() {
    let mut session = session(13);
    let mut inhibit_next = true;
    while let Some(trial) = session.next_trial() {
        let condition = trial.plan.category.clone();
        if condition == "stop" {
            let outcome = if inhibit_next {
                TrialOutcome::Inhibited
            } else {
                TrialOutcome::Responded
            };
            inhibit_next = !inhibit_next;
            session.record(&condition, outcome);
        } else {
            session.record(&condition, TrialOutcome::Responded);
        }
        assert!((0..=1000).contains(&session.delay_ms()));
    }
    // 12 stop trials, alternating: back at the starting delay.
    assert_eq!(session.delay_ms(), 250);
}
