//! Three-peg planning board (tower-of-London style).
//!
//! Balls move one at a time through a hand register: pick the topmost
//! ball off a peg, place it into the lowest open slot of another. A
//! completed pick counts one move. Problems pair a start placement with
//! a goal placement; the condition records whether the optimal solution
//! requires an intermediate move.

use serde::{Deserialize, Serialize};

/// Ball ids per peg slot, bottom to top. 0 marks an empty slot.
pub type Placement = [[u8; 3]; 3];

/// An illegal board move. The board is left unchanged.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("already holding a ball")]
    HandFull,

    #[error("no ball in hand")]
    HandEmpty,

    #[error("peg {0} has no ball to pick")]
    PegEmpty(usize),

    #[error("peg {0} has no open slot")]
    PegFull(usize),

    #[error("peg {0} does not exist")]
    UnknownPeg(usize),
}

/// Live board state for one problem attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pegs: Placement,
    held: u8,
    moves: u32,
}

impl Board {
    pub fn new(start: Placement) -> Self {
        Self {
            pegs: start,
            held: 0,
            moves: 0,
        }
    }

    /// Ball currently in hand, if any.
    pub fn held(&self) -> Option<u8> {
        (self.held != 0).then_some(self.held)
    }

    /// Completed picks so far.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn placement(&self) -> &Placement {
        &self.pegs
    }

    /// Lift the topmost ball off `peg` into the hand.
    pub fn pick(&mut self, peg: usize) -> Result<u8, MoveError> {
        if self.held != 0 {
            return Err(MoveError::HandFull);
        }
        let slots = self.pegs.get_mut(peg).ok_or(MoveError::UnknownPeg(peg))?;
        for slot in slots.iter_mut().rev() {
            if *slot != 0 {
                self.held = *slot;
                *slot = 0;
                self.moves += 1;
                return Ok(self.held);
            }
        }
        Err(MoveError::PegEmpty(peg))
    }

    /// Drop the held ball into the lowest open slot of `peg`.
    pub fn place(&mut self, peg: usize) -> Result<(), MoveError> {
        if self.held == 0 {
            return Err(MoveError::HandEmpty);
        }
        let slots = self.pegs.get_mut(peg).ok_or(MoveError::UnknownPeg(peg))?;
        for slot in slots.iter_mut() {
            if *slot == 0 {
                *slot = self.held;
                self.held = 0;
                return Ok(());
            }
        }
        Err(MoveError::PegFull(peg))
    }

    /// Pegs a ball can legally be picked from.
    pub fn pickable_pegs(&self) -> Vec<usize> {
        self.pegs
            .iter()
            .enumerate()
            .filter(|(_, slots)| slots.iter().any(|&s| s != 0))
            .map(|(i, _)| i)
            .collect()
    }

    /// Pegs the held ball can legally be placed on.
    pub fn placeable_pegs(&self) -> Vec<usize> {
        self.pegs
            .iter()
            .enumerate()
            .filter(|(_, slots)| slots.iter().any(|&s| s == 0))
            .map(|(i, _)| i)
            .collect()
    }

    /// Whether the board matches the goal with an empty hand.
    pub fn is_solved(&self, goal: &Placement) -> bool {
        self.held == 0 && self.pegs == *goal
    }
}

/// Goal-hierarchy condition of a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanningCondition {
    WithIntermediate,
    WithoutIntermediate,
}

/// One planning problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub start: Placement,
    pub goal: Placement,
    pub condition: PlanningCondition,
}

// Peg permutations applied to the base tower to generate the problem
// family. The goal permutations additionally flip the two non-tower pegs.
const START_PERMUTATIONS: [[usize; 3]; 3] = [[0, 1, 2], [1, 0, 2], [1, 2, 0]];
const GOAL_PERMUTATIONS: [[usize; 3]; 3] = [[0, 2, 1], [2, 0, 1], [2, 1, 0]];

fn permute(placement: &Placement, permutation: &[usize; 3]) -> Placement {
    [
        placement[permutation[0]],
        placement[permutation[1]],
        placement[permutation[2]],
    ]
}

/// The test problem family: every peg permutation of the base tower
/// start paired with both goal variants of each condition.
pub fn test_problems() -> Vec<Problem> {
    let base_start: Placement = [[1, 2, 3], [0, 0, 0], [0, 0, 0]];

    let goal_groups: [(PlanningCondition, [Placement; 2]); 2] = [
        (
            PlanningCondition::WithIntermediate,
            [
                [[1, 0, 0], [2, 3, 0], [0, 0, 0]],
                [[1, 3, 0], [2, 0, 0], [0, 0, 0]],
            ],
        ),
        (
            PlanningCondition::WithoutIntermediate,
            [
                [[0, 0, 0], [3, 2, 0], [1, 0, 0]],
                [[0, 0, 0], [3, 1, 0], [2, 0, 0]],
            ],
        ),
    ];

    let mut problems = Vec::new();
    for (condition, goals) in &goal_groups {
        for (start_perm, goal_perm) in START_PERMUTATIONS.iter().zip(GOAL_PERMUTATIONS.iter()) {
            let start = permute(&base_start, start_perm);
            for goal in goals {
                problems.push(Problem {
                    start,
                    goal: permute(goal, start_perm),
                    condition: *condition,
                });
                problems.push(Problem {
                    start,
                    goal: permute(goal, goal_perm),
                    condition: *condition,
                });
            }
        }
    }
    problems
}
