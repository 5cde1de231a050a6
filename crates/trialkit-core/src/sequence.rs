//! Constrained trial-sequence generation.
//!
//! The category at every position is dictated by a fixed, pre-optimized
//! index array (produced offline by the design optimizer); only the
//! concrete stimulus instance is random, drawn from continuously
//! refilled per-category pools.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::pool::CategoryPool;

/// One category's quota and stimulus supply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySpec<T> {
    pub name: String,
    /// Pool size restored on every refill.
    pub quota: usize,
    /// Stimulus descriptors reserved for this category.
    pub items: Vec<T>,
}

/// Full generator configuration: the categories and the fixed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceSpec<T> {
    pub categories: Vec<CategorySpec<T>>,
    /// Category index per trial position, as produced by the offline
    /// design optimization.
    pub order: Vec<usize>,
}

impl<T> SequenceSpec<T> {
    /// Check that every order index names a configured category. Quota
    /// and source validation happens in `CategoryPool::new`.
    fn validate_order(&self) -> Result<(), ConfigError> {
        for (position, &index) in self.order.iter().enumerate() {
            if index >= self.categories.len() {
                return Err(ConfigError::UnknownCategoryIndex {
                    index,
                    position,
                    count: self.categories.len(),
                });
            }
        }
        Ok(())
    }
}

/// The plan for one upcoming trial. Created on demand, consumed
/// immediately by the presentation loop, not retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialPlan<T> {
    /// Index into the fixed order array.
    pub position: usize,
    /// Category dictated by the order array at this position.
    pub category: String,
    /// Stimulus drawn from that category's pool.
    pub stimulus: T,
}

/// Lazily realizes the trial sequence. Finite (one plan per order
/// position) and not restartable: pool state advances irreversibly.
#[derive(Debug)]
pub struct SequenceGenerator<T> {
    pools: Vec<CategoryPool<T>>,
    order: Vec<usize>,
    cursor: usize,
    rng: ChaCha8Rng,
}

impl<T: Clone> SequenceGenerator<T> {
    /// Build a generator with an entropy-seeded RNG.
    pub fn new(spec: SequenceSpec<T>) -> Result<Self, ConfigError> {
        Self::with_rng(spec, ChaCha8Rng::from_entropy())
    }

    /// Build a generator with a caller-supplied RNG (deterministic tests).
    pub fn with_rng(spec: SequenceSpec<T>, rng: ChaCha8Rng) -> Result<Self, ConfigError> {
        spec.validate_order()?;
        let pools = spec
            .categories
            .into_iter()
            .map(|c| CategoryPool::new(c.name, c.quota, c.items))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            pools,
            order: spec.order,
            cursor: 0,
            rng,
        })
    }

    /// Trial positions not yet generated.
    pub fn remaining(&self) -> usize {
        self.order.len() - self.cursor
    }

    /// Refill count for a category, by name. Test and diagnostics hook.
    pub fn refill_count(&self, category: &str) -> Option<u64> {
        self.pools
            .iter()
            .find(|p| p.name() == category)
            .map(|p| p.refill_count())
    }
}

impl<T: Clone> Iterator for SequenceGenerator<T> {
    type Item = TrialPlan<T>;

    fn next(&mut self) -> Option<TrialPlan<T>> {
        let &index = self.order.get(self.cursor)?;
        let position = self.cursor;
        self.cursor += 1;

        let pool = &mut self.pools[index];
        let stimulus = pool.draw(&mut self.rng);
        Some(TrialPlan {
            position,
            category: pool.name().to_string(),
            stimulus,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

/// Convenience: a seeded RNG for a given task run, in the same shape the
/// presentation layer derives per-phase generators.
pub fn run_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
