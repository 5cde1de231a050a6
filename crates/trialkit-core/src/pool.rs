//! Replenishable per-category stimulus pools.
//!
//! Each category owns a reservoir of stimulus items. Draws pop from the
//! front; the pool refills itself with freshly shuffled items the moment
//! it is observed empty, so a draw never comes back without an item.

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::ConfigError;

/// A replenishable reservoir of stimulus items for one trial category.
///
/// Refill gathers exactly `quota` items by cycling fresh passes over the
/// source: each pass is a uniform permutation drawn without replacement,
/// and a new pass starts only when the previous one is exhausted. Within
/// one pass no item repeats.
#[derive(Debug, Clone)]
pub struct CategoryPool<T> {
    name: String,
    quota: usize,
    source: Vec<T>,
    items: VecDeque<T>,
    refills: u64,
}

impl<T: Clone> CategoryPool<T> {
    /// Create an empty pool. The first draw triggers the first refill.
    pub fn new(
        name: impl Into<String>,
        quota: usize,
        source: Vec<T>,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        if quota == 0 {
            return Err(ConfigError::ZeroQuota { category: name });
        }
        if source.is_empty() {
            return Err(ConfigError::EmptySource { category: name });
        }
        Ok(Self {
            name,
            quota,
            source,
            items: VecDeque::new(),
            refills: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Items currently available without a refill.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of refills performed so far.
    pub fn refill_count(&self) -> u64 {
        self.refills
    }

    /// Draw the next item, refilling first if the pool is drained.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> T {
        if self.items.is_empty() {
            self.refill(rng);
        }
        // Refill always leaves `quota` >= 1 items.
        self.items.pop_front().expect("pool refilled before draw")
    }

    fn refill<R: Rng>(&mut self, rng: &mut R) {
        let mut pass: Vec<T> = Vec::new();
        while self.items.len() < self.quota {
            if pass.is_empty() {
                pass = self.source.clone();
                pass.shuffle(rng);
            }
            let take = pass.len().min(self.quota - self.items.len());
            self.items.extend(pass.drain(..take));
        }
        self.refills += 1;
    }
}
