//! Single-pass group-by used by every aggregation.
//!
//! Values are folded into a running `(sum, count)` per [`PeriodKey`] and the
//! means are finalized once at the end, so grouping is O(n) over the series.
//! Builder methods return `&mut Self` for chaining.
//!
//! # Example
//!
//! ```rust
//! use crypto_dashboard::grouping::Grouping;
//! use crypto_dashboard::models::PeriodKey;
//!
//! let points = Grouping::new()
//!     .add(PeriodKey::Month { year: 2022, month: 1 }, 10.0)
//!     .add(PeriodKey::Month { year: 2022, month: 1 }, 20.0)
//!     .finish();
//! assert_eq!(points[0].mean, 15.0);
//! ```

use std::collections::BTreeMap;

use crate::models::{AggregatePoint, PeriodKey};

/// Running sum and count for one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Accumulator {
    pub sum: f64,
    pub count: usize,
}

impl Accumulator {
    pub fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    /// Mean of the pushed values, `None` when nothing was pushed.
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }
}

/// Buckets values by period and emits one [`AggregatePoint`] per non-empty bucket.
#[derive(Debug, Clone, Default)]
pub struct Grouping {
    buckets: BTreeMap<PeriodKey, Accumulator>,
}

impl Grouping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one value into the bucket for `key`.
    pub fn add(&mut self, key: PeriodKey, value: f64) -> &mut Self {
        self.buckets.entry(key).or_default().push(value);
        self
    }

    /// Group every item of `items` by `key_fn`, accumulating `value_fn`.
    pub fn extend<I, K, V>(&mut self, items: I, key_fn: K, value_fn: V) -> &mut Self
    where
        I: IntoIterator,
        K: Fn(&I::Item) -> PeriodKey,
        V: Fn(&I::Item) -> f64,
    {
        for item in items {
            let key = key_fn(&item);
            self.add(key, value_fn(&item));
        }
        self
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Means in ascending key order.
    pub fn finish(&self) -> Vec<AggregatePoint> {
        self.buckets
            .iter()
            .filter_map(|(key, acc)| {
                acc.mean().map(|mean| AggregatePoint {
                    key: *key,
                    mean,
                    count: acc.count,
                })
            })
            .collect()
    }
}
