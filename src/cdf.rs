//! Cumulative-weight table.
//!
//! A [`Cdf`] pairs every surviving item with the running sum of weights up to
//! and including it. The boundaries are strictly increasing because every kept
//! weight is at least 1, so a draw `num` in `[1, total]` maps to exactly one
//! item: the first whose boundary is `>= num`.
//!
//! Candidates with an invalid weight (see [`Weight`]) are skipped entirely.

use crate::weight::Weight;

/// Immutable cumulative-weight table built from `(item, weight)` candidates.
///
/// Invariants:
/// - `items.len() == boundaries.len()`
/// - `boundaries` is strictly increasing, `boundaries[0] >= 1`
/// - `total == boundaries.last()` (or 0 when empty)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cdf<T> {
    items: Vec<T>,
    boundaries: Vec<u64>,
}

impl<T> Cdf<T> {
    /// Build a table from candidates, in input order.
    pub fn new<I, W>(candidates: I) -> Self
    where
        I: IntoIterator<Item = (T, W)>,
        W: Weight,
    {
        let candidates = candidates.into_iter();
        let (lower, _) = candidates.size_hint();
        let mut items = Vec::with_capacity(lower);
        let mut boundaries = Vec::with_capacity(lower);
        let mut running: u64 = 0;
        let mut skipped = 0usize;

        for (position, (item, raw)) in candidates.enumerate() {
            let Some(weight) = raw.to_weight() else {
                log::trace!("skipping candidate {position}: not a positive integer weight");
                skipped += 1;
                continue;
            };
            let Some(next) = running.checked_add(weight) else {
                log::warn!(
                    "skipping candidate {position}: weight {weight} overflows running total {running}"
                );
                skipped += 1;
                continue;
            };
            running = next;
            items.push(item);
            boundaries.push(running);
        }

        log::debug!(
            "built cdf: {} items kept, {} skipped, total weight {}",
            items.len(),
            skipped,
            running
        );

        Self { items, boundaries }
    }

    /// Surviving items, in input order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Cumulative boundaries; `boundaries()[i]` is the weight sum of `items()[..=i]`.
    pub fn boundaries(&self) -> &[u64] {
        &self.boundaries
    }

    /// Sum of all kept weights (0 if nothing survived filtering).
    pub fn total(&self) -> u64 {
        self.boundaries.last().copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Weight of the `i`-th surviving item, recovered from adjacent boundaries.
    pub fn weight(&self, i: usize) -> Option<u64> {
        let hi = *self.boundaries.get(i)?;
        let lo = if i == 0 { 0 } else { self.boundaries[i - 1] };
        Some(hi - lo)
    }

    /// Selection probability of the `i`-th surviving item, `weight / total`.
    pub fn probability(&self, i: usize) -> Option<f64> {
        let w = self.weight(i)?;
        Some(w as f64 / self.total() as f64)
    }

    /// Iterate over surviving `(item, weight)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&T, u64)> + '_ {
        self.items
            .iter()
            .zip(self.boundaries.iter())
            .scan(0u64, |prev, (item, &b)| {
                let w = b - *prev;
                *prev = b;
                Some((item, w))
            })
    }

    /// Consume the table, returning the surviving items.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T, W: Weight> FromIterator<(T, W)> for Cdf<T> {
    fn from_iter<I: IntoIterator<Item = (T, W)>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Build a [`Cdf`] from an ordered sequence of `(item, weight)` candidates.
///
/// Pure function of its input: the same sequence always yields the same table.
pub fn build_cdf<T, W, I>(candidates: I) -> Cdf<T>
where
    I: IntoIterator<Item = (T, W)>,
    W: Weight,
{
    Cdf::new(candidates)
}
