//! Weighted draws with replacement.
//!
//! Each draw picks `num` uniformly from `[1, total]` and returns the item whose
//! boundary is the smallest one `>= num`. With boundaries `[1, 3]` for items
//! `[A, C]`, `num = 1` selects `A` and `num = 2 | 3` select `C`, so
//! `P(item_k) = weight_k / total`.
//!
//! Notes:
//! - `*_with_rng` entrypoints take any `rand::Rng` for deterministic tests and benches.
//! - The plain variants use `rand::rng()` and are not reproducible across runs.

use rand::prelude::*;

use crate::cdf::Cdf;
use crate::weight::Weight;

/// Errors surfaced by sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleError {
    /// One or more draws were requested but no candidate has positive weight.
    EmptyDomain,
    /// The requested number of draws is negative.
    InvalidDrawCount(i64),
}

impl std::fmt::Display for SampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDomain => write!(f, "cannot sample: total candidate weight is zero"),
            Self::InvalidDrawCount(n) => write!(f, "draw count must be >= 0 (got {n})"),
        }
    }
}

impl std::error::Error for SampleError {}

/// A validated, non-negative number of draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DrawCount(usize);

impl DrawCount {
    pub fn new(n: usize) -> Self {
        Self(n)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for DrawCount {
    fn from(n: usize) -> Self {
        Self(n)
    }
}

impl From<u32> for DrawCount {
    fn from(n: u32) -> Self {
        Self(n as usize)
    }
}

impl TryFrom<i64> for DrawCount {
    type Error = SampleError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        usize::try_from(n)
            .map(Self)
            .map_err(|_| SampleError::InvalidDrawCount(n))
    }
}

impl TryFrom<i32> for DrawCount {
    type Error = SampleError;

    fn try_from(n: i32) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(n))
    }
}

impl TryFrom<isize> for DrawCount {
    type Error = SampleError;

    fn try_from(n: isize) -> Result<Self, Self::Error> {
        Self::try_from(n as i64)
    }
}

impl<T> Cdf<T> {
    /// Index of the item selected by draw value `num`.
    ///
    /// Returns `None` if `num` is outside `[1, total]`.
    pub fn index_of(&self, num: u64) -> Option<usize> {
        if num == 0 || num > self.total() {
            return None;
        }
        // First boundary >= num; ties resolve to the earliest item.
        Some(self.boundaries().partition_point(|&b| b < num))
    }

    /// Item selected by draw value `num` (see [`Cdf::index_of`]).
    pub fn select(&self, num: u64) -> Option<&T> {
        self.index_of(num).map(|i| &self.items()[i])
    }

    /// Draw one item.
    pub fn sample(&self) -> Result<&T, SampleError> {
        let mut rng = rand::rng();
        self.sample_with_rng(&mut rng)
    }

    /// Draw one item using a caller-supplied RNG.
    pub fn sample_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&T, SampleError> {
        let i = self.sample_index_with_rng(rng)?;
        Ok(&self.items()[i])
    }

    fn sample_index_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<usize, SampleError> {
        let total = self.total();
        if total == 0 {
            return Err(SampleError::EmptyDomain);
        }
        let num = rng.random_range(1..=total);
        self.index_of(num).ok_or(SampleError::EmptyDomain)
    }

    /// Draw `count` items independently, with replacement.
    pub fn sample_n(&self, count: impl Into<DrawCount>) -> Result<Vec<&T>, SampleError> {
        let mut rng = rand::rng();
        self.sample_n_with_rng(count, &mut rng)
    }

    /// Draw `count` items with replacement using a caller-supplied RNG.
    ///
    /// `count == 0` returns an empty vector without touching `rng`.
    pub fn sample_n_with_rng<R: Rng + ?Sized>(
        &self,
        count: impl Into<DrawCount>,
        rng: &mut R,
    ) -> Result<Vec<&T>, SampleError> {
        let count = count.into().get();
        if count == 0 {
            return Ok(Vec::new());
        }
        if self.total() == 0 {
            return Err(SampleError::EmptyDomain);
        }
        (0..count).map(|_| self.sample_with_rng(rng)).collect()
    }
}

/// Build a table from `candidates` and draw a single item from it.
pub fn choose_weighted<T, W, I>(candidates: I) -> Result<T, SampleError>
where
    I: IntoIterator<Item = (T, W)>,
    W: Weight,
{
    let mut rng = rand::rng();
    choose_weighted_with_rng(candidates, &mut rng)
}

/// [`choose_weighted`] with a caller-supplied RNG.
pub fn choose_weighted_with_rng<T, W, I, R>(candidates: I, rng: &mut R) -> Result<T, SampleError>
where
    I: IntoIterator<Item = (T, W)>,
    W: Weight,
    R: Rng + ?Sized,
{
    let cdf = Cdf::new(candidates);
    let i = cdf.sample_index_with_rng(rng)?;
    // The table dies here; move the pick out rather than clone it.
    Ok(cdf.into_items().swap_remove(i))
}

/// Build a table from `candidates` and draw `count` items with replacement.
pub fn choose_weighted_n<T, W, I>(
    candidates: I,
    count: impl Into<DrawCount>,
) -> Result<Vec<T>, SampleError>
where
    T: Clone,
    I: IntoIterator<Item = (T, W)>,
    W: Weight,
{
    let mut rng = rand::rng();
    choose_weighted_n_with_rng(candidates, count, &mut rng)
}

/// [`choose_weighted_n`] with a caller-supplied RNG.
pub fn choose_weighted_n_with_rng<T, W, I, R>(
    candidates: I,
    count: impl Into<DrawCount>,
    rng: &mut R,
) -> Result<Vec<T>, SampleError>
where
    T: Clone,
    I: IntoIterator<Item = (T, W)>,
    W: Weight,
    R: Rng + ?Sized,
{
    let cdf = Cdf::new(candidates);
    let picks = cdf.sample_n_with_rng(count, rng)?;
    Ok(picks.into_iter().cloned().collect())
}

/// Weighted picker with an optional fixed seed.
///
/// Seeded pickers are reproducible: the same seed and candidates give the same
/// picks. Unseeded pickers draw from `rand::rng()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Picker {
    seed: Option<u64>,
}

impl Picker {
    /// Create an unseeded picker.
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn rng(&self) -> Box<dyn RngCore> {
        match self.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        }
    }

    /// Pick one item from `candidates`.
    pub fn pick<T, W, I>(&self, candidates: I) -> Result<T, SampleError>
    where
        I: IntoIterator<Item = (T, W)>,
        W: Weight,
    {
        let mut rng = self.rng();
        choose_weighted_with_rng(candidates, &mut rng)
    }

    /// Pick `count` items from `candidates`, with replacement.
    pub fn pick_n<T, W, I>(
        &self,
        candidates: I,
        count: impl Into<DrawCount>,
    ) -> Result<Vec<T>, SampleError>
    where
        T: Clone,
        I: IntoIterator<Item = (T, W)>,
        W: Weight,
    {
        let mut rng = self.rng();
        choose_weighted_n_with_rng(candidates, count, &mut rng)
    }
}
