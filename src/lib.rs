//! `tombola`: weighted random selection over integer-weighted candidates.
//!
//! Candidates are `(item, weight)` pairs. Weights that are not strictly
//! positive integers are filtered out; the rest go into a cumulative-weight
//! table ([`Cdf`]) from which items are drawn with probability
//! `weight / total`, independently and with replacement.
//!
//! Exposed modules:
//! - `weight`: validation of raw weights into positive integers.
//! - `cdf`: construction of the cumulative-weight table.
//! - `sampler`: single and batch draws, one-shot helpers, seedable [`Picker`].
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use tombola::{build_cdf, SampleError};
//!
//! let cdf = build_cdf([("write docs", 1), ("idle", 0), ("fix bug", 2)]);
//! assert_eq!(cdf.items(), &["write docs", "fix bug"]);
//! assert_eq!(cdf.boundaries(), &[1, 3]);
//! assert_eq!(cdf.select(2), Some(&"fix bug"));
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let picks = cdf.sample_n_with_rng(3usize, &mut rng)?;
//! assert_eq!(picks.len(), 3);
//! # Ok::<(), SampleError>(())
//! ```

#![forbid(unsafe_code)]

pub mod cdf;
pub mod sampler;
pub mod weight;

pub use cdf::{build_cdf, Cdf};
pub use sampler::{
    choose_weighted, choose_weighted_n, choose_weighted_n_with_rng, choose_weighted_with_rng,
    DrawCount, Picker, SampleError,
};
pub use weight::Weight;
