//! Recommend tasks by priority: higher priority, proportionally more likely.
//!
//! Run with `RUST_LOG=debug` to see which candidates were filtered out.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tombola::{build_cdf, Picker};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Priorities as they might come out of a task store; some are unusable.
    let tasks = vec![
        ("water plants", Some(1.0)),
        ("file taxes", Some(5.0)),
        ("archived task", Some(0.0)),
        ("reply to email", Some(3.0)),
        ("half-priority", Some(2.5)),
        ("no priority", None),
    ];

    let cdf = build_cdf(tasks.iter().map(|(name, p)| (*name, *p)));
    println!("eligible tasks (total weight {}):", cdf.total());
    for (i, (name, w)) in cdf.iter().enumerate() {
        let p = cdf.probability(i).unwrap_or(0.0);
        println!("  {name:<16} w={w:<2} p={p:.3}");
    }

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let next = cdf.sample_with_rng(&mut rng)?;
    println!();
    println!("next up: {next}");

    let week = Picker::new().with_seed(7).pick_n(tasks.clone(), 5usize)?;
    println!("this week: {week:?}");

    Ok(())
}
