//! Example running the selector on a randomly generated track.
//!
//! Run with: `cargo run --example random_track`

use enhanset::{Enhancer, EnhancerTrack, ExhaustiveSelector, SelectionAlgorithm};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() {
    let mut rng = StdRng::seed_from_u64(42);

    let track: EnhancerTrack = (0..12)
        .map(|_| {
            let start = rng.gen_range(0..200u64);
            let len = rng.gen_range(5..40u64);
            let score = f64::from(rng.gen_range(1..100u32)) / 10.0;
            Enhancer::new(start, start + len, score)
        })
        .collect();

    println!("Generated track: {}", track);

    let selection = ExhaustiveSelector::new().select(&track);

    println!(
        "Best subset ({} of {} enhancers): {}",
        selection.len(),
        track.len(),
        selection
    );
}
