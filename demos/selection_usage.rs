//! Example demonstrating enhancer track construction and selection.
//!
//! Run with: `cargo run --example selection_usage`

use enhanset::{EnhancerTrack, ExhaustiveSelector, SelectionAlgorithm};

fn main() {
    println!("=== Enhancer Selection Example ===\n");

    // Parse a small track; records may arrive in any order.
    let text = "\
# start end score
2 6 4.0
1 5 10.0
6 8 3.0
9 14 2.5
12 16 6.0
";
    let track = EnhancerTrack::from_text(text).expect("valid track text");

    println!("--- Candidate Enhancers (end-sorted) ---");
    for enhancer in &track {
        println!("{}", enhancer);
    }
    println!(
        "\n{} candidates, combined score {:.1}",
        track.len(),
        track.total_score()
    );

    // Pick the best non-overlapping subset.
    let selection = ExhaustiveSelector::new().select(&track);

    println!("\n--- Optimal Non-Overlapping Subset ---");
    for enhancer in selection.enhancers() {
        println!("{}", enhancer);
    }
    println!(
        "\nSelected {} of {} enhancers, total score {:.1}",
        selection.len(),
        track.len(),
        selection.total_score()
    );
}
