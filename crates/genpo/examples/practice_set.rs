//! Practice Set
//!
//! Prints a handful of cubic and quartic polynomials with two or three
//! distinct integer roots, one of which may be repeated.
//!
//! Run with: cargo run --example practice_set -- [count] [seed]

use genpo::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn main() -> Result<(), GenpoError> {
    // Library events at DEBUG show how each polynomial was assembled
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    let mut args = std::env::args().skip(1);
    let count: usize = args.next().and_then(|a| a.parse().ok()).unwrap_or(5);
    let seed: u64 = args
        .next()
        .and_then(|a| a.parse().ok())
        .unwrap_or_else(rand::random);

    println!("seed {seed}");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    for i in 1..=count {
        let root_count = rng.gen_range(2..=3);
        let degree = rng.gen_range(3..=root_count + 1);

        let g = generate_fixed(&mut rng, degree, Some(root_count))?;

        let roots: Vec<String> = g
            .root_multiplicities()
            .iter()
            .map(|(root, m)| if *m == 1 { root.to_string() } else { format!("{root} (x{m})") })
            .collect();

        println!();
        println!("{i}. p(x) = {}", format_algebraic(g.polynomial.coeffs())?);
        println!("   coefficients: {}", format_compact(g.polynomial.coeffs(), None));
        println!("   roots: {}", roots.join(", "));
    }

    Ok(())
}
