//! Fill a heap with random values and print it as a tree
//!
//! ```bash
//! cargo run --bin heap_demo -- --count 20 --max 100 --ordering min --seed 7
//! ```

use anyhow::{bail, Context, Result};
use array_heaps::{BinaryHeapArray, Heap, HeapOrdering};
use clap::{App, Arg};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() -> Result<()> {
    let matches = App::new("heap_demo")
        .about("Adds random values to an array heap and prints the resulting tree")
        .arg(
            Arg::with_name("count")
                .long("count")
                .short("n")
                .takes_value(true)
                .default_value("1500")
                .help("Number of values to add"),
        )
        .arg(
            Arg::with_name("max")
                .long("max")
                .takes_value(true)
                .default_value("1000")
                .help("Exclusive upper bound of the random values"),
        )
        .arg(
            Arg::with_name("ordering")
                .long("ordering")
                .takes_value(true)
                .default_value("max")
                .help("Heap ordering: min or max"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .help("Seed for reproducible output"),
        )
        .get_matches();

    let count: usize = matches
        .value_of("count")
        .unwrap_or("1500")
        .parse()
        .context("--count must be a non-negative integer")?;
    let max: u32 = matches
        .value_of("max")
        .unwrap_or("1000")
        .parse()
        .context("--max must be a positive integer")?;
    if max == 0 {
        bail!("--max must be greater than zero");
    }
    let ordering: HeapOrdering = matches.value_of("ordering").unwrap_or("max").parse()?;
    let mut rng = match matches.value_of("seed") {
        Some(seed) => StdRng::seed_from_u64(seed.parse().context("--seed must be an integer")?),
        None => StdRng::from_entropy(),
    };

    let mut heap = BinaryHeapArray::with_ordering(ordering);
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        let value = rng.gen_range(0..max);
        values.push(value.to_string());
        heap.push(value);
    }

    if !heap.validate() {
        bail!("heap failed validation after {} inserts", heap.len());
    }

    println!("{}", values.join(", "));
    println!();
    println!(
        "{} heap, {} elements, capacity {}",
        heap.ordering(),
        heap.len(),
        heap.capacity()
    );
    print!("{}", heap);

    Ok(())
}
