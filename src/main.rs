use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use stout::{DEFAULT_NODE_SIZE, ListConfig, StoutList};

/// Build a random stout list, show its node layout, then sort it.
#[derive(Debug, Parser)]
#[command(name = "stout", version, about)]
struct Args {
    /// Elements per node (positive, even).
    #[arg(long, env = "STOUT_NODE_SIZE", default_value_t = DEFAULT_NODE_SIZE)]
    node_size: usize,

    /// Number of random elements to add.
    #[arg(long, default_value_t = 10)]
    count: usize,

    /// Seed for the element generator.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Sort in non-increasing order instead.
    #[arg(long)]
    descending: bool,
}

fn main() -> stout::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut list = StoutList::with_config(ListConfig::new(args.node_size))?;

    let mut rng = StdRng::seed_from_u64(args.seed);
    for _ in 0..args.count {
        list.push_back(rng.gen_range(0..100u32));
    }
    info!(len = list.len(), nodes = list.node_count(), "built list");
    println!("built:  {}", list.render(None));

    // Remove one element from the middle through a cursor to show rebalancing.
    let middle = list.len() / 2;
    let mut cursor = list.cursor_at(middle)?;
    if cursor.has_next() {
        let item = *cursor.next()?;
        cursor.remove()?;
        println!("removed {item} at {middle}: {}", cursor.render());
    }

    if args.descending {
        list.sort_descending();
    } else {
        list.sort();
    }
    info!(occupancies = ?list.node_occupancies(), "sorted list");
    println!("sorted: {}", list.render(None));
    Ok(())
}
