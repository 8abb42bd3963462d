//! CacheFront benchmark - LRU cache speedup over a slow source

mod workload;

use std::time::{Duration, Instant};

use anyhow::Result;
use cachefront::{CachedSource, DataSource, ExpensiveSource};
use clap::Parser;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of fetch operations per run
    #[arg(short, long, default_value_t = 500_000)]
    operations: usize,

    /// Number of distinct keys in the workload
    #[arg(short, long, default_value_t = 70)]
    key_space: u64,

    /// Cache capacity (number of values)
    #[arg(short, long, default_value_t = 50)]
    capacity: usize,

    /// Workload generator seed
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
}

/// Time a closure, returning its elapsed wall time and result.
fn measure<T>(f: impl FnOnce() -> T) -> (Duration, T) {
    let start = Instant::now();
    let result = f();
    (start.elapsed(), result)
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    info!("Generating workload: {} ops over {} keys (seed {})",
        args.operations, args.key_space, args.seed);
    let keys = workload::generate(args.operations, args.key_space, args.seed);

    let mut raw_source = ExpensiveSource::new();
    let mut cached_source = CachedSource::new(ExpensiveSource::new(), args.capacity)?;

    info!("Running uncached pass");
    let (raw_time, raw_sum) = measure(|| {
        let mut sum = 0i64;
        for &key in &keys {
            sum = sum.wrapping_add(raw_source.fetch(key));
        }
        sum
    });

    info!("Running cached pass");
    let (cached_time, cached_sum) = measure(|| {
        let mut sum = 0i64;
        for &key in &keys {
            sum = sum.wrapping_add(cached_source.fetch(key));
        }
        sum
    });

    // Both passes see the same deterministic source, so the sums must
    // agree; a mismatch means the cache changed observable behavior.
    if raw_sum != cached_sum {
        warn!("Checksum mismatch: raw {} vs cached {}", raw_sum, cached_sum);
    }

    let speedup = raw_time.as_secs_f64() / cached_time.as_secs_f64();

    println!("\n===== RESULTS =====");
    println!("Operations      : {}", args.operations);
    println!("Key space       : {}", args.key_space);
    println!("Cache size      : {}", args.capacity);
    println!();
    println!("No cache time   : {} ms", raw_time.as_millis());
    println!("LRU cache time  : {} ms", cached_time.as_millis());
    println!();
    println!("Cache hits      : {}", cached_source.hits());
    println!("Cache misses    : {}", cached_source.misses());
    println!("Hit ratio       : {:.1}%", cached_source.stats().hit_ratio() * 100.0);
    println!();
    println!("Speedup         : {:.2}x", speedup);

    Ok(())
}
