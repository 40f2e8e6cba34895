//! Benchmark runner: naive vs tiled transpose at the compiled-in size.

use std::io::{self, Write};
use std::process;

use transpose::harness::{self, config::BenchConfig};

fn main() {
    let config = BenchConfig::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(err) = harness::run(&config, &mut out) {
        // Exiting anyway; a failed flush has nowhere better to go.
        out.flush().ok();
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
