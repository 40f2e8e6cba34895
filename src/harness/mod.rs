//! Benchmark driver.
//!
//! One linear pass, no retries:
//! allocate → initialize → naive (timed) → tiled (timed, optional) →
//! report → release. The three buffers are dropped when [`run`] returns.

pub mod config;
pub mod report;
pub mod timer;

use std::io::Write;
use std::time::Duration;

use crate::blocked::tiled::transpose_blocked;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::matrix::transpose::transpose;

use config::BenchConfig;
use report::{print_corners, print_timings};
use timer::Stopwatch;

/// Elapsed time of each step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchReport {
    pub naive: Duration,
    pub tiled: Duration,
    /// False when the tiled step was disabled and `tiled` is clock overhead.
    pub tiled_ran: bool,
}

/// Run the full benchmark and write its output to `out`.
///
/// Configuration errors are reported before anything is allocated.
pub fn run<W: Write>(config: &BenchConfig, out: &mut W) -> Result<BenchReport> {
    config.validate()?;
    let n = config.dimension;

    let mut input = Matrix::try_zeros(n)?;
    let mut output_default = Matrix::try_zeros(n)?;
    let mut output_tile = Matrix::try_zeros(n)?;

    input.fill_sequential();

    let naive = Stopwatch::time(|| transpose(input.as_slice(), output_default.as_mut_slice(), n));

    let tiled = if config.run_blocked {
        Stopwatch::time(|| {
            transpose_blocked(input.as_slice(), output_tile.as_mut_slice(), n, config.block_size)
        })
    } else {
        Stopwatch::skip()
    };

    if config.show_diagnostics {
        print_corners(out, input.as_slice(), output_default.as_slice(), n)?;
        if config.run_blocked {
            print_corners(out, input.as_slice(), output_tile.as_slice(), n)?;
        }
    }

    print_timings(out, naive, tiled)?;

    Ok(BenchReport {
        naive,
        tiled,
        tiled_ran: config.run_blocked,
    })
}
