//! Naive vs cache-blocked matrix transpose, built to see the cache at work.
//!
//! A transpose does no arithmetic at all. It only moves memory, so how fast
//! it runs is decided almost entirely by the access pattern. The naive loop
//! writes with stride `n` and misses cache on nearly every store once the
//! matrix is large. The tiled loop does the same moves in small square
//! tiles that stay resident in L1.
//!
//! ## Usage
//!
//! ```
//! use transpose::{transpose, transpose_blocked};
//!
//! let n = 256;
//! let input: Vec<f64> = (0..n * n).map(|v| v as f64).collect();
//! let mut naive = vec![0.0; n * n];
//! let mut tiled = vec![0.0; n * n];
//!
//! transpose(&input, &mut naive, n);
//! transpose_blocked(&input, &mut tiled, n, 64);
//!
//! assert_eq!(naive, tiled);
//! ```
//!
//! To time both the way the binary does:
//!
//! ```
//! use transpose::harness::{self, config::BenchConfig};
//!
//! let config = BenchConfig::default()
//!     .with_dimension(128)
//!     .with_block_size(16)
//!     .with_blocked(true);
//! let mut out = Vec::new();
//! let report = harness::run(&config, &mut out).unwrap();
//!
//! assert!(report.tiled_ran);
//! ```
//!
//! ## What's inside
//!
//! - `matrix`: owned N×N buffer, the sequential fixture, naive transpose
//! - `blocked`: tiled transpose with partial edge tiles
//! - `harness`: config, stopwatch, report printing, the driver

pub mod blocked;
pub mod error;
pub mod harness;
pub mod matrix;

pub use blocked::tiled::transpose_blocked;
pub use error::{Result, TransposeError};
pub use matrix::Matrix;
pub use matrix::transpose::transpose;
