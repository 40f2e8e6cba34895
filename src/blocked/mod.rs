//! Cache-blocked transpose.
//!
//! Splits the iteration space into square tiles so that the strided writes
//! of a transpose land in a handful of cache lines that stay hot for the
//! whole tile, instead of one fresh line per element.
//!
//! Available implementations:
//! - `tiled`: scalar tiles of a caller-chosen edge length

pub mod tiled;
