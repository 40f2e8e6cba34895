//! Text output: timing lines and the corner diagnostic.

use std::io::{self, Write};
use std::time::Duration;

use super::config::DIAGNOSTIC_CORNER;

/// Write the top-left 4×4 block of `input` and of `output`.
///
/// # Panics
///
/// Panics if `n < 4` or either slice is shorter than `n * n`.
pub fn print_corners<W: Write>(
    out: &mut W,
    input: &[f64],
    output: &[f64],
    n: usize,
) -> io::Result<()> {
    assert!(
        n >= DIAGNOSTIC_CORNER,
        "corner print needs n >= {}, got {}",
        DIAGNOSTIC_CORNER,
        n
    );
    assert!(input.len() >= n * n, "input shorter than {}x{}", n, n);
    assert!(output.len() >= n * n, "output shorter than {}x{}", n, n);

    writeln!(out, "Top-left 4x4 block of original matrix:")?;
    write_corner(out, input, n)?;
    writeln!(out, "Top-left 4x4 block of transposed matrix:")?;
    write_corner(out, output, n)
}

fn write_corner<W: Write>(out: &mut W, m: &[f64], n: usize) -> io::Result<()> {
    for i in 0..DIAGNOSTIC_CORNER {
        for j in 0..DIAGNOSTIC_CORNER {
            write!(out, "{:6.1} ", m[i * n + j])?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn print_timings<W: Write>(out: &mut W, naive: Duration, tiled: Duration) -> io::Result<()> {
    writeln!(out, "default transpose: {:.6} seconds", naive.as_secs_f64())?;
    writeln!(out, "tile transpose: {:.6} seconds", tiled.as_secs_f64())
}
