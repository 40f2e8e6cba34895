//! Tiled transpose.

/// Cache-blocked square transpose: same result as
/// [`crate::matrix::transpose::transpose`], visited tile by tile.
///
/// The outer two loops walk tile origins `(ii, jj)` in steps of `block`.
/// The inner two loops cover one `block × block` tile, clamped at `n` so the
/// last tile row and column can be partial. A tile touches `block` rows of
/// `input` and `block` rows of `output`; with `2 * block² * 8` bytes inside
/// L1/L2 both sides stay resident while the tile is processed.
///
/// Tiles partition `0..n × 0..n`, so every element is written exactly once
/// and the output is bit-identical to the naive version for any `block`.
///
/// # Arguments
///
/// * `input` - Source matrix (n × n), row-major
/// * `output` - Destination matrix (n × n), row-major, must not alias `input`
/// * `n` - Side length
/// * `block` - Tile edge length, at least 1. Values ≥ `n` give a single tile.
///
/// # Panics
///
/// Panics if `block == 0` or either slice is not exactly `n * n` long.
///
/// # Example
///
/// ```
/// use transpose::blocked::tiled::transpose_blocked;
///
/// let input: Vec<f64> = (0..9).map(|v| v as f64).collect();
/// let mut output = vec![0.0; 9];
///
/// // 3 is not a multiple of 2: the right column and bottom row are partial tiles.
/// transpose_blocked(&input, &mut output, 3, 2);
///
/// assert_eq!(output, vec![0.0, 3.0, 6.0,
///                         1.0, 4.0, 7.0,
///                         2.0, 5.0, 8.0]);
/// ```
pub fn transpose_blocked(input: &[f64], output: &mut [f64], n: usize, block: usize) {
    assert!(block > 0, "block size must be at least 1");
    assert_eq!(input.len(), n * n, "input: expected {}x{}={} elements", n, n, n * n);
    assert_eq!(output.len(), n * n, "output: expected {}x{}={} elements", n, n, n * n);

    for ii in (0..n).step_by(block) {
        let i_end = (ii + block).min(n);

        for jj in (0..n).step_by(block) {
            let j_end = (jj + block).min(n);

            for i in ii..i_end {
                for j in jj..j_end {
                    output[j * n + i] = input[i * n + j];
                }
            }
        }
    }
}
