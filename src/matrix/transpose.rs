/// Naive square transpose: `output[j * n + i] = input[i * n + j]`.
///
/// Reads `input` row by row (stride 1) but writes `output` down a column
/// (stride `n`). Once a column of `output` no longer fits in cache every
/// write misses, which is exactly the behavior the blocked version is
/// measured against.
///
/// # Arguments
///
/// * `input` - Source matrix (n × n), row-major
/// * `output` - Destination matrix (n × n), row-major, must not alias `input`
/// * `n` - Side length
///
/// # Panics
///
/// Panics if either slice is not exactly `n * n` long.
///
/// # Example
///
/// ```
/// use transpose::matrix::transpose::transpose;
///
/// let input = vec![1.0, 2.0,
///                  3.0, 4.0];
/// let mut output = vec![0.0; 4];
///
/// transpose(&input, &mut output, 2);
///
/// assert_eq!(output, vec![1.0, 3.0,
///                         2.0, 4.0]);
/// ```
pub fn transpose(input: &[f64], output: &mut [f64], n: usize) {
    assert_eq!(input.len(), n * n, "input: expected {}x{}={} elements", n, n, n * n);
    assert_eq!(output.len(), n * n, "output: expected {}x{}={} elements", n, n, n * n);

    for i in 0..n {
        for j in 0..n {
            output[j * n + i] = input[i * n + j];
        }
    }
}
