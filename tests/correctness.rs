use transpose::TransposeError;
use transpose::blocked::tiled::transpose_blocked;
use transpose::matrix::Matrix;
use transpose::matrix::transpose::transpose;

fn assert_matrices_equal(expected: &[f64], actual: &[f64], name: &str) {
    assert_eq!(expected.len(), actual.len(), "{}: length mismatch", name);
    for i in 0..expected.len() {
        assert!(
            expected[i].to_bits() == actual[i].to_bits(),
            "{}: mismatch at index {}: expected {}, got {}",
            name,
            i,
            expected[i],
            actual[i]
        );
    }
}

fn sequential(n: usize) -> Vec<f64> {
    (0..n * n).map(|v| v as f64).collect()
}

// ============================================================
// Fixture
// ============================================================

#[test]
fn test_fill_sequential_layout() {
    let n = 7;
    let m = Matrix::try_sequential(n).unwrap();

    assert_eq!(m.dimension(), n);
    assert_eq!(m.as_slice().len(), n * n);
    for i in 0..n {
        for j in 0..n {
            assert_eq!(m.get(i, j), (i * n + j) as f64);
        }
    }
}

#[test]
fn test_fill_sequential_is_deterministic() {
    let a = Matrix::try_sequential(33).unwrap();
    let b = Matrix::try_sequential(33).unwrap();
    assert_eq!(a, b);

    let mut c = Matrix::try_zeros(33).unwrap();
    c.fill_sequential();
    c.fill_sequential();
    assert_eq!(a, c);
}

#[test]
fn test_zeros_has_exact_capacity() {
    let m = Matrix::try_zeros(10).unwrap();
    assert_eq!(m.as_slice().len(), 100);
    assert!(m.as_slice().iter().all(|&v| v == 0.0));
}

#[test]
fn test_zeros_reports_allocation_failure() {
    // n * n overflows usize.
    let err = Matrix::try_zeros(usize::MAX).unwrap_err();
    assert!(matches!(
        err,
        TransposeError::Allocation { dimension } if dimension == usize::MAX
    ));
    assert_eq!(
        err.to_string(),
        format!("could not allocate a {0}x{0} f64 matrix", usize::MAX)
    );

    // n * n fits but n * n * 8 bytes does not.
    let err = Matrix::try_zeros(1 << 31).unwrap_err();
    assert!(matches!(
        err,
        TransposeError::Allocation {
            dimension: 2147483648
        }
    ));
}

// ============================================================
// Concrete 4x4 scenario
// ============================================================

#[test]
fn test_4x4_naive() {
    let input = sequential(4);
    let mut output = vec![0.0; 16];

    transpose(&input, &mut output, 4);

    assert_eq!(
        output,
        vec![
            0.0, 4.0, 8.0, 12.0, //
            1.0, 5.0, 9.0, 13.0, //
            2.0, 6.0, 10.0, 14.0, //
            3.0, 7.0, 11.0, 15.0,
        ]
    );
}

#[test]
fn test_4x4_blocked_2() {
    let input = sequential(4);
    let mut naive = vec![0.0; 16];
    let mut tiled = vec![0.0; 16];

    transpose(&input, &mut naive, 4);
    transpose_blocked(&input, &mut tiled, 4, 2);

    assert_eq!(tiled[1], 4.0);
    assert_eq!(tiled[4], 1.0);
    assert_matrices_equal(&naive, &tiled, "4x4_b2");
}

// ============================================================
// Bijection
// ============================================================

#[test]
fn test_transpose_twice_is_identity() {
    for n in [1, 2, 3, 8, 17, 64, 100] {
        let input = sequential(n);
        let mut once = vec![0.0; n * n];
        let mut twice = vec![0.0; n * n];

        transpose(&input, &mut once, n);
        transpose(&once, &mut twice, n);

        assert_matrices_equal(&input, &twice, &format!("twice_n{}", n));
    }
}

#[test]
fn test_blocked_twice_is_identity() {
    let n = 45;
    let input = sequential(n);
    let mut once = vec![0.0; n * n];
    let mut twice = vec![0.0; n * n];

    transpose_blocked(&input, &mut once, n, 8);
    transpose_blocked(&once, &mut twice, n, 8);

    assert_matrices_equal(&input, &twice, "blocked_twice");
}

#[test]
fn test_blocked_writes_every_element() {
    // NaN sentinel: any position the tiles miss stays NaN.
    let n = 37;
    let input = sequential(n);
    let mut output = vec![f64::NAN; n * n];

    transpose_blocked(&input, &mut output, n, 10);

    assert!(output.iter().all(|v| !v.is_nan()), "tile gap left a NaN");

    let mut sorted = output.clone();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_matrices_equal(&input, &sorted, "permutation");
}

// ============================================================
// Blocked vs naive
// ============================================================

#[test]
fn test_blocked_matches_naive_all_block_sizes() {
    for n in [1, 2, 3, 5, 7, 16, 31] {
        let input = sequential(n);
        let mut naive = vec![0.0; n * n];
        transpose(&input, &mut naive, n);

        for block in 1..=n {
            let mut tiled = vec![0.0; n * n];
            transpose_blocked(&input, &mut tiled, n, block);
            assert_matrices_equal(&naive, &tiled, &format!("n{}_b{}", n, block));
        }
    }
}

#[test]
fn test_blocked_matches_naive_large() {
    let test_cases = [(1000, 64), (257, 64), (300, 7), (128, 128)];

    for (n, block) in test_cases {
        let input: Vec<f64> = (0..n * n).map(|v| ((v * 31) % 977) as f64 * 0.5).collect();
        let mut naive = vec![0.0; n * n];
        let mut tiled = vec![0.0; n * n];

        transpose(&input, &mut naive, n);
        transpose_blocked(&input, &mut tiled, n, block);

        assert_matrices_equal(&naive, &tiled, &format!("n{}_b{}", n, block));
    }
}

// ============================================================
// Boundaries
// ============================================================

#[test]
fn test_single_element_is_identity() {
    let input = vec![42.5];
    let mut naive = vec![0.0];
    let mut tiled = vec![0.0];

    transpose(&input, &mut naive, 1);
    transpose_blocked(&input, &mut tiled, 1, 1);

    assert_eq!(naive, input);
    assert_eq!(tiled, input);
}

#[test]
fn test_block_larger_than_matrix() {
    let n = 9;
    let input = sequential(n);
    let mut naive = vec![0.0; n * n];
    transpose(&input, &mut naive, n);

    for block in [n, n + 1, 1000] {
        let mut tiled = vec![0.0; n * n];
        transpose_blocked(&input, &mut tiled, n, block);
        assert_matrices_equal(&naive, &tiled, &format!("b{}", block));
    }
}

#[test]
fn test_empty_matrix() {
    let mut output: Vec<f64> = Vec::new();
    transpose(&[], &mut output, 0);
    transpose_blocked(&[], &mut output, 0, 4);
    assert!(output.is_empty());
}

#[test]
fn test_preserves_bit_patterns() {
    let input = vec![-0.0, f64::INFINITY, f64::MIN_POSITIVE, -1.5e300];
    let mut naive = vec![0.0; 4];
    let mut tiled = vec![0.0; 4];

    transpose(&input, &mut naive, 2);
    transpose_blocked(&input, &mut tiled, 2, 1);

    assert_eq!(naive[0].to_bits(), (-0.0f64).to_bits());
    assert_matrices_equal(&naive, &tiled, "bits");
}

// ============================================================
// Preconditions
// ============================================================

#[test]
#[should_panic(expected = "block size must be at least 1")]
fn test_zero_block_panics() {
    let input = sequential(4);
    let mut output = vec![0.0; 16];
    transpose_blocked(&input, &mut output, 4, 0);
}

#[test]
#[should_panic(expected = "output: expected")]
fn test_undersized_output_panics() {
    let input = sequential(4);
    let mut output = vec![0.0; 15];
    transpose(&input, &mut output, 4);
}

#[test]
#[should_panic(expected = "input: expected")]
fn test_blocked_undersized_input_panics() {
    let input = sequential(3);
    let mut output = vec![0.0; 16];
    transpose_blocked(&input, &mut output, 4, 2);
}
