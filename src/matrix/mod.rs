//! Square row-major matrix buffer and the naive transpose.
//!
//! A [`Matrix`] owns exactly `n * n` doubles. Element (i, j) lives at
//! offset `i * n + j`. The transpose kernels work on plain slices so the
//! same code runs on a `Matrix` or on a bare `Vec<f64>`.

pub mod transpose;

use crate::error::{Result, TransposeError};

/// Owned N×N buffer of `f64`, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    n: usize,
}

impl Matrix {
    /// Allocate a zeroed N×N matrix.
    ///
    /// Returns [`TransposeError::Allocation`] if the allocator refuses the
    /// request or `n * n` overflows.
    pub fn try_zeros(n: usize) -> Result<Self> {
        let elements = n
            .checked_mul(n)
            .ok_or(TransposeError::Allocation { dimension: n })?;

        let mut data = Vec::new();
        data.try_reserve_exact(elements)
            .map_err(|_| TransposeError::Allocation { dimension: n })?;
        data.resize(elements, 0.0);

        Ok(Self { data, n })
    }

    /// Fill with the reproducible fixture `m[i * n + j] = i * n + j`.
    pub fn fill_sequential(&mut self) {
        let n = self.n;
        for i in 0..n {
            for j in 0..n {
                self.data[i * n + j] = (i * n + j) as f64;
            }
        }
    }

    /// Allocate and fill with [`Matrix::fill_sequential`].
    pub fn try_sequential(n: usize) -> Result<Self> {
        let mut m = Self::try_zeros(n)?;
        m.fill_sequential();
        Ok(m)
    }

    pub fn dimension(&self) -> usize {
        self.n
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }
}
