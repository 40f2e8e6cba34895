//! Compiled-in run configuration.

use crate::error::{Result, TransposeError};

/// Matrix side length used by the binary.
pub const DEFAULT_DIMENSION: usize = 1000;

/// Tile edge used by the binary. 64×64 doubles is 32 KiB per tile side,
/// so an input tile plus an output tile fit a 64 KiB L1D.
pub const DEFAULT_BLOCK_SIZE: usize = 64;

/// Side of the corner block printed by the diagnostics.
pub const DIAGNOSTIC_CORNER: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    pub dimension: usize,
    pub block_size: usize,
    /// Run and time the tiled transpose. When off, the tile timer still
    /// samples the clock twice back to back.
    pub run_blocked: bool,
    /// Print the top-left 4×4 corner of the input and each output.
    pub show_diagnostics: bool,
}

/// The lab run: naive transpose only, no diagnostics. Turn the tiled step on
/// with [`BenchConfig::with_blocked`].
impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            block_size: DEFAULT_BLOCK_SIZE,
            run_blocked: false,
            show_diagnostics: false,
        }
    }
}

impl BenchConfig {
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    pub fn with_blocked(mut self, run_blocked: bool) -> Self {
        self.run_blocked = run_blocked;
        self
    }

    pub fn with_diagnostics(mut self, show_diagnostics: bool) -> Self {
        self.show_diagnostics = show_diagnostics;
        self
    }

    /// Reject configurations the kernels would panic on.
    ///
    /// The block size is checked even when the tiled step is off so that
    /// flipping `run_blocked` never turns a valid config into a broken one.
    pub fn validate(&self) -> Result<()> {
        if self.dimension == 0 {
            return Err(TransposeError::ZeroDimension);
        }
        if self.block_size == 0 {
            return Err(TransposeError::ZeroBlockSize);
        }
        if self.show_diagnostics && self.dimension < DIAGNOSTIC_CORNER {
            return Err(TransposeError::DiagnosticsTooSmall {
                dimension: self.dimension,
            });
        }
        Ok(())
    }
}
