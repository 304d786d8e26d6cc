use std::result::Result as StdResult;

use thiserror::Error;

use crate::board::MAX_BOARD_SIZE;

/// Convenient result type for this crate.
pub type Result<T> = StdResult<T, Error>;

/// Invalid arguments rejected by the permutation, layout and board operations.
///
/// Unmeasured container geometry is not an error: layout falls back to the origin.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Board side length outside `1..=MAX_BOARD_SIZE`.
    #[error("board size must be in range 1..={max}, got {size}", max = MAX_BOARD_SIZE)]
    BoardSize {
        /// The rejected side length.
        size: usize,
    },

    /// Free-text board size that is not a non-negative integer.
    #[error("board size must be a whole number, got {input:?}")]
    ParseBoardSize {
        /// The rejected input, untrimmed.
        input: String,
    },

    /// Derangement check on sequences of different lengths.
    #[error("sequences differ in length: original has {original}, candidate has {candidate}")]
    LengthMismatch {
        /// Length of the original sequence.
        original: usize,
        /// Length of the candidate sequence.
        candidate: usize,
    },

    /// Linear cell index past the end of the grid.
    #[error("cell index {index} out of range for a grid of {cells} cells")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of cells on the board (N²).
        cells: usize,
    },
}
