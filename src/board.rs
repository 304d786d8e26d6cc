use std::fmt;
use std::str::FromStr;

use crate::layout::{Coordinate, MarbleStyle, cell_coordinate};
use crate::permutation::{fixed_points, identity, is_derangement, positions, shuffled};
use crate::{Error, Result};
use rand::Rng;

/// Largest accepted board side length.
pub const MAX_BOARD_SIZE: usize = 255;

/// Side length `N` of a square board of `N²` cells, in `1..=MAX_BOARD_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardSize(usize);

impl BoardSize {
    /// Validates a side length.
    ///
    /// # Errors
    /// Returns [`Error::BoardSize`] if `size` is 0 or above [`MAX_BOARD_SIZE`].
    pub fn new(size: usize) -> Result<Self> {
        if !(1..=MAX_BOARD_SIZE).contains(&size) {
            return Err(Error::BoardSize { size });
        }
        Ok(Self(size))
    }

    /// Returns the side length.
    pub fn get(self) -> usize {
        self.0
    }

    /// Returns the number of cells, `N²`.
    pub fn cells(self) -> usize {
        self.0 * self.0
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self(2)
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = Error;

    fn try_from(size: usize) -> Result<Self> {
        Self::new(size)
    }
}

/// Parses user-entered text such as the contents of a number input.
///
/// Surrounding whitespace is ignored. Signs, fractions and non-digits are
/// rejected with [`Error::ParseBoardSize`].
impl FromStr for BoardSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::ParseBoardSize {
                input: s.to_owned(),
            });
        }
        // All digits: the only parse failure left is overflow, which is out of range anyway.
        let size = trimmed.parse::<usize>().unwrap_or(usize::MAX);
        Self::new(size)
    }
}

/// One value moving between slots during a shuffle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "wasm", derive(serde::Serialize))]
pub struct Move {
    /// The value (token) that moves.
    pub value: usize,
    /// Slot holding the value before the shuffle.
    pub from: usize,
    /// Slot holding the value after the shuffle.
    pub to: usize,
}

/// A token to draw: its label, where it goes and how big it is.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "wasm", derive(serde::Serialize))]
pub struct Marble {
    /// The value this marble represents.
    pub value: usize,
    /// Text shown on the marble, `value + 1`.
    pub label: usize,
    /// Slot the value currently occupies.
    pub slot: usize,
    /// Top-left of the slot inside the container.
    pub coordinate: Coordinate,
    /// Marble diameter.
    pub diameter: f64,
    /// Label font size.
    pub font_size: f64,
}

/// A shuffled board of `N²` numbered tokens.
///
/// Holds the identity sequence, the current arrangement (a permutation of the
/// identity), its value-to-slot lookup and whether the arrangement is a
/// derangement. Every shuffle and every resize replaces the arrangement.
///
/// # Example
///
/// ```
/// use derangement_sim::{Board, BoardSize};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// let rng = ChaCha20Rng::seed_from_u64(0);
/// let mut board = Board::new(BoardSize::new(3).unwrap(), rng);
///
/// let moves = board.shuffle();
/// assert_eq!(moves.len(), 9);
/// for m in &moves {
///     assert_eq!(board.arrangement()[m.to], m.value);
/// }
/// ```
pub struct Board<R> {
    size: BoardSize,
    identity: Vec<usize>,
    arrangement: Vec<usize>,
    slots: Vec<usize>,
    deranged: bool,
    rng: R,
}

impl<R: Rng> Board<R> {
    /// Creates a board of the given size and shuffles it once.
    pub fn new(size: BoardSize, rng: R) -> Self {
        let identity = identity(size.cells());
        let mut board = Self {
            size,
            slots: identity.clone(),
            arrangement: identity.clone(),
            identity,
            deranged: false,
            rng,
        };
        board.reshuffle();
        log::debug!(
            "created {}x{} board, deranged={}",
            size,
            size,
            board.deranged
        );
        board
    }

    /// Returns the board side length.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Returns the identity sequence `[0, .., N²-1]`.
    pub fn identity(&self) -> &[usize] {
        &self.identity
    }

    /// Returns the current arrangement: `arrangement()[slot]` is the value in `slot`.
    pub fn arrangement(&self) -> &[usize] {
        &self.arrangement
    }

    /// Returns true if no value sits in its own slot.
    pub fn is_deranged(&self) -> bool {
        self.deranged
    }

    /// Returns the slot currently holding `value`, or `None` if it is not on the board.
    pub fn slot_of(&self, value: usize) -> Option<usize> {
        self.slots.get(value).copied()
    }

    /// Returns the slots whose value did not move away from its own slot.
    pub fn fixed_points(&self) -> Vec<usize> {
        // identity and arrangement always have equal length
        fixed_points(&self.identity, &self.arrangement).unwrap_or_default()
    }

    /// Replaces the arrangement with a fresh shuffle of the identity.
    ///
    /// Returns one [`Move`] per value, in value order, from its previous slot
    /// to its new one.
    pub fn shuffle(&mut self) -> Vec<Move> {
        let previous = self.slots.clone();
        self.reshuffle();
        log::debug!(
            "shuffled {}x{} board, deranged={}",
            self.size,
            self.size,
            self.deranged
        );
        previous
            .into_iter()
            .zip(&self.slots)
            .enumerate()
            .map(|(value, (from, &to))| Move { value, from, to })
            .collect()
    }

    /// Changes the board size, regenerating the identity and reshuffling.
    pub fn resize(&mut self, size: BoardSize) {
        self.size = size;
        self.identity = identity(size.cells());
        self.reshuffle();
        log::debug!(
            "resized board to {}x{}, deranged={}",
            size,
            size,
            self.deranged
        );
    }

    /// Returns a marble per value, placed at the slot that value now occupies.
    ///
    /// An unmeasured container places every marble at the origin.
    ///
    /// # Errors
    /// Propagates layout errors, which do not occur for a consistent board.
    pub fn marbles(
        &self,
        container_width: f64,
        container_height: f64,
        style: &MarbleStyle,
    ) -> Result<Vec<Marble>> {
        self.slots
            .iter()
            .enumerate()
            .map(|(value, &slot)| {
                let coordinate =
                    cell_coordinate(slot, self.size.get(), container_width, container_height)?;
                let label = value + 1;
                Ok(Marble {
                    value,
                    label,
                    slot,
                    coordinate,
                    diameter: style.diameter(label),
                    font_size: style.font_size(label),
                })
            })
            .collect()
    }

    fn reshuffle(&mut self) {
        self.arrangement = shuffled(&self.identity, &mut self.rng);
        self.slots = positions(&self.arrangement);
        // same length by construction
        self.deranged = is_derangement(&self.identity, &self.arrangement).unwrap_or(false);
    }
}
