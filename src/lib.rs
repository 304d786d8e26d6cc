#![doc = include_str!("../README.md")]

mod board;
mod error;
mod layout;
mod permutation;
#[cfg(feature = "wasm")]
mod wasm;

pub use board::{Board, BoardSize, MAX_BOARD_SIZE, Marble, Move};
pub use error::{Error, Result};
pub use layout::{Coordinate, MarbleStyle, cell_coordinate, digit_count};
pub use permutation::{
    fixed_points, identity, is_derangement, positions, shuffle_in_place, shuffled,
};
