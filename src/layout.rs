//! Grid layout: where each cell of an `N x N` board is drawn inside its container.

use crate::{Error, Result};

/// Top-left offset of a grid cell, in the container's units (usually pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "wasm", derive(serde::Serialize))]
pub struct Coordinate {
    /// Offset from the container's top edge.
    pub top: f64,
    /// Offset from the container's left edge.
    pub left: f64,
}

impl Coordinate {
    /// The container origin, used while the container is not yet measured.
    pub const ORIGIN: Self = Self { top: 0.0, left: 0.0 };
}

/// Returns the top-left offset of cell `index` on a board of side `board_size`.
///
/// Cells are laid out row-major: `row = index / N`, `col = index % N`. Columns
/// are spaced by `container_width / N` and rows by `container_height / N`.
///
/// If either container dimension is zero, negative or not finite the container
/// has not been measured yet and [`Coordinate::ORIGIN`] is returned.
///
/// # Errors
/// Returns [`Error::BoardSize`] if `board_size` is 0 and
/// [`Error::IndexOutOfRange`] if `index >= board_size²`.
pub fn cell_coordinate(
    index: usize,
    board_size: usize,
    container_width: f64,
    container_height: f64,
) -> Result<Coordinate> {
    if board_size == 0 {
        return Err(Error::BoardSize { size: board_size });
    }
    let cells = board_size
        .checked_mul(board_size)
        .ok_or(Error::BoardSize { size: board_size })?;
    if index >= cells {
        return Err(Error::IndexOutOfRange { index, cells });
    }
    if !is_measured(container_width) || !is_measured(container_height) {
        log::trace!(
            "container {}x{} not measured, placing cell {} at origin",
            container_width,
            container_height,
            index
        );
        return Ok(Coordinate::ORIGIN);
    }

    let row = index / board_size;
    let col = index % board_size;
    let cell_width = container_width / board_size as f64;
    let cell_height = container_height / board_size as f64;

    Ok(Coordinate {
        top: row as f64 * cell_height,
        left: col as f64 * cell_width,
    })
}

#[inline]
fn is_measured(dimension: f64) -> bool {
    dimension.is_finite() && dimension > 0.0
}

/// Number of decimal digits in `n`. `digit_count(0) == 1`.
pub fn digit_count(n: usize) -> u32 {
    n.checked_ilog10().map_or(1, |d| d + 1)
}

/// Sizing of the round token ("marble") drawn for each value.
///
/// Marbles grow with the number of digits of their label so multi-digit
/// numbers still fit.
#[derive(Debug, Clone, PartialEq)]
pub struct MarbleStyle {
    /// Diameter before any digits are accounted for.
    pub base_px: f64,
    /// Extra diameter per label digit.
    pub px_per_digit: f64,
    /// Font size before any digits are accounted for.
    pub font_base_px: f64,
    /// Extra font size per label digit.
    pub font_px_per_digit: f64,
}

impl Default for MarbleStyle {
    fn default() -> Self {
        Self {
            base_px: 30.0,
            px_per_digit: 10.0,
            font_base_px: 20.0,
            font_px_per_digit: 1.0,
        }
    }
}

impl MarbleStyle {
    /// Diameter of the marble showing `label`.
    pub fn diameter(&self, label: usize) -> f64 {
        self.base_px + self.px_per_digit * digit_count(label) as f64
    }

    /// Font size of the text `label`.
    pub fn font_size(&self, label: usize) -> f64 {
        self.font_base_px + self.font_px_per_digit * digit_count(label) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn coord(top: f64, left: f64) -> Coordinate {
        Coordinate { top, left }
    }

    #[test]
    fn two_by_two_corners() {
        assert_eq!(cell_coordinate(0, 2, 100.0, 100.0), Ok(coord(0.0, 0.0)));
        assert_eq!(cell_coordinate(1, 2, 100.0, 100.0), Ok(coord(0.0, 50.0)));
        assert_eq!(cell_coordinate(2, 2, 100.0, 100.0), Ok(coord(50.0, 0.0)));
        assert_eq!(cell_coordinate(3, 2, 100.0, 100.0), Ok(coord(50.0, 50.0)));
    }

    #[test]
    fn non_square_container_uses_each_axis() {
        // width spaces columns, height spaces rows
        assert_eq!(cell_coordinate(5, 3, 300.0, 90.0), Ok(coord(30.0, 200.0)));
        assert_eq!(cell_coordinate(7, 3, 300.0, 90.0), Ok(coord(60.0, 100.0)));
    }

    #[test]
    fn single_cell_board_is_origin() {
        assert_eq!(cell_coordinate(0, 1, 256.0, 256.0), Ok(Coordinate::ORIGIN));
    }

    #[test]
    fn unmeasured_container_falls_back_to_origin() {
        for (w, h) in [
            (0.0, 0.0),
            (0.0, 100.0),
            (100.0, 0.0),
            (-5.0, 100.0),
            (f64::NAN, 100.0),
            (100.0, f64::INFINITY),
        ] {
            assert_eq!(cell_coordinate(3, 2, w, h), Ok(Coordinate::ORIGIN), "{}x{}", w, h);
        }
    }

    #[test]
    fn invalid_arguments_are_rejected() {
        assert_eq!(
            cell_coordinate(0, 0, 100.0, 100.0),
            Err(Error::BoardSize { size: 0 })
        );
        assert_eq!(
            cell_coordinate(4, 2, 100.0, 100.0),
            Err(Error::IndexOutOfRange { index: 4, cells: 4 })
        );
        // index validation happens even before the container is measured
        assert!(cell_coordinate(9, 3, 0.0, 0.0).is_err());
    }

    #[test]
    fn coordinates_tile_the_board() {
        for n in 1..=12 {
            let coords: HashSet<(u64, u64)> = (0..n * n)
                .map(|i| {
                    let c = cell_coordinate(i, n, 256.0, 256.0).unwrap();
                    (c.top.to_bits(), c.left.to_bits())
                })
                .collect();
            assert_eq!(coords.len(), n * n, "n={}: overlapping cells", n);
        }
    }

    #[test]
    fn layout_is_pure() {
        assert_eq!(
            cell_coordinate(7, 4, 123.0, 77.0),
            cell_coordinate(7, 4, 123.0, 77.0)
        );
    }

    #[test]
    fn digits() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(99), 2);
        assert_eq!(digit_count(100), 3);
    }

    #[test]
    fn marble_grows_with_digits() {
        let style = MarbleStyle::default();
        assert_eq!(style.diameter(1), 40.0);
        assert_eq!(style.diameter(16), 50.0);
        assert_eq!(style.font_size(1), 21.0);
        assert_eq!(style.font_size(100), 23.0);
    }
}
