use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use wasm_bindgen::prelude::*;

use crate::{Board, BoardSize, MarbleStyle, cell_coordinate, is_derangement, shuffled};

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

/// Installs the panic hook so Rust panics show up in the browser console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Returns a uniformly shuffled copy of `values` using the given seed.
#[wasm_bindgen(js_name = generatePermutation)]
pub fn generate_permutation(values: Vec<u32>, seed: u64) -> Vec<u32> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    shuffled(&values, &mut rng)
}

/// Returns true iff `candidate` differs from `original` at every position.
#[wasm_bindgen(js_name = isDerangement)]
pub fn is_derangement_js(original: Vec<u32>, candidate: Vec<u32>) -> Result<bool, JsError> {
    Ok(is_derangement(&original, &candidate)?)
}

/// Returns `{ top, left }` for cell `index` on a board of side `board_size`.
#[wasm_bindgen(js_name = cellCoordinate)]
pub fn cell_coordinate_js(
    index: u32,
    board_size: u32,
    width: f64,
    height: f64,
) -> Result<JsValue, JsError> {
    let coordinate = cell_coordinate(index as usize, board_size as usize, width, height)?;
    to_js(&coordinate)
}

/// Board state for the page: current arrangement, derangement flag and marbles.
#[wasm_bindgen]
pub struct WasmBoard {
    board: Board<ChaCha20Rng>,
    style: MarbleStyle,
}

#[wasm_bindgen]
impl WasmBoard {
    /// Create a shuffled board of side `size`. The `seed` determines the random sequence.
    #[wasm_bindgen(constructor)]
    pub fn new(size: u32, seed: u64) -> Result<WasmBoard, JsError> {
        let size = BoardSize::new(size as usize)?;
        let rng = ChaCha20Rng::seed_from_u64(seed);
        Ok(WasmBoard {
            board: Board::new(size, rng),
            style: MarbleStyle::default(),
        })
    }

    /// Board side length.
    #[wasm_bindgen(getter)]
    pub fn size(&self) -> u32 {
        self.board.size().get() as u32
    }

    /// Whether the current arrangement is a derangement.
    #[wasm_bindgen(getter = isDeranged)]
    pub fn is_deranged(&self) -> bool {
        self.board.is_deranged()
    }

    /// Current arrangement: element `slot` is the value shown in that slot.
    pub fn arrangement(&self) -> Vec<u32> {
        self.board.arrangement().iter().map(|&v| v as u32).collect()
    }

    /// Resize the board and reshuffle.
    pub fn resize(&mut self, size: u32) -> Result<(), JsError> {
        self.board.resize(BoardSize::new(size as usize)?);
        Ok(())
    }

    /// Resize from the raw text of a number input.
    #[wasm_bindgen(js_name = resizeFromInput)]
    pub fn resize_from_input(&mut self, input: &str) -> Result<(), JsError> {
        self.board.resize(input.parse::<BoardSize>()?);
        Ok(())
    }

    /// Reshuffle. Returns `[{ value, from, to }]` with each value's old and new slot.
    pub fn shuffle(&mut self) -> Result<JsValue, JsError> {
        let moves = self.board.shuffle();
        to_js(&moves)
    }

    /// Marbles placed inside a container of the given size, one per value.
    pub fn marbles(&self, width: f64, height: f64) -> Result<JsValue, JsError> {
        let marbles = self.board.marbles(width, height, &self.style)?;
        to_js(&marbles)
    }
}
