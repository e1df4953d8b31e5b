//! Tessera Edit core crate.
//!
//! Rules and editor state for an Eternity II style edge-matching puzzle, built
//! for the browser as WebAssembly. The page draws the board and palette and
//! forwards drops, clicks and right-clicks to [`board::PuzzleEditor`]; every
//! placement goes through the rotation search in [`placement`] first.
//!
//! | Module | Role |
//! |--------|------|
//! | [`edges`] | Edge tuples, clockwise rotation, piece classification |
//! | [`placement`] | Cell categories and the placement / auto-rotation check |
//! | [`catalog`] | The static 256-piece set |
//! | [`board`] | Board, editor transitions, notices, JS bindings |
//! | [`motif`] | Motif descriptors and drawing style |
//! | [`config`] | Editor configuration |

use wasm_bindgen::prelude::*;

pub mod board;
pub mod catalog;
pub mod config;
pub mod edges;
pub mod error;
pub mod motif;
pub mod placement;

pub use board::{Action, Board, BoardCell, EditorCore, PuzzleEditor, Rejection};
pub use catalog::{Piece, catalog, piece};
pub use config::EditorConfig;
pub use edges::{BORDER_MOTIF, Edges, PieceClass, Side, classify, rotate_edges};
pub use error::EditorError;
pub use placement::{CellCategory, Corner, Placement, cell_category, check_placement, fits_rotation};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if console_log::init_with_level(log::Level::Info).is_err() {
            // A logger is already installed (module re-initialised by the host).
            log::debug!("console logger already set");
        }
    }
}

/// Milliseconds from the page's performance clock, or 0 outside a browser window.
#[cfg(target_arch = "wasm32")]
pub(crate) fn performance_now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map_or(0.0, |p| p.now())
}

/// Native builds have no page clock; notices then never age.
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn performance_now() -> f64 {
    0.0
}
