//! Serialisable view of the editor state, handed to the page for rendering.

use serde::Serialize;

use super::{BoardCell, EditorCore};
use crate::motif::MotifStyle;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CellView {
    pub x: usize,
    pub y: usize,
    pub piece_id: Option<u32>,
    pub rotation: u8,
    /// Edge code as the occupant currently faces the board.
    pub edges: Option<String>,
}

impl From<&BoardCell> for CellView {
    fn from(cell: &BoardCell) -> Self {
        Self {
            x: cell.x,
            y: cell.y,
            piece_id: cell.piece.map(|p| p.id),
            rotation: cell.rotation,
            edges: cell.rotated_edges().map(|e| e.iter().collect()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BoardSnapshot {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<CellView>,
    pub palette_visible: bool,
    pub motif_style: MotifStyle,
    pub mismatches: usize,
    pub complete: bool,
}

impl From<&EditorCore> for BoardSnapshot {
    fn from(core: &EditorCore) -> Self {
        Self {
            width: core.board.width(),
            height: core.board.height(),
            cells: core.board.cells().iter().map(CellView::from).collect(),
            palette_visible: core.palette_visible,
            motif_style: core.motif_style,
            mismatches: core.board.mismatches(),
            complete: core.is_complete(),
        }
    }
}
