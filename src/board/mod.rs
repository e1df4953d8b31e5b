//! Board state for the puzzle editor.
//!
//! The board is a flat row-major vector of cells. Every mutation goes through
//! [`EditorCore`], which validates the move with the placement engine first and
//! reports what happened as an [`Action`]. A rejected move never touches the
//! board, and the move/swap logic keeps each piece id in at most one cell.

mod bindings;
pub mod notice;
#[cfg(feature = "serde")]
pub mod snapshot;

pub use bindings::{
    PlacementCheck, PuzzleEditor, SymbolDescriptor, check_placement_code, motif_color, motif_symbol,
    rotate_code,
};

use crate::catalog::{self, Piece};
use crate::config::{EditorConfig, check_dimensions};
use crate::edges::{Edges, Side, rotate_edges};
use crate::error::EditorError;
use crate::motif::MotifStyle;
use crate::placement::{check_placement, fits_rotation};

// --- Cells / Board ------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardCell {
    pub x: usize,
    pub y: usize,
    pub piece: Option<Piece>,
    /// Clockwise quarter turns applied to the occupant (0..=3).
    pub rotation: u8,
}

impl BoardCell {
    fn empty(x: usize, y: usize) -> Self {
        Self { x, y, piece: None, rotation: 0 }
    }

    fn clear(&mut self) {
        self.piece = None;
        self.rotation = 0;
    }

    fn set(&mut self, piece: Piece, rotation: u8) {
        self.piece = Some(piece);
        self.rotation = rotation;
    }

    /// Occupant edges as they face the board.
    pub fn rotated_edges(&self) -> Option<Edges> {
        self.piece
            .map(|p| rotate_edges(&p.edges, i32::from(self.rotation)))
    }
}

/// Rectangular grid of cells, addressed by `y * width + x`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<BoardCell>,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Result<Self, EditorError> {
        check_dimensions(width, height)?;
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| BoardCell::empty(x, y)))
            .collect();
        Ok(Self { width, height, cells })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// True when no cell holds a piece.
    pub fn is_clear(&self) -> bool {
        self.cells.iter().all(|c| c.piece.is_none())
    }

    pub fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub fn cells(&self) -> &[BoardCell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Result<&BoardCell, EditorError> {
        self.cells
            .get(index)
            .ok_or(EditorError::CellOutOfRange { index, len: self.cells.len() })
    }

    /// Cell currently holding `piece_id`, if it is on the board.
    pub fn position_of(&self, piece_id: u32) -> Option<usize> {
        self.cells
            .iter()
            .position(|c| c.piece.is_some_and(|p| p.id == piece_id))
    }

    /// Rotation at which `piece` fits cell `index`, if any.
    fn fit(&self, piece: &Piece, rotation: u8, index: usize) -> Option<u8> {
        let cell = &self.cells[index];
        check_placement(&piece.edges, rotation, cell.x, cell.y, self.width, self.height).rotation
    }

    /// Number of neighbouring occupied cell pairs whose touching motifs differ.
    pub fn mismatches(&self) -> usize {
        let mut count = 0;
        for (i, cell) in self.cells.iter().enumerate() {
            let Some(edges) = cell.rotated_edges() else {
                continue;
            };
            let right = (cell.x + 1 < self.width).then(|| i + 1);
            let below = (cell.y + 1 < self.height).then(|| i + self.width);
            for (neighbour, side) in [(right, Side::Right), (below, Side::Bottom)] {
                let Some(other) = neighbour.and_then(|n| self.cells[n].rotated_edges()) else {
                    continue;
                };
                let mine = edges[side.index()];
                let theirs = other[side.opposite().index()];
                if !mine.eq_ignore_ascii_case(&theirs) {
                    count += 1;
                }
            }
        }
        count
    }
}

// --- Actions ------------------------------------------------------------------

/// Why a user action was turned down. `Display` gives the notice text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The dropped piece has no rotation that fits the target cell.
    DoesNotFit { piece_id: u32, x: usize, y: usize },
    /// A swap would push the displaced piece into a cell it cannot occupy.
    SwapDoesNotFit { piece_id: u32, x: usize, y: usize },
    /// Rotating would leave the piece without a fitting orientation.
    NoOtherRotation { piece_id: u32, x: usize, y: usize },
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::DoesNotFit { piece_id, x, y } => {
                write!(f, "Piece {piece_id} does not fit at ({x}, {y})")
            }
            Rejection::SwapDoesNotFit { piece_id, x, y } => {
                write!(f, "Cannot swap: piece {piece_id} does not fit at ({x}, {y})")
            }
            Rejection::NoOtherRotation { piece_id, x, y } => {
                write!(f, "Piece {piece_id} has no other rotation that fits at ({x}, {y})")
            }
        }
    }
}

/// Outcome of an editor transition, returned for the view layer to react to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    None,
    Placed { index: usize, piece_id: u32, rotation: u8 },
    /// Dropped onto an occupied cell from the palette; the occupant went back.
    Replaced { index: usize, piece_id: u32, rotation: u8, returned_id: u32 },
    Moved { from: usize, to: usize, piece_id: u32, rotation: u8 },
    Swapped { from: usize, to: usize, piece_id: u32, other_id: u32 },
    Removed { index: usize, piece_id: u32 },
    Rotated { index: usize, piece_id: u32, rotation: u8 },
    Cleared,
    Resized { width: usize, height: usize },
    Rejected(Rejection),
}

impl Action {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Action::Rejected(_))
    }
}

// --- Editor core --------------------------------------------------------------

/// Whole editor state: the board plus the view flags the host renders from.
#[derive(Clone, Debug)]
pub struct EditorCore {
    pub board: Board,
    pub palette_visible: bool,
    pub motif_style: MotifStyle,
}

impl EditorCore {
    pub fn new(config: &EditorConfig) -> Result<Self, EditorError> {
        config.validate()?;
        Ok(Self {
            board: Board::new(config.width, config.height)?,
            palette_visible: config.palette_visible,
            motif_style: config.motif_style,
        })
    }

    fn reject(rejection: Rejection) -> Action {
        log::warn!("rejected: {rejection}");
        Action::Rejected(rejection)
    }

    /// Drop `piece_id` on cell `index`, coming either from the palette or from
    /// another cell. The piece takes the first rotation that fits the cell;
    /// center pieces keep `rotation`.
    pub fn drop_piece(
        &mut self,
        index: usize,
        piece_id: u32,
        rotation: u8,
    ) -> Result<Action, EditorError> {
        let piece = *catalog::piece(piece_id).ok_or(EditorError::UnknownPiece(piece_id))?;
        let target = *self.board.cell(index)?;
        let Some(fit) = self.board.fit(&piece, rotation, index) else {
            return Ok(Self::reject(Rejection::DoesNotFit { piece_id, x: target.x, y: target.y }));
        };
        let source = self.board.position_of(piece_id);

        let action = match (source, target.piece) {
            (Some(from), _) if from == index => {
                self.board.cells[index].rotation = fit;
                Action::Placed { index, piece_id, rotation: fit }
            }
            (Some(from), None) => {
                self.board.cells[from].clear();
                self.board.cells[index].set(piece, fit);
                Action::Moved { from, to: index, piece_id, rotation: fit }
            }
            (Some(from), Some(other)) => {
                let Some(other_fit) = self.board.fit(&other, target.rotation, from) else {
                    let origin = self.board.cells[from];
                    return Ok(Self::reject(Rejection::SwapDoesNotFit {
                        piece_id: other.id,
                        x: origin.x,
                        y: origin.y,
                    }));
                };
                self.board.cells[from].set(other, other_fit);
                self.board.cells[index].set(piece, fit);
                Action::Swapped { from, to: index, piece_id, other_id: other.id }
            }
            (None, None) => {
                self.board.cells[index].set(piece, fit);
                Action::Placed { index, piece_id, rotation: fit }
            }
            (None, Some(other)) => {
                self.board.cells[index].set(piece, fit);
                Action::Replaced { index, piece_id, rotation: fit, returned_id: other.id }
            }
        };
        log::debug!("{action:?}");
        Ok(action)
    }

    /// Take the piece off cell `index` and return it to the palette.
    pub fn remove_piece(&mut self, index: usize) -> Result<Action, EditorError> {
        let Some(piece) = self.board.cell(index)?.piece else {
            return Ok(Action::None);
        };
        self.board.cells[index].clear();
        log::debug!("removed piece {} from cell {index}", piece.id);
        Ok(Action::Removed { index, piece_id: piece.id })
    }

    /// Turn the piece on cell `index` clockwise to its next fitting rotation.
    pub fn rotate_piece(&mut self, index: usize) -> Result<Action, EditorError> {
        let cell = *self.board.cell(index)?;
        let Some(piece) = cell.piece else {
            return Ok(Action::None);
        };
        let (w, h) = (self.board.width, self.board.height);
        let next = (1..4)
            .map(|k| (cell.rotation + k) % 4)
            .find(|&r| fits_rotation(&piece.edges, r, cell.x, cell.y, w, h));
        match next {
            Some(rotation) => {
                self.board.cells[index].rotation = rotation;
                Ok(Action::Rotated { index, piece_id: piece.id, rotation })
            }
            None => Ok(Self::reject(Rejection::NoOtherRotation {
                piece_id: piece.id,
                x: cell.x,
                y: cell.y,
            })),
        }
    }

    /// Return every piece to the palette.
    pub fn clear(&mut self) -> Action {
        self.board.cells.iter_mut().for_each(BoardCell::clear);
        log::info!("board cleared");
        Action::Cleared
    }

    /// Replace the board with an empty one of a new size.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<Action, EditorError> {
        self.board = Board::new(width, height)?;
        log::info!("board resized to {width}x{height}");
        Ok(Action::Resized { width, height })
    }

    pub fn toggle_palette(&mut self) -> bool {
        self.palette_visible = !self.palette_visible;
        self.palette_visible
    }

    pub fn set_motif_style(&mut self, style: MotifStyle) {
        self.motif_style = style;
    }

    // --- Queries ---

    /// Ids of pieces on the board, in board order.
    pub fn placed_ids(&self) -> Vec<u32> {
        self.board
            .cells
            .iter()
            .filter_map(|c| c.piece.map(|p| p.id))
            .collect()
    }

    /// Catalog pieces not yet on the board, in catalog order.
    pub fn palette(&self) -> Vec<&'static Piece> {
        catalog::catalog()
            .iter()
            .filter(|p| self.board.position_of(p.id).is_none())
            .collect()
    }

    pub fn rotated_edges(&self, index: usize) -> Result<Option<Edges>, EditorError> {
        Ok(self.board.cell(index)?.rotated_edges())
    }

    /// Every cell is occupied.
    pub fn is_complete(&self) -> bool {
        self.board.cells.iter().all(|c| c.piece.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::{border_count, is_border};
    use crate::placement::{CellCategory, cell_category};

    // Catalog ids used below: 0 = "aabd" (corner), 4 = "abgb" (edge),
    // 5 = "abhc" (edge), 60 = "ggji" (center), 61 = "ggko" (center).
    fn editor(w: usize, h: usize) -> EditorCore {
        EditorCore::new(&EditorConfig::with_size(w, h)).unwrap()
    }

    fn occupant(ed: &EditorCore, index: usize) -> Option<u32> {
        ed.board.cell(index).unwrap().piece.map(|p| p.id)
    }

    #[test]
    fn board_cells_are_row_major() {
        let b = Board::new(4, 3).unwrap();
        assert_eq!(b.cell_count(), 12);
        assert_eq!(b.index_of(1, 2), Some(9));
        assert_eq!(b.index_of(4, 0), None);
        let c = b.cell(9).unwrap();
        assert_eq!((c.x, c.y), (1, 2));
        assert!(b.cell(12).is_err());
        assert!(b.is_clear());
    }

    #[test]
    fn corner_piece_auto_rotates_into_corner() {
        let mut ed = editor(5, 5);
        // "aabd" has border on top and right; three quarter turns bring it to top and left.
        let action = ed.drop_piece(0, 0, 0).unwrap();
        assert_eq!(action, Action::Placed { index: 0, piece_id: 0, rotation: 3 });
        let rotated = ed.rotated_edges(0).unwrap().unwrap();
        assert!(is_border(rotated[Side::Top.index()]));
        assert!(is_border(rotated[Side::Left.index()]));
    }

    #[test]
    fn rejected_drop_leaves_board_untouched() {
        let mut ed = editor(5, 5);
        let before = ed.board.clone();
        let action = ed.drop_piece(12, 0, 0).unwrap();
        assert_eq!(
            action,
            Action::Rejected(Rejection::DoesNotFit { piece_id: 0, x: 2, y: 2 })
        );
        assert_eq!(ed.board, before);
        assert_eq!(action_text(&action), "Piece 0 does not fit at (2, 2)");
    }

    fn action_text(action: &Action) -> String {
        match action {
            Action::Rejected(r) => r.to_string(),
            other => format!("{other:?}"),
        }
    }

    #[test]
    fn moving_a_piece_keeps_it_unique() {
        let mut ed = editor(5, 5);
        ed.drop_piece(1, 4, 0).unwrap();
        let action = ed.drop_piece(3, 4, 0).unwrap();
        assert_eq!(action, Action::Moved { from: 1, to: 3, piece_id: 4, rotation: 0 });
        assert_eq!(occupant(&ed, 1), None);
        assert_eq!(occupant(&ed, 3), Some(4));
        assert_eq!(ed.placed_ids(), vec![4]);
    }

    #[test]
    fn swap_between_two_cells() {
        let mut ed = editor(5, 5);
        ed.drop_piece(1, 4, 0).unwrap();
        ed.drop_piece(2, 5, 0).unwrap();
        let action = ed.drop_piece(2, 4, 0).unwrap();
        assert_eq!(action, Action::Swapped { from: 1, to: 2, piece_id: 4, other_id: 5 });
        assert_eq!(occupant(&ed, 1), Some(5));
        assert_eq!(occupant(&ed, 2), Some(4));
    }

    #[test]
    fn center_piece_cannot_take_an_edge_cell() {
        let mut ed = editor(5, 5);
        ed.drop_piece(1, 4, 0).unwrap();
        ed.drop_piece(12, 60, 0).unwrap();
        let before = ed.board.clone();
        let action = ed.drop_piece(1, 60, 0).unwrap();
        assert_eq!(
            action,
            Action::Rejected(Rejection::DoesNotFit { piece_id: 60, x: 1, y: 0 })
        );
        assert_eq!(ed.board, before);
    }

    #[test]
    fn swap_across_edges_re_rotates_both_pieces() {
        let mut ed = editor(5, 5);
        ed.drop_piece(1, 4, 0).unwrap();
        ed.drop_piece(22, 5, 0).unwrap();
        assert_eq!(ed.board.cell(22).unwrap().rotation, 2);
        let action = ed.drop_piece(1, 5, 0).unwrap();
        assert_eq!(action, Action::Swapped { from: 22, to: 1, piece_id: 5, other_id: 4 });
        assert_eq!(ed.board.cell(1).unwrap().rotation, 0);
        let rotated = ed.rotated_edges(22).unwrap().unwrap();
        assert!(is_border(rotated[Side::Bottom.index()]));
    }

    #[test]
    fn placed_piece_of_another_class_does_not_fit() {
        let mut ed = editor(5, 5);
        ed.drop_piece(0, 0, 0).unwrap();
        ed.drop_piece(1, 4, 0).unwrap();
        let before = ed.board.clone();
        assert_eq!(
            ed.drop_piece(0, 4, 0).unwrap(),
            Action::Rejected(Rejection::DoesNotFit { piece_id: 4, x: 0, y: 0 })
        );
        assert_eq!(
            ed.drop_piece(1, 0, 0).unwrap(),
            Action::Rejected(Rejection::DoesNotFit { piece_id: 0, x: 1, y: 0 })
        );
        assert_eq!(ed.board, before);
    }

    #[test]
    fn swap_is_refused_when_the_displaced_piece_cannot_move_back() {
        let mut ed = editor(5, 5);
        ed.drop_piece(12, 60, 0).unwrap();
        // An edge piece stranded on a center cell, e.g. left over from an
        // earlier, larger board.
        let stray = *catalog::piece(4).unwrap();
        ed.board.cells[6].set(stray, 0);
        let before = ed.board.clone();

        let action = ed.drop_piece(6, 60, 0).unwrap();
        assert_eq!(
            action,
            Action::Rejected(Rejection::SwapDoesNotFit { piece_id: 4, x: 2, y: 2 })
        );
        assert_eq!(ed.board, before);
        assert_eq!(occupant(&ed, 12), Some(60));
        assert_eq!(occupant(&ed, 6), Some(4));
    }

    #[test]
    fn dropping_on_own_cell_takes_the_new_rotation() {
        let mut ed = editor(5, 5);
        ed.drop_piece(12, 60, 2).unwrap();
        let action = ed.drop_piece(12, 60, 3).unwrap();
        assert_eq!(action, Action::Placed { index: 12, piece_id: 60, rotation: 3 });
        assert_eq!(ed.board.cell(12).unwrap().rotation, 3);
        assert_eq!(ed.placed_ids(), vec![60]);
    }

    #[test]
    fn palette_drop_on_occupied_cell_returns_occupant() {
        let mut ed = editor(5, 5);
        ed.drop_piece(12, 60, 2).unwrap();
        let action = ed.drop_piece(12, 61, 1).unwrap();
        assert_eq!(
            action,
            Action::Replaced { index: 12, piece_id: 61, rotation: 1, returned_id: 60 }
        );
        assert!(ed.palette().iter().any(|p| p.id == 60));
        assert!(!ed.palette().iter().any(|p| p.id == 61));
    }

    #[test]
    fn center_piece_keeps_requested_rotation() {
        let mut ed = editor(5, 5);
        let action = ed.drop_piece(6, 60, 2).unwrap();
        assert_eq!(action, Action::Placed { index: 6, piece_id: 60, rotation: 2 });
    }

    #[test]
    fn rotate_center_piece_cycles() {
        let mut ed = editor(5, 5);
        ed.drop_piece(6, 60, 3).unwrap();
        assert_eq!(
            ed.rotate_piece(6).unwrap(),
            Action::Rotated { index: 6, piece_id: 60, rotation: 0 }
        );
        assert_eq!(
            ed.rotate_piece(6).unwrap(),
            Action::Rotated { index: 6, piece_id: 60, rotation: 1 }
        );
    }

    #[test]
    fn rotate_border_piece_is_refused() {
        let mut ed = editor(5, 5);
        ed.drop_piece(2, 4, 0).unwrap();
        let action = ed.rotate_piece(2).unwrap();
        assert_eq!(
            action,
            Action::Rejected(Rejection::NoOtherRotation { piece_id: 4, x: 2, y: 0 })
        );
        assert_eq!(ed.board.cell(2).unwrap().rotation, 0);
    }

    #[test]
    fn rotate_and_remove_on_empty_cell_do_nothing() {
        let mut ed = editor(3, 3);
        assert_eq!(ed.rotate_piece(4).unwrap(), Action::None);
        assert_eq!(ed.remove_piece(4).unwrap(), Action::None);
        assert!(ed.rotate_piece(9).is_err());
    }

    #[test]
    fn remove_returns_piece_to_palette() {
        let mut ed = editor(3, 3);
        ed.drop_piece(4, 60, 0).unwrap();
        assert_eq!(ed.palette().len(), catalog::catalog().len() - 1);
        assert_eq!(ed.remove_piece(4).unwrap(), Action::Removed { index: 4, piece_id: 60 });
        assert_eq!(ed.palette().len(), catalog::catalog().len());
    }

    #[test]
    fn unknown_piece_and_bad_index_are_errors() {
        let mut ed = editor(3, 3);
        assert!(matches!(ed.drop_piece(0, 999, 0), Err(EditorError::UnknownPiece(999))));
        assert!(matches!(
            ed.drop_piece(9, 0, 0),
            Err(EditorError::CellOutOfRange { index: 9, len: 9 })
        ));
    }

    #[test]
    fn clear_resize_and_flags() {
        let mut ed = editor(3, 3);
        ed.drop_piece(4, 60, 0).unwrap();
        assert_eq!(ed.clear(), Action::Cleared);
        assert!(ed.board.is_clear());
        assert_eq!(ed.resize(4, 2).unwrap(), Action::Resized { width: 4, height: 2 });
        assert_eq!(ed.board.cell_count(), 8);
        assert!(ed.resize(0, 2).is_err());
        assert_eq!(ed.board.cell_count(), 8);
        assert!(!ed.toggle_palette());
        assert!(ed.toggle_palette());
        ed.set_motif_style(MotifStyle::Symbol);
        assert_eq!(ed.motif_style, MotifStyle::Symbol);
    }

    #[test]
    fn two_by_two_board_is_all_corners() {
        let mut ed = editor(2, 2);
        for id in 0..4 {
            let action = ed.drop_piece(id as usize, id, 0).unwrap();
            assert!(!action.is_rejected(), "{action:?}");
        }
        assert!(ed.is_complete());
        for cell in ed.board.cells() {
            let edges = cell.rotated_edges().unwrap();
            assert_eq!(border_count(&edges), 2);
            assert!(matches!(
                cell_category(cell.x, cell.y, 2, 2),
                CellCategory::Corner(_)
            ));
        }
    }

    #[test]
    fn mismatches_count_touching_edges() {
        let mut ed = editor(4, 4);
        // Two center pieces side by side in the middle rows.
        ed.drop_piece(5, 60, 0).unwrap(); // "ggji": right edge 'g'
        ed.drop_piece(6, 61, 0).unwrap(); // "ggko": left edge 'o'
        assert_eq!(ed.board.mismatches(), 1);
        // After three quarter turns "ggko" shows its top 'g' on the left.
        ed.rotate_piece(6).unwrap();
        ed.rotate_piece(6).unwrap();
        ed.rotate_piece(6).unwrap();
        let left = ed.rotated_edges(6).unwrap().unwrap()[Side::Left.index()];
        assert_eq!(left, 'g');
        assert_eq!(ed.board.mismatches(), 0);
    }
}
