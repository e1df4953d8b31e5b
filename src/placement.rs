//! Placement validity and auto-rotation.
//!
//! Given a piece's canonical edges and a target cell, [`check_placement`]
//! decides whether any clockwise rotation lets the piece sit there with its
//! border edges facing exactly the sides of the cell that lie on the outside of
//! the board. The search scans rotations 0, 1, 2, 3 and keeps the first fit.

use crate::edges::{Edges, PieceClass, Side, border_sides, classify, rotate_edges};

/// One of the four board corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// The two sides of a cell in this corner that face off the board.
    pub fn outward_sides(self) -> [Side; 2] {
        match self {
            Corner::TopLeft => [Side::Top, Side::Left],
            Corner::TopRight => [Side::Top, Side::Right],
            Corner::BottomRight => [Side::Bottom, Side::Right],
            Corner::BottomLeft => [Side::Bottom, Side::Left],
        }
    }
}

/// Category of a board cell, derived from its coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellCategory {
    Corner(Corner),
    /// Border cell that is not a corner; carries the side facing outward.
    Edge(Side),
    Center,
}

impl CellCategory {
    /// Per side, whether a piece placed here must show the border motif.
    pub fn outward_mask(self) -> [bool; 4] {
        let mut mask = [false; 4];
        match self {
            CellCategory::Corner(corner) => {
                for side in corner.outward_sides() {
                    mask[side.index()] = true;
                }
            }
            CellCategory::Edge(side) => mask[side.index()] = true,
            CellCategory::Center => {}
        }
        mask
    }

    /// Exact number of border edges a fitting piece exposes here.
    pub fn border_count(self) -> usize {
        match self {
            CellCategory::Corner(_) => 2,
            CellCategory::Edge(_) => 1,
            CellCategory::Center => 0,
        }
    }

    /// Whether a piece of `class` may be tried on this cell at all.
    ///
    /// Edge pieces are admitted on corner cells; the rotation check then
    /// demands border motifs on both outward sides.
    pub fn admits(self, class: PieceClass) -> bool {
        matches!(
            (class, self),
            (PieceClass::Corner, CellCategory::Corner(_))
                | (PieceClass::Edge, CellCategory::Edge(_) | CellCategory::Corner(_))
                | (PieceClass::Center, CellCategory::Center)
        )
    }
}

/// Categorise cell `(x, y)` on a `width x height` board.
///
/// Coordinates outside the board are a caller error and are not checked here.
pub fn cell_category(x: usize, y: usize, width: usize, height: usize) -> CellCategory {
    let top = y == 0;
    let bottom = y + 1 == height;
    let left = x == 0;
    let right = x + 1 == width;
    match (top, right, bottom, left) {
        (true, _, _, true) => CellCategory::Corner(Corner::TopLeft),
        (true, true, _, _) => CellCategory::Corner(Corner::TopRight),
        (_, true, true, _) => CellCategory::Corner(Corner::BottomRight),
        (_, _, true, true) => CellCategory::Corner(Corner::BottomLeft),
        (true, _, _, _) => CellCategory::Edge(Side::Top),
        (_, true, _, _) => CellCategory::Edge(Side::Right),
        (_, _, true, _) => CellCategory::Edge(Side::Bottom),
        (_, _, _, true) => CellCategory::Edge(Side::Left),
        _ => CellCategory::Center,
    }
}

/// Outcome of a placement check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub valid: bool,
    /// Rotation step the piece should take; `None` when `valid` is false.
    pub rotation: Option<u8>,
}

impl Placement {
    pub fn fits(rotation: u8) -> Self {
        Self { valid: true, rotation: Some(rotation) }
    }

    pub fn rejected() -> Self {
        Self { valid: false, rotation: None }
    }
}

/// Border alignment of already-rotated edges against a cell category.
fn aligned(rotated: &Edges, category: CellCategory) -> bool {
    let exposed = border_sides(rotated);
    let count = exposed.iter().filter(|&&b| b).count();
    // Matching the mask side by side also rules out a corner piece whose two
    // border edges sit on opposite sides.
    count == category.border_count() && exposed == category.outward_mask()
}

/// Whether the piece fits cell `(x, y)` when turned exactly `rotation` steps.
///
/// Center pieces fit any center cell at every rotation.
pub fn fits_rotation(
    edges: &Edges,
    rotation: u8,
    x: usize,
    y: usize,
    width: usize,
    height: usize,
) -> bool {
    let class = classify(edges);
    let category = cell_category(x, y, width, height);
    if !category.admits(class) {
        return false;
    }
    if class == PieceClass::Center {
        return true;
    }
    aligned(&rotate_edges(edges, i32::from(rotation)), category)
}

/// Decide whether a piece can occupy `(x, y)` and at which rotation.
///
/// `current_rotation` is only echoed back for center pieces, which carry no
/// border constraint. Border pieces get the smallest fitting rotation.
pub fn check_placement(
    edges: &Edges,
    current_rotation: u8,
    x: usize,
    y: usize,
    width: usize,
    height: usize,
) -> Placement {
    let class = classify(edges);
    let category = cell_category(x, y, width, height);
    if !category.admits(class) {
        return Placement::rejected();
    }
    if class == PieceClass::Center {
        return Placement::fits(current_rotation % 4);
    }
    (0..4u8)
        .find(|&r| aligned(&rotate_edges(edges, i32::from(r)), category))
        .map_or_else(Placement::rejected, Placement::fits)
}
