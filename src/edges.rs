//! Edge model: sides, edge tuples, clockwise rotation and piece classification.
//!
//! A piece is described by four single-character motif labels in canonical
//! `[top, right, bottom, left]` order. Rotation is never stored on the piece;
//! callers keep a rotation step (0..=3) per board cell and derive the rotated
//! tuple with [`rotate_edges`] whenever they need to compare against the board.

/// Motif label marking an edge that faces the outside of the board.
pub const BORDER_MOTIF: char = 'a';

/// Four motif labels ordered `[top, right, bottom, left]`.
pub type Edges = [char; 4];

/// One side of a square piece / board cell, in clockwise order from the top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    /// Position of this side inside an [`Edges`] tuple.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The side facing this one on a neighbouring cell.
    pub fn opposite(self) -> Side {
        Side::ALL[(self.index() + 2) % 4]
    }
}

/// True when `label` is the border motif (case-insensitive).
pub fn is_border(label: char) -> bool {
    label.eq_ignore_ascii_case(&BORDER_MOTIF)
}

/// Normalise any integer step count into `0..=3`.
pub fn normalize_rotation(steps: i32) -> u8 {
    // rem_euclid keeps negative counts counter-clockwise: -1 == 3.
    steps.rem_euclid(4) as u8
}

/// Edges of a piece after physically turning it clockwise by `steps * 90°`.
///
/// The edge now facing side `i` is the one that faced `(i - steps) mod 4`
/// before the turn, so `rotate_edges(e, 1)[Top]` is the old left edge.
pub fn rotate_edges(edges: &Edges, steps: i32) -> Edges {
    let r = normalize_rotation(steps) as usize;
    let mut out = *edges;
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = edges[(i + 4 - r) % 4];
    }
    out
}

/// Which sides of an edge tuple carry the border motif.
pub fn border_sides(edges: &Edges) -> [bool; 4] {
    edges.map(is_border)
}

/// Number of border-motif edges on a piece; unchanged by rotation.
pub fn border_count(edges: &Edges) -> usize {
    edges.iter().filter(|&&e| is_border(e)).count()
}

/// Rotation-invariant class of a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PieceClass {
    /// Two or more border edges. Pieces with three or four also land here.
    Corner,
    /// Exactly one border edge.
    Edge,
    /// No border edge.
    Center,
}

impl PieceClass {
    pub fn as_str(self) -> &'static str {
        match self {
            PieceClass::Corner => "corner",
            PieceClass::Edge => "edge",
            PieceClass::Center => "center",
        }
    }
}

impl std::fmt::Display for PieceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a piece by how many of its edges carry the border motif.
pub fn classify(edges: &Edges) -> PieceClass {
    match border_count(edges) {
        0 => PieceClass::Center,
        1 => PieceClass::Edge,
        _ => PieceClass::Corner,
    }
}
