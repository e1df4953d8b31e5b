//! Motif descriptors for the view layer.
//!
//! Edge labels form a closed set (`a` for the border plus `b..=w` for the
//! interior patterns). The view asks this table how to draw a label instead of
//! looking components up by string.

use crate::error::EditorError;

/// How edge motifs are drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MotifStyle {
    /// Coloured disc with the motif letter.
    #[default]
    Circle,
    /// Pictorial symbol from the symbol sheet.
    Symbol,
}

impl MotifStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            MotifStyle::Circle => "circle",
            MotifStyle::Symbol => "symbol",
        }
    }
}

impl std::str::FromStr for MotifStyle {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "circle" => Ok(MotifStyle::Circle),
            "symbol" => Ok(MotifStyle::Symbol),
            other => Err(EditorError::UnknownMotifStyle(other.to_owned())),
        }
    }
}

/// Primitive a symbol is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SymbolShape {
    Circle,
    Rect,
    Ellipse,
    Polygon,
    Path,
}

impl SymbolShape {
    pub fn as_str(self) -> &'static str {
        match self {
            SymbolShape::Circle => "circle",
            SymbolShape::Rect => "rect",
            SymbolShape::Ellipse => "ellipse",
            SymbolShape::Polygon => "polygon",
            SymbolShape::Path => "path",
        }
    }
}

/// Whether the colour fills the shape or strokes an unfilled outline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Paint {
    Fill,
    Stroke,
}

impl Paint {
    pub fn as_str(self) -> &'static str {
        match self {
            Paint::Fill => "fill",
            Paint::Stroke => "stroke",
        }
    }
}

/// Rendering descriptor for one motif in symbol style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MotifSymbol {
    pub shape: SymbolShape,
    pub paint: Paint,
    pub colour: &'static str,
}

const fn fill(shape: SymbolShape, colour: &'static str) -> Option<MotifSymbol> {
    Some(MotifSymbol { shape, paint: Paint::Fill, colour })
}

const fn stroke(colour: &'static str) -> Option<MotifSymbol> {
    Some(MotifSymbol { shape: SymbolShape::Path, paint: Paint::Stroke, colour })
}

/// Symbol sheet indexed by [`Motif::symbol_index`]. The border draws nothing.
const SYMBOLS: [Option<MotifSymbol>; 23] = {
    use SymbolShape::*;
    [
        None,
        fill(Circle, "#f38622"),
        fill(Rect, "#ee3fa8"),
        fill(Polygon, "#eced25"),
        stroke("#265e93"),
        stroke("#8682bc"),
        fill(Polygon, "#2bb35a"),
        fill(Circle, "#f0ed24"),
        fill(Ellipse, "#80d5f8"),
        fill(Polygon, "#75cff2"),
        fill(Polygon, "#2bb356"),
        stroke("#ee3ea8"),
        fill(Polygon, "#f48614"),
        stroke("#145c8c"),
        fill(Polygon, "#f4892a"),
        fill(Polygon, "#b6e8f9"),
        stroke("#fef102"),
        stroke("#ec359e"),
        stroke("#fdf102"),
        stroke("#864ca4"),
        stroke("#eced29"),
        stroke("#43aee6"),
        stroke("#81d1f0"),
    ]
};

/// Circle-style hue for any ASCII letter, 13° apart from `a`.
///
/// Catalog pieces only use `a..=w`; the rest of the alphabet still gets a
/// colour so ad-hoc edge codes render.
pub fn letter_hue(label: char) -> Option<u16> {
    let lower = label.to_ascii_lowercase();
    lower.is_ascii_lowercase().then(|| u16::from(lower as u8 - b'a') * 13)
}

/// CSS colour for a letter in circle style.
pub fn letter_color(label: char) -> Option<String> {
    letter_hue(label).map(|h| format!("hsl({h}, 70%, 60%)"))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Motif {
    Border,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
}

impl Motif {
    pub const ALL: [Motif; 23] = [
        Motif::Border,
        Motif::B,
        Motif::C,
        Motif::D,
        Motif::E,
        Motif::F,
        Motif::G,
        Motif::H,
        Motif::I,
        Motif::J,
        Motif::K,
        Motif::L,
        Motif::M,
        Motif::N,
        Motif::O,
        Motif::P,
        Motif::Q,
        Motif::R,
        Motif::S,
        Motif::T,
        Motif::U,
        Motif::V,
        Motif::W,
    ];

    /// Motif for an edge label; labels outside `a..=w` have none.
    pub fn from_label(label: char) -> Option<Motif> {
        let lower = label.to_ascii_lowercase();
        if !lower.is_ascii_lowercase() {
            return None;
        }
        Motif::ALL.get((lower as u8 - b'a') as usize).copied()
    }

    /// Lowercase label this motif is encoded as.
    pub fn label(self) -> char {
        char::from(b'a' + self.symbol_index())
    }

    /// Index into the symbol sheet; the border motif is symbol 0.
    pub fn symbol_index(self) -> u8 {
        self as u8
    }

    /// Two-digit hex key of this motif on the symbol sheet (`"00"`..`"16"`).
    pub fn symbol_key(self) -> String {
        format!("{:02x}", self.symbol_index())
    }

    /// How to draw this motif in symbol style; `None` for the border.
    pub fn symbol(self) -> Option<MotifSymbol> {
        SYMBOLS[usize::from(self.symbol_index())]
    }

    /// Hue in degrees for circle rendering, 13° apart per letter.
    pub fn hue(self) -> u16 {
        u16::from(self.symbol_index()) * 13
    }

    pub fn css_color(self) -> String {
        format!("hsl({}, 70%, 60%)", self.hue())
    }
}
