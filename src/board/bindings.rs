// JS-facing handle around `EditorCore`. The page owns one `PuzzleEditor`,
// forwards clicks and drops to it and re-renders from `boardJson()`.
use wasm_bindgen::prelude::*;

use super::notice::NoticeQueue;
use super::{Action, EditorCore};
use crate::catalog::parse_edges;
use crate::config::EditorConfig;
use crate::edges::{normalize_rotation, rotate_edges};
use crate::motif::{Motif, MotifStyle, MotifSymbol, letter_color};
use crate::placement::{Placement, check_placement};
use crate::performance_now;

/// Result of [`check_placement_code`] as seen from JS.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacementCheck {
    valid: bool,
    rotation: Option<u8>,
}

#[wasm_bindgen]
impl PlacementCheck {
    #[wasm_bindgen(getter)]
    pub fn valid(&self) -> bool {
        self.valid
    }

    #[wasm_bindgen(getter)]
    pub fn rotation(&self) -> Option<u8> {
        self.rotation
    }
}

impl From<Placement> for PlacementCheck {
    fn from(p: Placement) -> Self {
        Self { valid: p.valid, rotation: p.rotation }
    }
}

/// Validate a four-letter piece code against cell `(x, y)`.
#[wasm_bindgen(js_name = checkPlacement)]
pub fn check_placement_code(
    code: &str,
    rotation: i32,
    x: usize,
    y: usize,
    width: usize,
    height: usize,
) -> Result<PlacementCheck, JsValue> {
    let edges = parse_edges(code)?;
    let current = normalize_rotation(rotation);
    Ok(check_placement(&edges, current, x, y, width, height).into())
}

/// Edge code after turning the piece clockwise `steps` times.
#[wasm_bindgen(js_name = rotateCode)]
pub fn rotate_code(code: &str, steps: i32) -> Result<String, JsValue> {
    let edges = parse_edges(code)?;
    Ok(rotate_edges(&edges, steps).iter().collect())
}

/// CSS colour for an edge letter in circle style (any of `a..=z`).
#[wasm_bindgen(js_name = motifColor)]
pub fn motif_color(label: char) -> Option<String> {
    letter_color(label)
}

/// Symbol-style drawing instructions for one motif.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SymbolDescriptor {
    motif: Motif,
    symbol: MotifSymbol,
}

#[wasm_bindgen]
impl SymbolDescriptor {
    /// Key on the symbol sheet, e.g. `"04"`.
    #[wasm_bindgen(getter)]
    pub fn key(&self) -> String {
        self.motif.symbol_key()
    }

    #[wasm_bindgen(getter)]
    pub fn shape(&self) -> String {
        self.symbol.shape.as_str().to_owned()
    }

    #[wasm_bindgen(getter)]
    pub fn paint(&self) -> String {
        self.symbol.paint.as_str().to_owned()
    }

    #[wasm_bindgen(getter)]
    pub fn colour(&self) -> String {
        self.symbol.colour.to_owned()
    }
}

/// Symbol descriptor for a motif label; `None` for the border and unknown labels.
#[wasm_bindgen(js_name = motifSymbol)]
pub fn motif_symbol(label: char) -> Option<SymbolDescriptor> {
    let motif = Motif::from_label(label)?;
    motif.symbol().map(|symbol| SymbolDescriptor { motif, symbol })
}

#[wasm_bindgen]
pub struct PuzzleEditor {
    core: EditorCore,
    notices: NoticeQueue,
}

impl PuzzleEditor {
    fn from_editor_config(config: &EditorConfig) -> Result<PuzzleEditor, JsValue> {
        let core = EditorCore::new(config)?;
        log::info!("editor ready: {}x{} board", config.width, config.height);
        Ok(Self { core, notices: NoticeQueue::new(config.notice_ttl_ms) })
    }

    /// Queue the rejection text, if any; true when the action went through.
    fn record(&mut self, action: &Action) -> bool {
        match action {
            Action::Rejected(reason) => {
                self.notices.push(reason.to_string(), performance_now());
                false
            }
            Action::None => false,
            _ => true,
        }
    }

    pub fn core(&self) -> &EditorCore {
        &self.core
    }
}

#[wasm_bindgen]
impl PuzzleEditor {
    #[wasm_bindgen(constructor)]
    pub fn new(width: usize, height: usize) -> Result<PuzzleEditor, JsValue> {
        Self::from_editor_config(&EditorConfig::with_size(width, height))
    }

    #[wasm_bindgen(js_name = dropPiece)]
    pub fn drop_piece(&mut self, index: usize, piece_id: u32, rotation: i32) -> Result<bool, JsValue> {
        let action = self.core.drop_piece(index, piece_id, normalize_rotation(rotation))?;
        Ok(self.record(&action))
    }

    #[wasm_bindgen(js_name = removePiece)]
    pub fn remove_piece(&mut self, index: usize) -> Result<bool, JsValue> {
        let action = self.core.remove_piece(index)?;
        Ok(self.record(&action))
    }

    #[wasm_bindgen(js_name = rotatePiece)]
    pub fn rotate_piece(&mut self, index: usize) -> Result<bool, JsValue> {
        let action = self.core.rotate_piece(index)?;
        Ok(self.record(&action))
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), JsValue> {
        self.core.resize(width, height)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = togglePalette)]
    pub fn toggle_palette(&mut self) -> bool {
        self.core.toggle_palette()
    }

    #[wasm_bindgen(js_name = setMotifStyle)]
    pub fn set_motif_style(&mut self, name: &str) -> Result<(), JsValue> {
        let style: MotifStyle = name.parse()?;
        self.core.set_motif_style(style);
        Ok(())
    }

    #[wasm_bindgen(js_name = paletteIds)]
    pub fn palette_ids(&self) -> Vec<u32> {
        self.core.palette().iter().map(|p| p.id).collect()
    }

    #[wasm_bindgen(js_name = placedIds)]
    pub fn placed_ids(&self) -> Vec<u32> {
        self.core.placed_ids()
    }

    #[wasm_bindgen(js_name = rotationAt)]
    pub fn rotation_at(&self, index: usize) -> Result<u8, JsValue> {
        Ok(self.core.board.cell(index)?.rotation)
    }

    #[wasm_bindgen(js_name = isComplete)]
    pub fn is_complete(&self) -> bool {
        self.core.is_complete()
    }

    pub fn mismatches(&self) -> usize {
        self.core.board.mismatches()
    }

    /// Live notice texts, oldest first; expired ones are dropped.
    pub fn notices(&mut self) -> Vec<String> {
        self.notices.expire(performance_now());
        self.notices.messages()
    }
}

#[cfg(feature = "serde_json")]
#[wasm_bindgen]
impl PuzzleEditor {
    /// Build an editor from a JSON `EditorConfig`; missing fields take defaults.
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: &str) -> Result<PuzzleEditor, JsValue> {
        let config = EditorConfig::from_json(json)?;
        Self::from_editor_config(&config)
    }

    #[wasm_bindgen(js_name = boardJson)]
    pub fn board_json(&self) -> Result<String, JsValue> {
        let snapshot = super::snapshot::BoardSnapshot::from(&self.core);
        serde_json::to_string(&snapshot).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn rejected_drop_queues_a_notice_off_the_browser() {
        let mut editor = PuzzleEditor::new(5, 5).unwrap();
        assert!(!editor.drop_piece(12, 0, 0).unwrap());
        assert_eq!(editor.notices(), vec!["Piece 0 does not fit at (2, 2)".to_string()]);
        assert!(editor.drop_piece(0, 0, 0).unwrap());
        assert_eq!(editor.notices().len(), 1);
    }

    #[test]
    fn symbol_descriptors_by_label() {
        let d = motif_symbol('d').unwrap();
        assert_eq!(d.key(), "03");
        assert_eq!(d.shape(), "polygon");
        assert_eq!(d.paint(), "fill");
        assert_eq!(d.colour(), "#eced25");
        assert_eq!(motif_symbol('N').map(|s| s.paint()).as_deref(), Some("stroke"));
        assert!(motif_symbol('a').is_none());
        assert!(motif_symbol('x').is_none());
    }

    #[test]
    fn motif_color_covers_the_alphabet() {
        assert_eq!(motif_color('y').as_deref(), Some("hsl(312, 70%, 60%)"));
        assert_eq!(motif_color('?'), None);
    }
}
