use wasm_bindgen::JsValue;

/// Errors raised by the editor for calls that break its contract.
///
/// A placement that does not fit is not an error; see
/// [`crate::board::Action::Rejected`].
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// Boards need at least two rows and two columns to have four corners.
    #[error("invalid board size {width}x{height}: both sides must be between 2 and {max}")]
    InvalidDimensions { width: usize, height: usize, max: usize },
    /// A cell index past the end of the board.
    #[error("cell {index} is outside a board of {len} cells")]
    CellOutOfRange { index: usize, len: usize },
    /// A piece id missing from the catalog.
    #[error("unknown piece id {0}")]
    UnknownPiece(u32),
    /// An edge code that is not exactly four alphanumeric characters.
    #[error("bad piece code {0:?}: expected four motif letters")]
    BadPieceCode(String),
    /// An unrecognised motif style name.
    #[error("unknown motif style {0:?}")]
    UnknownMotifStyle(String),
    /// Editor configuration could not be decoded.
    #[cfg(feature = "serde_json")]
    #[error("invalid editor config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<EditorError> for JsValue {
    fn from(err: EditorError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
