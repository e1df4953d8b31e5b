//! Editor configuration.
//!
//! The host page hands the editor a JSON object (all fields optional) when it
//! boots; anything omitted falls back to the standard 16x16 Eternity II board.

use crate::error::EditorError;
use crate::motif::MotifStyle;

/// Largest accepted board side.
pub const MAX_BOARD_SIDE: usize = 64;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EditorConfig {
    pub width: usize,
    pub height: usize,
    /// How long a rejection notice stays visible.
    pub notice_ttl_ms: f64,
    pub motif_style: MotifStyle,
    pub palette_visible: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            width: 16,
            height: 16,
            notice_ttl_ms: 2500.0,
            motif_style: MotifStyle::Circle,
            palette_visible: true,
        }
    }
}

impl EditorConfig {
    pub fn with_size(width: usize, height: usize) -> Self {
        Self { width, height, ..Self::default() }
    }

    pub fn validate(&self) -> Result<(), EditorError> {
        check_dimensions(self.width, self.height)
    }

    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, EditorError> {
        let config: EditorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

pub(crate) fn check_dimensions(width: usize, height: usize) -> Result<(), EditorError> {
    let ok = |side: usize| (2..=MAX_BOARD_SIDE).contains(&side);
    if ok(width) && ok(height) {
        Ok(())
    } else {
        Err(EditorError::InvalidDimensions { width, height, max: MAX_BOARD_SIDE })
    }
}
