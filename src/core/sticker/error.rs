//! Error types for loading animated stickers.

use thiserror::Error;

/// Errors that can occur while turning a `.tgs` asset into a running animation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StickerError {
    /// The asset could not be retrieved.
    #[error("fetch error: {0}")]
    Fetch(String),

    /// The bytes are not a valid gzip stream.
    #[error("decompression error: {0}")]
    Decompression(String),

    /// The decompressed payload is not a usable animation document.
    #[error("parse error: {0}")]
    Parse(String),

    /// The animation player refused to start.
    #[error("player error: {0}")]
    Player(String),
}

impl StickerError {
    /// Short name of the stage that failed, used as a log field.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Fetch(_) => "fetch",
            Self::Decompression(_) => "decompression",
            Self::Parse(_) => "parse",
            Self::Player(_) => "player",
        }
    }
}
