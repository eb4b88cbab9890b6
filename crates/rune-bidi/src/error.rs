//! Error types for the bidi engine.
//!
//! Text content never produces an error: malformed formatting codes and
//! paragraphs without strong characters degrade to best-effort ordering.
//! These variants cover API misuse and configuration loading only.

use thiserror::Error;

/// Result type for bidi operations.
pub type Result<T> = std::result::Result<T, BidiError>;

/// Errors that can occur while driving a [`crate::Paragraph`] or loading
/// configuration.
#[derive(Error, Debug)]
pub enum BidiError {
    /// Reordering was requested before levels were resolved.
    #[error("paragraph levels have not been resolved")]
    NotResolved,

    /// Levels were already resolved for this paragraph.
    #[error("paragraph levels were already resolved")]
    AlreadyResolved,

    /// The paragraph is already in visual order. There is no inverse
    /// transform, so reordering it again is unsupported.
    #[error("paragraph is already in visual order; visual-to-logical reordering is unsupported")]
    AlreadyVisual,

    /// Line ranges must be contiguous and cover the whole paragraph.
    #[error("line ranges must tile 0..{len} contiguously (offending range {start}..{end})")]
    InvalidLineRanges {
        len: usize,
        start: usize,
        end: usize,
    },

    /// A bidi class short name could not be parsed.
    #[error("unknown bidi class: {0}")]
    UnknownClass(String),

    /// Config file could not be read.
    #[error("failed to read config file: {0}")]
    ConfigRead(#[from] std::io::Error),

    /// Config file could not be parsed.
    #[error("failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
