//! rune-bidi: bidirectional text reordering.
//!
//! Converts a paragraph of classified characters from logical (storage)
//! order into visual (drawing) order for text that mixes left-to-right and
//! right-to-left scripts. Two passes:
//! - [`resolve_logical_levels`]: explicit embeddings, level runs, weak and
//!   neutral types, implicit levels
//! - [`reorder_to_visual`]: whitespace reset, run reversal, mirroring
//!
//! [`Paragraph`] drives both passes and enforces their order. Only the
//! logical-to-visual direction exists.

pub mod class;
pub mod classify;
pub mod config;
pub mod error;
pub mod levels;
pub mod mirror;
pub mod paragraph;
pub mod record;
pub mod reorder;
pub mod resolve;

pub use class::{parse_classes, BidiClass};
pub use classify::{BidiClassifier, UnicodeClassifier};
pub use config::{BidiConfig, ParagraphConfig, ReorderConfig, ReorderMode};
pub use error::{BidiError, Result};
pub use levels::{BaseDirection, ParagraphDirection, MAX_DEPTH};
pub use mirror::mirrored_glyph;
pub use paragraph::Paragraph;
pub use record::{CharRecord, OverrideStatus};
pub use reorder::{reorder_to_visual, reorder_visual};
pub use resolve::{resolve_logical_levels, LevelRun, Resolution};
