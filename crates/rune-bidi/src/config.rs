//! Bidi engine configuration
//!
//! Settings are read from `rune-bidi.toml`, with environment variables
//! taking precedence. Configuration is read-only while paragraphs are
//! processed.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::levels::BaseDirection;

/// Default config file name, looked up in the current directory.
pub const CONFIG_FILE: &str = "rune-bidi.toml";

/// Main configuration structure for the bidi engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BidiConfig {
    /// Paragraph analysis settings
    pub paragraph: ParagraphConfig,
    /// Visual reordering settings
    pub reorder: ReorderConfig,
}

/// Paragraph analysis configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ParagraphConfig {
    /// Base direction: detect from the first strong character, or force one
    pub base_direction: BaseDirection,
}

/// Visual reordering configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReorderConfig {
    /// How the reversal step reports visual order
    pub mode: ReorderMode,
}

/// How the reordering pass expresses visual order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ReorderMode {
    /// Records stay in logical order; only `display_order_index` changes.
    #[default]
    DisplayIndex,
    /// Records are moved into visual order.
    SwapRecords,
}

impl BidiConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from `rune-bidi.toml` in the current directory,
    /// or return the default configuration if it cannot be loaded
    pub fn load_or_default() -> Self {
        match Self::load_from_file(CONFIG_FILE) {
            Ok(config) => config,
            Err(crate::BidiError::ConfigRead(_)) => Self::default(),
            Err(e) => {
                log::warn!("ignoring {CONFIG_FILE}: {e}");
                Self::default()
            }
        }
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    /// Unrecognized values are ignored.
    pub fn merge_with_env(&mut self) {
        if let Ok(val) = std::env::var("RUNE_BIDI_BASE_DIRECTION") {
            match val.to_ascii_lowercase().as_str() {
                "auto" => self.paragraph.base_direction = BaseDirection::Auto,
                "ltr" => self.paragraph.base_direction = BaseDirection::Ltr,
                "rtl" => self.paragraph.base_direction = BaseDirection::Rtl,
                other => log::warn!("RUNE_BIDI_BASE_DIRECTION: unknown value {other:?}"),
            }
        }
        if let Ok(val) = std::env::var("RUNE_BIDI_REORDER_MODE") {
            match val.to_ascii_lowercase().as_str() {
                "display-index" => self.reorder.mode = ReorderMode::DisplayIndex,
                "swap-records" => self.reorder.mode = ReorderMode::SwapRecords,
                other => log::warn!("RUNE_BIDI_REORDER_MODE: unknown value {other:?}"),
            }
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from rune-bidi.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}
