// Configuration type definitions

use std::collections::BTreeMap;

use clap::ValueEnum;
use serde::Deserialize;

use crate::brace::{PairKind, default_pair_kinds};
use crate::context::CaretShape;
use crate::indent::IndentStrategy;
use crate::render::SingleLineMode;
use crate::style::StyleKey;

/// Which renderer draws the scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HighlightMode {
    /// Inline fill plus vertical guide ticks
    #[default]
    Scope,
    /// Delimiter glyphs in the margin
    Gutter,
}

/// Highlight configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct HighlightConfig {
    #[serde(default)]
    pub mode: HighlightMode,
    #[serde(default)]
    pub single_line: SingleLineMode,
    #[serde(default)]
    pub caret: CaretShape,
    #[serde(default = "default_flash_pair")]
    pub flash_pair: bool,
    #[serde(default)]
    pub indent: IndentStrategy,
    #[serde(default = "default_pair_kinds")]
    pub pairs: Vec<PairKind>,
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,
}

fn default_flash_pair() -> bool {
    true
}

fn default_tab_width() -> usize {
    4
}

impl Default for HighlightConfig {
    fn default() -> Self {
        HighlightConfig {
            mode: HighlightMode::Scope,
            single_line: SingleLineMode::Fill,
            caret: CaretShape::Line,
            flash_pair: default_flash_pair(),
            indent: IndentStrategy::Guides,
            pairs: default_pair_kinds(),
            tab_width: default_tab_width(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub highlight: HighlightConfig,
    /// Foreground overrides keyed by style, as `"#rrggbb"` or a color name
    #[serde(default)]
    pub colors: BTreeMap<StyleKey, String>,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
