//! Decoration requests for a resolved pair.
//!
//! Renderers are pure: they turn a pair and its indent level into a list of
//! [`DecorationRequest`]s and leave registering them to the caller. An empty
//! list means nothing to render.

mod gutter;
mod scope;

pub use gutter::GutterRenderer;
pub use scope::{ScopeRenderer, SingleLineMode};

use std::ops::Range;

use ratatui::style::Color;
use serde::Serialize;

use crate::brace::{Brace, BracePair};
use crate::style::{StyleKey, StyleTable, StyleVariant};
use crate::text::TextBuffer;
use crate::theme::ColorScheme;

/// Host layer numbers, higher draws on top.
pub mod layer {
    pub const SYNTAX: u32 = 3000;
    pub const SELECTION: u32 = 6000;

    pub const HIGHLIGHT_WEIGHT: u32 = 100;

    /// Scope fill, guide ticks and gutter glyphs
    pub const SCOPE: u32 = SELECTION + HIGHLIGHT_WEIGHT;
    /// Flash on the two delimiters
    pub const FLASH: u32 = SYNTAX + HIGHLIGHT_WEIGHT;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DecorationKind {
    /// Highlight over an exact text range
    Inline,
    /// One column of a vertical scope guide
    Tick,
    /// Delimiter glyph painted in the margin of `line`
    Gutter {
        line: usize,
        glyph: String,
        /// The anchor stays with text inserted to its right
        greedy_to_right: bool,
    },
}

/// One decoration to hand to the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecorationRequest {
    pub range: Range<usize>,
    pub style: StyleKey,
    pub color: Option<Color>,
    pub layer: u32,
    pub kind: DecorationKind,
}

impl DecorationRequest {
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// What a renderer reads besides the pair itself.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub text: &'a dyn TextBuffer,
    pub styles: &'a StyleTable,
    pub colors: &'a dyn ColorScheme,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        text: &'a dyn TextBuffer,
        styles: &'a StyleTable,
        colors: &'a dyn ColorScheme,
    ) -> Self {
        Self {
            text,
            styles,
            colors,
        }
    }

    /// Style and color for a delimiter.
    pub fn style_of(&self, brace: &Brace, variant: StyleVariant) -> (StyleKey, Option<Color>) {
        let style = self.styles.resolve(brace.token_type, &brace.text, variant);
        (style, self.colors.foreground(style))
    }
}

/// Scope rendering for a resolved pair.
pub trait PairRenderer {
    /// Decorations for `pair` with guides at column `level`.
    fn render_pair(
        &self,
        rctx: &RenderContext<'_>,
        pair: &BracePair,
        level: usize,
    ) -> Vec<DecorationRequest>;

    fn name(&self) -> &'static str;
}

/// Inline highlights exactly covering each delimiter's own text.
pub fn render_delimiter_highlight(
    rctx: &RenderContext<'_>,
    pair: &BracePair,
) -> (DecorationRequest, DecorationRequest) {
    let (style, color) = rctx.style_of(&pair.left, StyleVariant::Flash);
    let flash = |brace: &Brace| DecorationRequest {
        range: brace.offset..brace.end(),
        style,
        color,
        layer: layer::FLASH,
        kind: DecorationKind::Inline,
    };
    (flash(&pair.left), flash(&pair.right))
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
