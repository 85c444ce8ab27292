//! Scope fill renderer: inline fill on the boundary lines and a vertical
//! guide of ticks between them.

use std::ops::Range;

use clap::ValueEnum;
use ratatui::style::Color;
use serde::Deserialize;

use super::{DecorationKind, DecorationRequest, PairRenderer, RenderContext, layer};
use crate::brace::BracePair;
use crate::style::{StyleKey, StyleVariant};

/// What a pair opened and closed on the same line renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SingleLineMode {
    /// One inline decoration from the opener through the closer
    #[default]
    Fill,
    /// Nothing
    Off,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScopeRenderer {
    single_line: SingleLineMode,
}

impl ScopeRenderer {
    pub fn new(single_line: SingleLineMode) -> Self {
        Self { single_line }
    }

    fn render_single_line(&self, style: Request, pair: &BracePair) -> Vec<DecorationRequest> {
        match self.single_line {
            SingleLineMode::Fill => vec![style.inline(pair.left.offset..pair.right.end())],
            SingleLineMode::Off => Vec::new(),
        }
    }

    fn render_multi_line(
        &self,
        rctx: &RenderContext<'_>,
        style: Request,
        pair: &BracePair,
        level: usize,
    ) -> Vec<DecorationRequest> {
        if level == 0 {
            return Vec::new();
        }

        let text = rctx.text;
        let open_line = text.line_of_offset(pair.left.offset);
        let close_line = text.line_of_offset(pair.right.offset);

        let left_indent = text.line_start(open_line) + level;
        let right_indent = text.line_start(close_line) + level;
        if left_indent > pair.left.offset || right_indent > pair.right.offset {
            log::debug!(
                "indent {} overshoots delimiters at {} / {}, skipping",
                level,
                pair.left.offset,
                pair.right.offset
            );
            return Vec::new();
        }

        let mut decorations = Vec::with_capacity(close_line - open_line + 1);
        decorations.push(style.inline(left_indent..pair.left.end()));
        decorations.push(style.inline(right_indent..pair.right.end()));

        for line in open_line + 1..close_line {
            let start = text.line_start(line);
            let column = start + level;
            let range = if start == text.line_end(line) {
                column..column
            } else {
                column..column + 1
            };
            decorations.push(style.tick(range));
        }

        decorations
    }
}

impl PairRenderer for ScopeRenderer {
    fn render_pair(
        &self,
        rctx: &RenderContext<'_>,
        pair: &BracePair,
        level: usize,
    ) -> Vec<DecorationRequest> {
        let (style, color) = rctx.style_of(&pair.left, StyleVariant::Guide);
        let request = Request { style, color };

        let open_line = rctx.text.line_of_offset(pair.left.offset);
        let close_line = rctx.text.line_of_offset(pair.right.offset);
        if open_line == close_line {
            self.render_single_line(request, pair)
        } else {
            self.render_multi_line(rctx, request, pair, level)
        }
    }

    fn name(&self) -> &'static str {
        "scope"
    }
}

/// Style shared by every decoration of one pair.
#[derive(Clone, Copy)]
struct Request {
    style: StyleKey,
    color: Option<Color>,
}

impl Request {
    fn build(self, range: Range<usize>, kind: DecorationKind) -> DecorationRequest {
        DecorationRequest {
            range,
            style: self.style,
            color: self.color,
            layer: layer::SCOPE,
            kind,
        }
    }

    fn inline(self, range: Range<usize>) -> DecorationRequest {
        self.build(range, DecorationKind::Inline)
    }

    fn tick(self, range: Range<usize>) -> DecorationRequest {
        self.build(range, DecorationKind::Tick)
    }
}
