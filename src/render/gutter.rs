//! Gutter renderer: stamps each delimiter's glyph into the margin of its line.

use super::{DecorationKind, DecorationRequest, PairRenderer, RenderContext, layer};
use crate::brace::{Brace, BracePair};
use crate::style::StyleVariant;

#[derive(Debug, Clone, Copy, Default)]
pub struct GutterRenderer;

impl GutterRenderer {
    fn glyph(&self, rctx: &RenderContext<'_>, brace: &Brace) -> DecorationRequest {
        let (style, color) = rctx.style_of(brace, StyleVariant::Flash);
        let line = rctx.text.line_of_offset(brace.offset);
        DecorationRequest {
            range: rctx.text.line_start(line)..rctx.text.line_end(line),
            style,
            color,
            layer: layer::SCOPE,
            kind: DecorationKind::Gutter {
                line,
                glyph: brace.text.clone(),
                greedy_to_right: true,
            },
        }
    }
}

impl PairRenderer for GutterRenderer {
    /// One glyph per boundary line. The indent level is not used.
    fn render_pair(
        &self,
        rctx: &RenderContext<'_>,
        pair: &BracePair,
        _level: usize,
    ) -> Vec<DecorationRequest> {
        vec![self.glyph(rctx, &pair.left), self.glyph(rctx, &pair.right)]
    }

    fn name(&self) -> &'static str {
        "gutter"
    }
}
