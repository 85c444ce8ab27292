//! Decoration lifecycle for the pair around the caret.
//!
//! Every caret event erases the exact set of decorations created by the
//! previous one before drawing the new pair. Nothing is diffed.

use crate::brace::{BracePair, CodePairs, MarkupPairs};
use crate::config::{HighlightConfig, HighlightMode};
use crate::context::EditorContext;
use crate::error::Result;
use crate::indent::IndentAnalyzer;
use crate::lexer::Language;
use crate::matcher::PairResolver;
use crate::registry::{DecorationId, DecorationRegistry};
use crate::render::{
    DecorationRequest, GutterRenderer, PairRenderer, RenderContext, ScopeRenderer,
    render_delimiter_highlight,
};
use crate::style::StyleTable;
use crate::theme::ColorScheme;

pub struct BraceHighlighter {
    resolver: PairResolver,
    analyzer: IndentAnalyzer,
    renderer: Box<dyn PairRenderer>,
    styles: StyleTable,
    flash_pair: bool,
    active: Vec<DecorationId>,
    current: Option<BracePair>,
}

impl BraceHighlighter {
    pub fn new(
        resolver: PairResolver,
        analyzer: IndentAnalyzer,
        renderer: impl PairRenderer + 'static,
    ) -> Self {
        Self {
            resolver,
            analyzer,
            renderer: Box::new(renderer),
            styles: StyleTable::new(),
            flash_pair: true,
            active: Vec::new(),
            current: None,
        }
    }

    pub fn with_flash_pair(mut self, flash_pair: bool) -> Self {
        self.flash_pair = flash_pair;
        self
    }

    /// Highlighter for `language` set up from the `[highlight]` section.
    pub fn from_config(config: &HighlightConfig, language: Language) -> Self {
        let resolver = match language {
            Language::Code => PairResolver::new(CodePairs::new(&config.pairs)),
            Language::Markup => PairResolver::new(MarkupPairs),
        };
        let analyzer = IndentAnalyzer::new(config.indent);

        let highlighter = match config.mode {
            HighlightMode::Scope => {
                Self::new(resolver, analyzer, ScopeRenderer::new(config.single_line))
            }
            HighlightMode::Gutter => Self::new(resolver, analyzer, GutterRenderer),
        };
        highlighter.with_flash_pair(config.flash_pair)
    }

    pub fn renderer_name(&self) -> &'static str {
        self.renderer.name()
    }

    pub fn find_enclosing_pair(
        &self,
        ctx: &EditorContext<'_>,
        offset: usize,
    ) -> Result<Option<BracePair>> {
        self.resolver.find_enclosing_pair(ctx, offset)
    }

    /// Scope (or gutter) decorations for `pair` without the delimiter flash.
    pub fn render_lines(
        &self,
        ctx: &EditorContext<'_>,
        colors: &dyn ColorScheme,
        pair: &BracePair,
    ) -> Vec<DecorationRequest> {
        let rctx = RenderContext::new(ctx.text, &self.styles, colors);
        let level = self.analyzer.indent_level(ctx, pair);
        self.renderer.render_pair(&rctx, pair, level)
    }

    /// Everything drawn for `pair`: the scope decorations, then the
    /// delimiter flash when enabled.
    pub fn render(
        &self,
        ctx: &EditorContext<'_>,
        colors: &dyn ColorScheme,
        pair: &BracePair,
    ) -> Vec<DecorationRequest> {
        let mut requests = self.render_lines(ctx, colors, pair);
        if self.flash_pair {
            let rctx = RenderContext::new(ctx.text, &self.styles, colors);
            let (left, right) = render_delimiter_highlight(&rctx, pair);
            requests.push(left);
            requests.push(right);
        }
        requests
    }

    /// Registers everything drawn for `pair`. The caller owns the returned
    /// ids and releases them with [`BraceHighlighter::erase_highlight`].
    pub fn highlight_pair(
        &self,
        ctx: &EditorContext<'_>,
        colors: &dyn ColorScheme,
        registry: &mut dyn DecorationRegistry,
        pair: &BracePair,
    ) -> Vec<DecorationId> {
        let ids = register(registry, self.render(ctx, colors, pair));
        log::debug!(
            "{} decorations for pair {}..{}",
            ids.len(),
            pair.left.offset,
            pair.right.offset
        );
        ids
    }

    /// Registers only the scope decorations for `pair`.
    pub fn highlight_pair_lines(
        &self,
        ctx: &EditorContext<'_>,
        colors: &dyn ColorScheme,
        registry: &mut dyn DecorationRegistry,
        pair: &BracePair,
    ) -> Vec<DecorationId> {
        register(registry, self.render_lines(ctx, colors, pair))
    }

    pub fn erase_highlight(&self, registry: &mut dyn DecorationRegistry, ids: &[DecorationId]) {
        for id in ids {
            if !registry.remove(*id) {
                log::warn!("decoration {:?} was already removed", id);
            }
        }
    }

    /// Erases the previous highlight, then resolves and draws the pair at
    /// `offset`. On a cursor contract violation the error is returned and no
    /// decorations remain.
    pub fn on_caret_moved(
        &mut self,
        ctx: &EditorContext<'_>,
        colors: &dyn ColorScheme,
        registry: &mut dyn DecorationRegistry,
        offset: usize,
    ) -> Result<Option<&BracePair>> {
        self.clear(registry);

        let pair = self.resolver.find_enclosing_pair(ctx, offset)?;
        if let Some(pair) = &pair {
            self.active = self.highlight_pair(ctx, colors, registry, pair);
        }
        self.current = pair;
        Ok(self.current.as_ref())
    }

    /// Removes every decoration this highlighter created.
    pub fn clear(&mut self, registry: &mut dyn DecorationRegistry) {
        let ids = std::mem::take(&mut self.active);
        self.erase_highlight(registry, &ids);
        self.current = None;
    }

    pub fn active(&self) -> &[DecorationId] {
        &self.active
    }

    pub fn current_pair(&self) -> Option<&BracePair> {
        self.current.as_ref()
    }
}

fn register(
    registry: &mut dyn DecorationRegistry,
    requests: Vec<DecorationRequest>,
) -> Vec<DecorationId> {
    requests
        .into_iter()
        .map(|request| registry.add(request))
        .collect()
}

#[cfg(test)]
#[path = "highlighter_tests.rs"]
mod highlighter_tests;
