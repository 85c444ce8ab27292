//! Tests for the highlight lifecycle

use super::*;
use crate::config::HighlightConfig;
use crate::context::EditorContext;
use crate::indent::IndentStrategy;
use crate::registry::MemoryRegistry;
use crate::render::{DecorationKind, SingleLineMode};
use crate::test_utils::test_helpers::Fixture;
use crate::theme::Theme;
use crate::token::{Token, TokenCursor, TokenStream, TokenType};
use proptest::prelude::*;

const IF_BLOCK: &str = "    if (x) {\n        y();\n    }\n";

fn scope_highlighter() -> BraceHighlighter {
    BraceHighlighter::from_config(&HighlightConfig::default(), Language::Code)
}

fn kinds(registry: &MemoryRegistry) -> Vec<&'static str> {
    registry
        .iter()
        .map(|(_, d)| match d.kind {
            DecorationKind::Inline => "inline",
            DecorationKind::Tick => "tick",
            DecorationKind::Gutter { .. } => "gutter",
        })
        .collect()
}

#[test]
fn test_single_line_pair_renders_one_fill() {
    let fixture = Fixture::code("(abc)");
    let mut highlighter = scope_highlighter().with_flash_pair(false);
    let mut registry = MemoryRegistry::new();

    let pair = highlighter
        .on_caret_moved(&fixture.ctx(), &Theme::new(), &mut registry, 2)
        .unwrap()
        .cloned()
        .unwrap();

    assert_eq!((pair.left.offset, pair.right.offset), (0, 4));
    assert_eq!(registry.len(), 1);
    let (_, decoration) = registry.iter().next().unwrap();
    assert_eq!(decoration.range, 0..5);
}

#[test]
fn test_multi_line_pair_renders_boundaries_and_tick() {
    let fixture = Fixture::code(IF_BLOCK);
    let mut highlighter = scope_highlighter().with_flash_pair(false);
    let mut registry = MemoryRegistry::new();

    highlighter
        .on_caret_moved(&fixture.ctx(), &Theme::new(), &mut registry, fixture.offset_of("y();"))
        .unwrap();

    assert_eq!(kinds(&registry), vec!["inline", "inline", "tick"]);
    assert_eq!(highlighter.active().len(), 3);
}

#[test]
fn test_tab_indented_block_matches_space_indented() {
    for text in [IF_BLOCK, "\tif (x) {\n\t\ty();\n\t}\n"] {
        let mut highlighter = scope_highlighter().with_flash_pair(false);
        let fixture = Fixture::code(text);
        let mut registry = MemoryRegistry::new();
        highlighter
            .on_caret_moved(&fixture.ctx(), &Theme::new(), &mut registry, fixture.offset_of("y();"))
            .unwrap();
        assert_eq!(kinds(&registry), vec!["inline", "inline", "tick"], "{:?}", text);
    }
}

#[test]
fn test_flash_pair_adds_delimiter_decorations() {
    let fixture = Fixture::code(IF_BLOCK);
    let mut highlighter = scope_highlighter();
    let mut registry = MemoryRegistry::new();

    highlighter
        .on_caret_moved(&fixture.ctx(), &Theme::new(), &mut registry, fixture.offset_of("y();"))
        .unwrap();

    assert_eq!(registry.len(), 5);
    let flashes: Vec<_> = registry
        .iter()
        .filter(|(_, d)| d.layer == crate::render::layer::FLASH)
        .map(|(_, d)| d.range.clone())
        .collect();
    assert_eq!(flashes, vec![11..12, 30..31]);
}

#[test]
fn test_caret_move_replaces_previous_highlight() {
    let fixture = Fixture::code(IF_BLOCK);
    let mut highlighter = scope_highlighter();
    let mut registry = MemoryRegistry::new();
    let theme = Theme::new();

    highlighter
        .on_caret_moved(&fixture.ctx(), &theme, &mut registry, fixture.offset_of("y();"))
        .unwrap();
    let first: Vec<_> = highlighter.active().to_vec();

    let pair = highlighter
        .on_caret_moved(&fixture.ctx(), &theme, &mut registry, fixture.offset_of("x)"))
        .unwrap()
        .map(|p| (p.left.offset, p.right.offset));
    assert_eq!(pair, Some((7, 9)));

    // single-line fill plus two flashes, none of the old ids survive
    assert_eq!(registry.len(), 3);
    assert!(first.iter().all(|id| registry.get(*id).is_none()));
}

#[test]
fn test_caret_outside_any_pair_leaves_nothing() {
    let fixture = Fixture::code("a (b) c");
    let mut highlighter = scope_highlighter();
    let mut registry = MemoryRegistry::new();
    let theme = Theme::new();

    highlighter.on_caret_moved(&fixture.ctx(), &theme, &mut registry, 3).unwrap();
    assert!(!registry.is_empty());

    let pair = highlighter.on_caret_moved(&fixture.ctx(), &theme, &mut registry, 0).unwrap();
    assert!(pair.is_none());
    assert!(registry.is_empty());
    assert!(highlighter.active().is_empty());
    assert!(highlighter.current_pair().is_none());
}

#[test]
fn test_unmatched_brace_creates_no_decoration() {
    let fixture = Fixture::code("fn f() {\n    x;\n");
    let mut highlighter = scope_highlighter();
    let mut registry = MemoryRegistry::new();

    let pair = highlighter
        .on_caret_moved(&fixture.ctx(), &Theme::new(), &mut registry, fixture.offset_of("{"))
        .unwrap();
    assert!(pair.is_none());
    assert!(registry.is_empty());
}

#[test]
fn test_clear_removes_everything() {
    let fixture = Fixture::code(IF_BLOCK);
    let mut highlighter = scope_highlighter();
    let mut registry = MemoryRegistry::new();

    highlighter
        .on_caret_moved(&fixture.ctx(), &Theme::new(), &mut registry, fixture.offset_of("y();"))
        .unwrap();
    highlighter.clear(&mut registry);

    assert!(registry.is_empty());
    assert!(highlighter.active().is_empty());
}

#[test]
fn test_manual_highlight_and_erase_round_trip() {
    let fixture = Fixture::code(IF_BLOCK);
    let highlighter = scope_highlighter();
    let mut registry = MemoryRegistry::new();
    let theme = Theme::new();

    // a decoration owned by someone else must survive
    let (foreign, _) = render_delimiter_highlight(
        &RenderContext::new(&fixture.text, &StyleTable::new(), &theme),
        &highlighter.find_enclosing_pair(&fixture.ctx(), 8).unwrap().unwrap(),
    );
    let foreign_id = registry.add(foreign);

    let pair = highlighter
        .find_enclosing_pair(&fixture.ctx(), fixture.offset_of("y();"))
        .unwrap()
        .unwrap();
    let ids = highlighter.highlight_pair(&fixture.ctx(), &theme, &mut registry, &pair);
    assert_eq!(registry.len(), 1 + ids.len());

    highlighter.erase_highlight(&mut registry, &ids);
    assert_eq!(registry.iter().map(|(id, _)| id).collect::<Vec<_>>(), vec![foreign_id]);
}

#[test]
fn test_highlight_pair_lines_skips_flash() {
    let fixture = Fixture::code(IF_BLOCK);
    let highlighter = scope_highlighter();
    let mut registry = MemoryRegistry::new();
    let theme = Theme::new();

    let pair = highlighter
        .find_enclosing_pair(&fixture.ctx(), fixture.offset_of("y();"))
        .unwrap()
        .unwrap();
    let ids = highlighter.highlight_pair_lines(&fixture.ctx(), &theme, &mut registry, &pair);
    assert_eq!(ids.len(), 3);
    assert_eq!(kinds(&registry), vec!["inline", "inline", "tick"]);

    highlighter.erase_highlight(&mut registry, &ids);
    assert!(registry.is_empty());
}

#[test]
fn test_gutter_mode_from_config() {
    let config = HighlightConfig {
        mode: HighlightMode::Gutter,
        flash_pair: false,
        ..HighlightConfig::default()
    };
    let fixture = Fixture::code(IF_BLOCK);
    let mut highlighter = BraceHighlighter::from_config(&config, Language::Code);
    let mut registry = MemoryRegistry::new();

    highlighter
        .on_caret_moved(&fixture.ctx(), &Theme::new(), &mut registry, fixture.offset_of("y();"))
        .unwrap();
    assert_eq!(highlighter.renderer_name(), "gutter");
    assert_eq!(kinds(&registry), vec!["gutter", "gutter"]);
}

#[test]
fn test_single_line_off_from_config() {
    let config = HighlightConfig {
        single_line: SingleLineMode::Off,
        flash_pair: false,
        ..HighlightConfig::default()
    };
    let fixture = Fixture::code("(abc)");
    let mut highlighter = BraceHighlighter::from_config(&config, Language::Code);
    let mut registry = MemoryRegistry::new();

    let pair = highlighter
        .on_caret_moved(&fixture.ctx(), &Theme::new(), &mut registry, 2)
        .unwrap();
    assert!(pair.is_some());
    assert!(registry.is_empty());
}

#[test]
fn test_line_scan_strategy_from_config() {
    let config = HighlightConfig {
        indent: IndentStrategy::LineScan,
        flash_pair: false,
        ..HighlightConfig::default()
    };
    let fixture = Fixture::code("    foo(a,\n        b)");
    let mut highlighter = BraceHighlighter::from_config(&config, Language::Code);
    let mut registry = MemoryRegistry::new();

    highlighter
        .on_caret_moved(&fixture.ctx(), &Theme::new(), &mut registry, 8)
        .unwrap();
    assert_eq!(kinds(&registry), vec!["inline", "inline"]);
}

#[test]
fn test_markup_language_uses_markup_pairs() {
    let fixture = Fixture::markup(r#"<a href="x">t</a>"#);
    let mut highlighter = BraceHighlighter::from_config(&HighlightConfig::default(), Language::Markup);
    let mut registry = MemoryRegistry::new();

    let pair = highlighter
        .on_caret_moved(&fixture.ctx(), &Theme::new(), &mut registry, 9)
        .unwrap()
        .map(|p| (p.left.offset, p.right.offset));
    assert_eq!(pair, Some((8, 10)));
}

/// Token stream whose cursors never move.
struct StuckStream;

struct StuckCursor;

impl TokenCursor for StuckCursor {
    fn token(&self) -> Option<Token> {
        Some(Token::new(TokenType::RParen, 0, 1))
    }

    fn advance(&mut self) {}

    fn retreat(&mut self) {}
}

impl TokenStream for StuckStream {
    fn cursor_at(&self, _offset: usize) -> Box<dyn TokenCursor + '_> {
        Box::new(StuckCursor)
    }
}

#[test]
fn test_cursor_violation_is_an_error_and_leaves_nothing() {
    let fixture = Fixture::code("(abc)");
    let mut highlighter = scope_highlighter();
    let mut registry = MemoryRegistry::new();
    let theme = Theme::new();

    highlighter.on_caret_moved(&fixture.ctx(), &theme, &mut registry, 2).unwrap();
    assert!(!registry.is_empty());

    let broken = EditorContext::new(&fixture.text, &StuckStream, &fixture.guides);
    assert!(highlighter.on_caret_moved(&broken, &theme, &mut registry, 2).is_err());
    assert!(registry.is_empty());
    assert!(highlighter.active().is_empty());
}

proptest! {
    #[test]
    fn prop_erase_then_redraw_never_leaks(
        text in "[(){}\\[\\]\"a \n]{0,40}",
        offsets in prop::collection::vec(0usize..45, 1..8),
        block in any::<bool>(),
    ) {
        let fixture = Fixture::code(&text);
        let ctx = if block { fixture.block_ctx() } else { fixture.ctx() };
        let mut highlighter = scope_highlighter();
        let mut registry = MemoryRegistry::new();
        let theme = Theme::new();

        for offset in offsets {
            highlighter.on_caret_moved(&ctx, &theme, &mut registry, offset).unwrap();
            prop_assert_eq!(registry.len(), highlighter.active().len());
        }

        highlighter.clear(&mut registry);
        prop_assert!(registry.is_empty());
    }
}
