//! Indentation level for multi-line scope guides.
//!
//! The level is the byte offset into each line where vertical guide ticks
//! are drawn. It comes from the host's indent-guide model, or from the
//! opening line's leading whitespace. Zero means no level could be determined and suppresses the
//! vertical guide.

use std::collections::HashMap;

use clap::ValueEnum;
use serde::Deserialize;

use crate::brace::BracePair;
use crate::context::EditorContext;
use crate::text::TextBuffer;

/// One indent guide: drawn `level` bytes into each line from `start_line`
/// down to `end_line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentGuide {
    pub level: usize,
    pub start_line: usize,
    pub end_line: usize,
}

/// Host indent-guide model.
pub trait IndentGuideModel {
    /// Guide spanning exactly `start_line..=end_line`, if the host has one.
    fn descriptor(&self, start_line: usize, end_line: usize) -> Option<IndentGuide>;

    /// Guide the caret currently sits in.
    fn caret_guide(&self) -> Option<IndentGuide>;
}

/// Guides derived from leading whitespace.
///
/// A guide starts on every line followed by a deeper-indented line and ends on
/// the next line indented no deeper than the start. Depth is compared in
/// tab-expanded columns; the guide level is the byte length of the start
/// line's indentation. Guides at column 0 are not produced.
#[derive(Debug, Clone, Default)]
pub struct IndentGuides {
    guides: HashMap<(usize, usize), IndentGuide>,
    caret_line: Option<usize>,
}

impl IndentGuides {
    pub fn build<T: TextBuffer + ?Sized>(text: &T, tab_width: usize) -> Self {
        let tab_width = tab_width.max(1);
        let indents: Vec<Option<Indent>> = (0..text.line_count())
            .map(|line| {
                let content = text.slice(text.line_start(line)..text.line_end(line));
                Indent::measure(content, tab_width)
            })
            .collect();

        let mut guides = HashMap::new();
        for (start_line, indent) in indents.iter().enumerate() {
            let Some(Indent { width, bytes: level }) = *indent else {
                continue;
            };
            if level == 0 {
                continue;
            }

            let mut body = indents[start_line + 1..]
                .iter()
                .enumerate()
                .filter_map(|(i, indent)| indent.map(|n| (start_line + 1 + i, n.width)));
            match body.next() {
                Some((_, first)) if first > width => {}
                _ => continue,
            }
            let end_line = body
                .find(|&(_, n)| n <= width)
                .map(|(line, _)| line)
                .unwrap_or(indents.len() - 1);

            guides.insert(
                (start_line, end_line),
                IndentGuide {
                    level,
                    start_line,
                    end_line,
                },
            );
        }

        log::trace!("built {} indent guides", guides.len());
        Self {
            guides,
            caret_line: None,
        }
    }

    pub fn set_caret_line(&mut self, line: Option<usize>) {
        self.caret_line = line;
    }

    pub fn len(&self) -> usize {
        self.guides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guides.is_empty()
    }
}

impl IndentGuideModel for IndentGuides {
    fn descriptor(&self, start_line: usize, end_line: usize) -> Option<IndentGuide> {
        self.guides.get(&(start_line, end_line)).copied()
    }

    fn caret_guide(&self) -> Option<IndentGuide> {
        let line = self.caret_line?;
        self.guides
            .values()
            .filter(|g| g.start_line < line && line < g.end_line)
            .max_by_key(|g| g.start_line)
            .copied()
    }
}

/// Leading whitespace of one line.
#[derive(Debug, Clone, Copy)]
struct Indent {
    /// Display columns with tabs expanded to tab stops.
    width: usize,
    bytes: usize,
}

impl Indent {
    /// `None` for a blank line.
    fn measure(line: &str, tab_width: usize) -> Option<Self> {
        let mut width = 0;
        for (bytes, ch) in line.char_indices() {
            match ch {
                '\t' => width += tab_width - width % tab_width,
                c if c.is_whitespace() => width += 1,
                _ => return Some(Self { width, bytes }),
            }
        }
        None
    }
}

/// How the indent level of a multi-line pair is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum IndentStrategy {
    /// Guide spanning the pair, then the guide under the caret, then the
    /// guide spanning the pair's inner lines.
    #[default]
    Guides,
    /// First non-blank column of the opening line.
    LineScan,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IndentAnalyzer {
    strategy: IndentStrategy,
}

impl IndentAnalyzer {
    pub fn new(strategy: IndentStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> IndentStrategy {
        self.strategy
    }

    pub fn indent_level(&self, ctx: &EditorContext<'_>, pair: &BracePair) -> usize {
        let level = match self.strategy {
            IndentStrategy::Guides => guide_level(ctx, pair),
            IndentStrategy::LineScan => line_scan_level(ctx, pair),
        };
        log::trace!(
            "indent level {} for pair {}..{} ({:?})",
            level,
            pair.left.offset,
            pair.right.offset,
            self.strategy
        );
        level
    }
}

fn guide_level(ctx: &EditorContext<'_>, pair: &BracePair) -> usize {
    let open_line = ctx.text.line_of_offset(pair.left.offset);
    let close_line = ctx.text.line_of_offset(pair.right.offset);

    let mut level = ctx
        .indents
        .descriptor(open_line, close_line)
        .map_or(0, |g| g.level);

    if level == 0 {
        level = ctx.indents.caret_guide().map_or(0, |g| g.level);
    }

    if level == 0 && close_line >= open_line + 2 {
        level = ctx
            .indents
            .descriptor(open_line + 1, close_line - 1)
            .map_or(0, |g| g.level);
    }

    level
}

fn line_scan_level(ctx: &EditorContext<'_>, pair: &BracePair) -> usize {
    let open_line = ctx.text.line_of_offset(pair.left.offset);
    let line_start = ctx.text.line_start(open_line);
    let prefix = ctx.text.slice(line_start..pair.left.offset);
    prefix
        .find(|c: char| !c.is_whitespace())
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "indent_tests.rs"]
mod indent_tests;
