//! Enclosing pair resolution.
//!
//! Finds the delimiter pair around the caret. Structural pairs come from the
//! configured pair kinds, scanned in priority order; string literals are
//! checked separately and win only when they are the tighter span.

pub mod scan;

use crate::brace::{Brace, BracePair, SupportedPairKinds};
use crate::context::{CaretShape, EditorContext};
use crate::error::Result;
use crate::token::Token;

use self::scan::{scan_backward_for_opener, scan_forward_for_closer};

pub struct PairResolver {
    kinds: Box<dyn SupportedPairKinds>,
}

impl PairResolver {
    pub fn new(kinds: impl SupportedPairKinds + 'static) -> Self {
        Self {
            kinds: Box::new(kinds),
        }
    }

    /// Innermost enclosing pair at `offset`, or `None` when the caret is not
    /// inside any pair.
    ///
    /// # Examples
    /// ```
    /// use pairscope::{CodePairs, EditorContext, IndentGuides, PairResolver, SourceText};
    /// use pairscope::lexer::{Language, tokenize};
    ///
    /// let text = SourceText::new("map(.)");
    /// let tokens = tokenize(Language::Code, text.as_str());
    /// let guides = IndentGuides::build(&text, 4);
    /// let ctx = EditorContext::new(&text, &tokens, &guides);
    ///
    /// let resolver = PairResolver::new(CodePairs::default());
    /// let pair = resolver.find_enclosing_pair(&ctx, 4).unwrap().unwrap();
    /// assert_eq!((pair.left.offset, pair.right.offset), (3, 5));
    /// ```
    pub fn find_enclosing_pair(
        &self,
        ctx: &EditorContext<'_>,
        offset: usize,
    ) -> Result<Option<BracePair>> {
        let structural = self.find_structural_pair(ctx, offset)?;
        let literal = self.find_string_literal_pair(ctx, offset);

        let chosen = match (structural, literal) {
            (structural, None) => structural,
            (None, literal) => literal,
            (Some(structural), Some(literal)) => {
                if literal_is_tighter(offset, &structural, &literal) {
                    Some(literal)
                } else {
                    Some(structural)
                }
            }
        };

        match &chosen {
            Some(pair) => log::debug!(
                "caret {} resolved to {:?} {}..{}",
                offset,
                pair.left.token_type,
                pair.left.offset,
                pair.right.offset
            ),
            None => log::trace!("caret {} has no enclosing pair", offset),
        }

        Ok(chosen)
    }

    /// First configured pair kind with both an opener before and a closer
    /// after the caret.
    pub fn find_structural_pair(
        &self,
        ctx: &EditorContext<'_>,
        offset: usize,
    ) -> Result<Option<BracePair>> {
        for kind in self.kinds.pair_kinds() {
            let mut left_cursor = ctx.tokens.cursor_at(offset);
            let Some(left) =
                scan_backward_for_opener(left_cursor.as_mut(), offset, *kind, ctx.caret)?
            else {
                continue;
            };

            let mut right_cursor = ctx.tokens.cursor_at(offset);
            let Some(right) =
                scan_forward_for_closer(right_cursor.as_mut(), offset, *kind, ctx.caret)?
            else {
                continue;
            };

            return Ok(Some(BracePair::new(
                brace_from_token(ctx, &left),
                brace_from_token(ctx, &right),
            )));
        }
        Ok(None)
    }

    /// Quote pair of the string literal under the caret.
    ///
    /// A line caret on the opening quote is outside the literal. Unterminated
    /// literals have no closing quote and yield nothing.
    pub fn find_string_literal_pair(
        &self,
        ctx: &EditorContext<'_>,
        offset: usize,
    ) -> Option<BracePair> {
        if ctx.text.is_empty() || offset >= ctx.text.len() {
            return None;
        }

        let cursor = ctx.tokens.cursor_at(offset);
        let token = cursor.token()?;
        if !token.token_type.is_string_literal() || !token.contains(offset) {
            return None;
        }
        if offset == token.start && ctx.caret == CaretShape::Line {
            return None;
        }

        let open = ctx.text.slice(token.start..token.start + 1);
        let close = ctx.text.slice(token.end - 1..token.end);
        if token.len() < 2 || open.is_empty() || open != close {
            return None;
        }

        Some(BracePair::new(
            Brace::new(token.start, token.token_type, open),
            Brace::new(token.end - 1, token.token_type, close),
        ))
    }
}

fn brace_from_token(ctx: &EditorContext<'_>, token: &Token) -> Brace {
    Brace::new(
        token.start,
        token.token_type,
        ctx.text.slice(token.start..token.end),
    )
}

/// The literal wins only when it is closer to the caret on both sides: its
/// opener is nearer on the left and its closer is nearer on the right.
fn literal_is_tighter(offset: usize, structural: &BracePair, literal: &BracePair) -> bool {
    let caret = offset as isize;
    let distance = |brace: &Brace| caret - brace.offset as isize;

    distance(&structural.left) > distance(&literal.left)
        && distance(&structural.right) < distance(&literal.right)
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
