//! Delimiter pair kinds and resolved pairs.

use serde::{Deserialize, Serialize};

use crate::token::TokenType;

/// One matchable pair kind: a left token type and its right counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterKindPair {
    pub left: TokenType,
    pub right: TokenType,
}

impl DelimiterKindPair {
    pub const fn new(left: TokenType, right: TokenType) -> Self {
        Self { left, right }
    }
}

/// Structural pair kinds selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PairKind {
    Brace,
    Paren,
    Bracket,
    Angle,
}

impl PairKind {
    pub fn delimiters(self) -> DelimiterKindPair {
        match self {
            PairKind::Brace => DelimiterKindPair::new(TokenType::LBrace, TokenType::RBrace),
            PairKind::Paren => DelimiterKindPair::new(TokenType::LParen, TokenType::RParen),
            PairKind::Bracket => DelimiterKindPair::new(TokenType::LBracket, TokenType::RBracket),
            PairKind::Angle => DelimiterKindPair::new(TokenType::LAngle, TokenType::RAngle),
        }
    }
}

pub fn default_pair_kinds() -> Vec<PairKind> {
    vec![PairKind::Brace, PairKind::Paren, PairKind::Bracket]
}

/// Supplies the ordered list of pair kinds the resolver searches.
///
/// Earlier kinds take priority: the first kind with both an opener and a
/// closer around the caret wins.
pub trait SupportedPairKinds {
    fn pair_kinds(&self) -> &[DelimiterKindPair];
}

/// Pair kinds for C-family code, in configured order.
#[derive(Debug, Clone)]
pub struct CodePairs {
    kinds: Vec<DelimiterKindPair>,
}

impl CodePairs {
    pub fn new(kinds: &[PairKind]) -> Self {
        Self {
            kinds: kinds.iter().map(|k| k.delimiters()).collect(),
        }
    }
}

impl Default for CodePairs {
    fn default() -> Self {
        Self::new(&default_pair_kinds())
    }
}

impl SupportedPairKinds for CodePairs {
    fn pair_kinds(&self) -> &[DelimiterKindPair] {
        &self.kinds
    }
}

/// Pair kinds for markup: attribute value quotes before tag brackets.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupPairs;

const MARKUP_KINDS: [DelimiterKindPair; 2] = [
    DelimiterKindPair::new(TokenType::AttrValueStart, TokenType::AttrValueEnd),
    DelimiterKindPair::new(TokenType::TagStart, TokenType::TagEnd),
];

impl SupportedPairKinds for MarkupPairs {
    fn pair_kinds(&self) -> &[DelimiterKindPair] {
        &MARKUP_KINDS
    }
}

/// One side of a resolved pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Brace {
    pub offset: usize,
    pub token_type: TokenType,
    /// Delimiter text as it appears in the buffer
    pub text: String,
}

impl Brace {
    pub fn new(offset: usize, token_type: TokenType, text: impl Into<String>) -> Self {
        Self {
            offset,
            token_type,
            text: text.into(),
        }
    }

    /// Offset just past the delimiter text.
    pub fn end(&self) -> usize {
        self.offset + self.text.len().max(1)
    }
}

/// A matched opener and closer. The empty pair is `Option::None` at every
/// API boundary, so a `BracePair` always has both sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BracePair {
    pub left: Brace,
    pub right: Brace,
}

impl BracePair {
    pub fn new(left: Brace, right: Brace) -> Self {
        debug_assert!(left.offset <= right.offset);
        Self { left, right }
    }

    pub fn encloses(&self, offset: usize) -> bool {
        self.left.offset <= offset && offset <= self.right.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_pairs_keep_configured_order() {
        let pairs = CodePairs::new(&[PairKind::Paren, PairKind::Angle]);
        assert_eq!(
            pairs.pair_kinds(),
            &[
                DelimiterKindPair::new(TokenType::LParen, TokenType::RParen),
                DelimiterKindPair::new(TokenType::LAngle, TokenType::RAngle),
            ]
        );
    }

    #[test]
    fn test_default_code_pairs() {
        let pairs = CodePairs::default();
        assert_eq!(pairs.pair_kinds().len(), 3);
        assert_eq!(pairs.pair_kinds()[0].left, TokenType::LBrace);
    }

    #[test]
    fn test_markup_pairs_prefer_attribute_quotes() {
        let kinds = MarkupPairs.pair_kinds();
        assert_eq!(kinds[0].left, TokenType::AttrValueStart);
        assert_eq!(kinds[1].left, TokenType::TagStart);
    }

    #[test]
    fn test_brace_end() {
        assert_eq!(Brace::new(3, TokenType::TagStart, "</").end(), 5);
        assert_eq!(Brace::new(3, TokenType::LBrace, "{").end(), 4);
    }

    #[test]
    fn test_pair_encloses() {
        let pair = BracePair::new(
            Brace::new(2, TokenType::LParen, "("),
            Brace::new(6, TokenType::RParen, ")"),
        );
        assert!(pair.encloses(2));
        assert!(pair.encloses(6));
        assert!(!pair.encloses(7));
    }
}
