//! Token stream capability.
//!
//! The host tokenizer is consumed through [`TokenStream`], which hands out a
//! bidirectional [`TokenCursor`] positioned at a buffer offset. [`TokenList`]
//! is a vector-backed stream produced by the bundled lexers.

use serde::Serialize;

/// Semantic token classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LAngle,
    RAngle,
    /// Markup `<` or `</`
    TagStart,
    /// Markup `>` or `/>`
    TagEnd,
    /// Opening quote of a markup attribute value
    AttrValueStart,
    /// Closing quote of a markup attribute value
    AttrValueEnd,
    AttrValue,
    /// Whole string literal, quotes included
    StringLiteral,
    CharLiteral,
    Comment,
    Whitespace,
    Other,
}

impl TokenType {
    pub fn is_left_delimiter(self) -> bool {
        matches!(
            self,
            TokenType::LBrace
                | TokenType::LParen
                | TokenType::LBracket
                | TokenType::LAngle
                | TokenType::TagStart
                | TokenType::AttrValueStart
        )
    }

    pub fn is_right_delimiter(self) -> bool {
        matches!(
            self,
            TokenType::RBrace
                | TokenType::RParen
                | TokenType::RBracket
                | TokenType::RAngle
                | TokenType::TagEnd
                | TokenType::AttrValueEnd
        )
    }

    pub fn is_string_literal(self) -> bool {
        matches!(self, TokenType::StringLiteral | TokenType::CharLiteral)
    }
}

/// A classified span of the buffer, `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub token_type: TokenType,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn new(token_type: TokenType, start: usize, end: usize) -> Self {
        Self {
            token_type,
            start,
            end,
        }
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Bidirectional iterator over tokens.
///
/// Once the cursor walks past either end, `token()` returns `None` and it
/// stays exhausted.
pub trait TokenCursor {
    fn token(&self) -> Option<Token>;

    fn advance(&mut self);

    fn retreat(&mut self);

    fn at_end(&self) -> bool {
        self.token().is_none()
    }
}

/// Source of token cursors.
pub trait TokenStream {
    /// Cursor on the token containing `offset`. Offsets at or past the end of
    /// the buffer position the cursor on the last token; an empty stream
    /// yields an exhausted cursor.
    fn cursor_at(&self, offset: usize) -> Box<dyn TokenCursor + '_>;
}

/// Tokens covering the buffer contiguously, in offset order.
#[derive(Debug, Clone, Default)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Index of the token containing `offset`, clamped to the last token.
    fn index_at(&self, offset: usize) -> Option<usize> {
        if self.tokens.is_empty() {
            return None;
        }
        let idx = self.tokens.partition_point(|t| t.end <= offset);
        Some(idx.min(self.tokens.len() - 1))
    }
}

impl TokenStream for TokenList {
    fn cursor_at(&self, offset: usize) -> Box<dyn TokenCursor + '_> {
        Box::new(ListCursor {
            tokens: &self.tokens,
            pos: self.index_at(offset),
        })
    }
}

struct ListCursor<'a> {
    tokens: &'a [Token],
    pos: Option<usize>,
}

impl TokenCursor for ListCursor<'_> {
    fn token(&self) -> Option<Token> {
        self.pos.and_then(|i| self.tokens.get(i).copied())
    }

    fn advance(&mut self) {
        self.pos = self
            .pos
            .map(|i| i + 1)
            .filter(|&i| i < self.tokens.len());
    }

    fn retreat(&mut self) {
        self.pos = self.pos.and_then(|i| i.checked_sub(1));
    }
}
