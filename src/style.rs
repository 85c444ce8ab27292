//! Delimiter style lookup.
//!
//! Styles are resolved by token type first, then by the delimiter's literal
//! text. Text keys carry a `_` suffix for the scope-guide rendering of a
//! delimiter, as opposed to its inline flash.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::token::TokenType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleKey {
    Brace,
    BraceLine,
    Bracket,
    BracketLine,
    Parenthesis,
    ParenthesisLine,
    DoubleQuote,
    DoubleQuoteLine,
    CuspBracket,
    CuspBracketLine,
    /// No mapping exists for the delimiter
    Default,
}

impl StyleKey {
    pub const ALL: [StyleKey; 11] = [
        StyleKey::Brace,
        StyleKey::BraceLine,
        StyleKey::Bracket,
        StyleKey::BracketLine,
        StyleKey::Parenthesis,
        StyleKey::ParenthesisLine,
        StyleKey::DoubleQuote,
        StyleKey::DoubleQuoteLine,
        StyleKey::CuspBracket,
        StyleKey::CuspBracketLine,
        StyleKey::Default,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StyleKey::Brace => "brace",
            StyleKey::BraceLine => "brace_line",
            StyleKey::Bracket => "bracket",
            StyleKey::BracketLine => "bracket_line",
            StyleKey::Parenthesis => "parenthesis",
            StyleKey::ParenthesisLine => "parenthesis_line",
            StyleKey::DoubleQuote => "double_quote",
            StyleKey::DoubleQuoteLine => "double_quote_line",
            StyleKey::CuspBracket => "cusp_bracket",
            StyleKey::CuspBracketLine => "cusp_bracket_line",
            StyleKey::Default => "default",
        }
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which rendering of a delimiter a style is wanted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleVariant {
    /// Inline highlight on the delimiter itself
    Flash,
    /// Scope guide running from the delimiter
    Guide,
}

/// Immutable style mapping, built once and shared by reference.
#[derive(Debug, Clone)]
pub struct StyleTable {
    by_type: HashMap<TokenType, StyleKey>,
    by_text: HashMap<&'static str, StyleKey>,
}

impl StyleTable {
    pub fn new() -> Self {
        let by_type = HashMap::from([
            (TokenType::TagStart, StyleKey::CuspBracket),
            (TokenType::TagEnd, StyleKey::CuspBracket),
            (TokenType::AttrValueStart, StyleKey::DoubleQuote),
            (TokenType::AttrValueEnd, StyleKey::DoubleQuote),
            (TokenType::StringLiteral, StyleKey::DoubleQuote),
            (TokenType::CharLiteral, StyleKey::DoubleQuote),
        ]);

        let by_text = HashMap::from([
            ("{", StyleKey::Brace),
            ("}", StyleKey::Brace),
            ("{_", StyleKey::BraceLine),
            ("}_", StyleKey::BraceLine),
            ("[", StyleKey::Bracket),
            ("]", StyleKey::Bracket),
            ("[_", StyleKey::BracketLine),
            ("]_", StyleKey::BracketLine),
            ("(", StyleKey::Parenthesis),
            (")", StyleKey::Parenthesis),
            ("(_", StyleKey::ParenthesisLine),
            (")_", StyleKey::ParenthesisLine),
            ("<", StyleKey::CuspBracketLine),
            (">", StyleKey::CuspBracket),
            ("<_", StyleKey::CuspBracketLine),
            (">_", StyleKey::CuspBracketLine),
            ("\"", StyleKey::DoubleQuote),
            ("\"_", StyleKey::DoubleQuoteLine),
        ]);

        Self { by_type, by_text }
    }

    /// Style for a delimiter. Misses resolve to [`StyleKey::Default`].
    pub fn resolve(&self, token_type: TokenType, text: &str, variant: StyleVariant) -> StyleKey {
        if let Some(key) = self.by_type.get(&token_type) {
            return *key;
        }

        let key = match variant {
            StyleVariant::Flash => self.by_text.get(text),
            StyleVariant::Guide => self.by_text.get(format!("{}_", text).as_str()),
        };

        match key {
            Some(key) => *key,
            None => {
                log::debug!("no style for {:?} {:?}, using default", token_type, text);
                StyleKey::Default
            }
        }
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::new()
    }
}
