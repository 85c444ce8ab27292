//! Bundled tokenizers.
//!
//! Editors normally provide their own lexer; these exist so the CLI and the
//! tests have a concrete [`TokenStream`](crate::token::TokenStream). Both
//! produce tokens that cover the input contiguously.

mod code;
mod markup;

use std::path::Path;

use clap::ValueEnum;
use serde::Deserialize;

use crate::token::TokenList;

/// Token vocabulary to lex with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// C-family syntax: braces, brackets, parentheses, angle brackets, quotes
    #[default]
    Code,
    /// XML/HTML-like tags and attribute values
    Markup,
}

impl Language {
    /// Picks the language from a file extension. Unknown extensions lex as code.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("xml" | "html" | "htm" | "xhtml" | "svg" | "vue" | "xaml") => Language::Markup,
            _ => Language::Code,
        }
    }
}

pub fn tokenize(language: Language, text: &str) -> TokenList {
    let tokens = match language {
        Language::Code => code::tokenize(text),
        Language::Markup => markup::tokenize(text),
    };
    log::trace!("lexed {} tokens as {:?}", tokens.len(), language);
    TokenList::new(tokens)
}

/// Byte cursor shared by both lexers.
struct Scanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn is_done(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.text[self.pos..].chars().nth(n)
    }

    fn starts_with(&self, pattern: &str) -> bool {
        self.text[self.pos..].starts_with(pattern)
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn bump_str(&mut self, pattern: &str) {
        debug_assert!(self.starts_with(pattern));
        self.pos += pattern.len();
    }

    fn bump_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
    }

    /// Advances past `terminator`, or to the end of input when it never shows up.
    fn bump_until_after(&mut self, terminator: &str) {
        match self.text[self.pos..].find(terminator) {
            Some(i) => self.pos += i + terminator.len(),
            None => self.pos = self.text.len(),
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_path() {
        assert_eq!(Language::from_path(Path::new("index.html")), Language::Markup);
        assert_eq!(Language::from_path(Path::new("pom.XML")), Language::Markup);
        assert_eq!(Language::from_path(Path::new("main.rs")), Language::Code);
        assert_eq!(Language::from_path(Path::new("Makefile")), Language::Code);
    }

    #[test]
    fn test_tokens_cover_input() {
        let inputs = [
            (Language::Code, "fn main() { let s = \"a{b\"; /* } */ }"),
            (Language::Markup, "<a href=\"x\">text</a><br/>"),
        ];
        for (language, text) in inputs {
            let list = tokenize(language, text);
            let mut expected_start = 0;
            for token in list.tokens() {
                assert_eq!(token.start, expected_start, "gap before {:?}", token);
                assert!(token.end > token.start);
                expected_start = token.end;
            }
            assert_eq!(expected_start, text.len());
        }
    }
}
