//! Shared test utilities for pairscope
//!
//! This module provides the editor fixture used across the resolver, indent,
//! and highlighter tests.

#[cfg(test)]
pub mod test_helpers {
    use crate::context::{CaretShape, EditorContext};
    use crate::indent::IndentGuides;
    use crate::lexer::{Language, tokenize};
    use crate::text::{SourceText, TextBuffer};
    use crate::token::TokenList;

    /// Tab width used by every fixture
    pub const TAB_WIDTH: usize = 4;

    /// Text plus the tokens and indent guides derived from it
    pub struct Fixture {
        pub text: SourceText,
        pub tokens: TokenList,
        pub guides: IndentGuides,
    }

    impl Fixture {
        pub fn new(language: Language, text: &str) -> Self {
            let text = SourceText::new(text);
            let tokens = tokenize(language, text.as_str());
            let guides = IndentGuides::build(&text, TAB_WIDTH);
            Self {
                text,
                tokens,
                guides,
            }
        }

        pub fn code(text: &str) -> Self {
            Self::new(Language::Code, text)
        }

        pub fn markup(text: &str) -> Self {
            Self::new(Language::Markup, text)
        }

        /// Places the indent model's caret on the line containing `offset`
        pub fn with_caret_at(mut self, offset: usize) -> Self {
            let line = self.text.line_of_offset(offset);
            self.guides.set_caret_line(Some(line));
            self
        }

        /// Context with a line caret
        pub fn ctx(&self) -> EditorContext<'_> {
            EditorContext::new(&self.text, &self.tokens, &self.guides)
        }

        /// Context with a block caret
        pub fn block_ctx(&self) -> EditorContext<'_> {
            self.ctx().with_caret(CaretShape::Block)
        }

        /// Offset of the first occurrence of `needle`
        pub fn offset_of(&self, needle: &str) -> usize {
            self.text
                .as_str()
                .find(needle)
                .unwrap_or_else(|| panic!("{:?} not found in fixture", needle))
        }
    }
}
