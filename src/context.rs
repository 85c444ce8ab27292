//! Host capabilities bundled for one resolution cycle.

use clap::ValueEnum;
use serde::Deserialize;

use crate::indent::IndentGuideModel;
use crate::text::TextBuffer;
use crate::token::TokenStream;

/// Caret rendering mode.
///
/// A line caret sits between two characters, so the character at the caret
/// offset is after it. A block caret covers the character at its offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CaretShape {
    #[default]
    Line,
    Block,
}

/// Read-only view of the editor state the engine works against.
#[derive(Clone, Copy)]
pub struct EditorContext<'a> {
    pub text: &'a dyn TextBuffer,
    pub tokens: &'a dyn TokenStream,
    pub indents: &'a dyn IndentGuideModel,
    pub caret: CaretShape,
}

impl<'a> EditorContext<'a> {
    pub fn new(
        text: &'a dyn TextBuffer,
        tokens: &'a dyn TokenStream,
        indents: &'a dyn IndentGuideModel,
    ) -> Self {
        Self {
            text,
            tokens,
            indents,
            caret: CaretShape::default(),
        }
    }

    pub fn with_caret(mut self, caret: CaretShape) -> Self {
        self.caret = caret;
        self
    }

    pub fn is_block_caret(&self) -> bool {
        self.caret == CaretShape::Block
    }
}
