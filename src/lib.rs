//! pairscope library - bracket pair matching and scope highlighting
//!
//! Resolves the delimiter pair enclosing a caret over a token stream and turns
//! it into decoration requests for an editor host.

pub mod brace;
pub mod config;
pub mod context;
pub mod error;
pub mod highlighter;
pub mod indent;
pub mod lexer;
pub mod matcher;
pub mod registry;
pub mod render;
pub mod style;
pub mod text;
pub mod theme;
pub mod token;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use brace::{Brace, BracePair, CodePairs, MarkupPairs, PairKind, SupportedPairKinds};
pub use config::Config;
pub use context::{CaretShape, EditorContext};
pub use error::{PairError, Result};
pub use highlighter::BraceHighlighter;
pub use indent::{IndentAnalyzer, IndentGuideModel, IndentGuides, IndentStrategy};
pub use matcher::PairResolver;
pub use registry::{DecorationId, DecorationRegistry, MemoryRegistry};
pub use render::{DecorationKind, DecorationRequest, GutterRenderer, PairRenderer, ScopeRenderer};
pub use style::{StyleKey, StyleTable};
pub use text::{SourceText, TextBuffer};
pub use theme::{ColorScheme, Theme};
pub use token::{Token, TokenCursor, TokenList, TokenStream, TokenType};
