//! Nesting-aware token scans outward from the caret.

use crate::brace::DelimiterKindPair;
use crate::context::CaretShape;
use crate::error::{PairError, Result};
use crate::token::{Token, TokenCursor};

/// Walks left from the caret looking for the opener of `kind` that encloses it.
///
/// Closers of `kind` seen on the way are pending and cancel the next opener.
/// The token under the caret is considered once: an opener there is claimed
/// only by a block caret, a closer there is never counted.
pub fn scan_backward_for_opener(
    cursor: &mut dyn TokenCursor,
    caret: usize,
    kind: DelimiterKindPair,
    shape: CaretShape,
) -> Result<Option<Token>> {
    let mut pending_close = 0usize;
    let mut previous_start: Option<usize> = None;

    while let Some(token) = cursor.token() {
        check_token(&token)?;
        if previous_start.is_some_and(|bound| token.end > bound) {
            return Err(out_of_order(&token, "retreat moved forward"));
        }
        previous_start = Some(token.start);

        let under_caret = token.contains(caret);
        if token.token_type == kind.right {
            if !under_caret {
                pending_close += 1;
            }
        } else if token.token_type == kind.left && !(under_caret && shape == CaretShape::Line) {
            if pending_close == 0 {
                return Ok(Some(token));
            }
            pending_close -= 1;
        }

        cursor.retreat();
    }

    Ok(None)
}

/// Mirror of [`scan_backward_for_opener`]: walks right looking for the closer.
///
/// A closer under the caret is claimed in both caret modes. An opener under a
/// block caret belongs to the pair being resolved and is skipped; under a line
/// caret it starts a nested pair.
pub fn scan_forward_for_closer(
    cursor: &mut dyn TokenCursor,
    caret: usize,
    kind: DelimiterKindPair,
    shape: CaretShape,
) -> Result<Option<Token>> {
    let mut pending_open = 0usize;
    let mut previous_end: Option<usize> = None;

    while let Some(token) = cursor.token() {
        check_token(&token)?;
        if previous_end.is_some_and(|bound| token.start < bound) {
            return Err(out_of_order(&token, "advance moved backward"));
        }
        previous_end = Some(token.end);

        // the cursor clamps to the last token when the caret is past the end
        if token.end <= caret {
            cursor.advance();
            continue;
        }

        let under_caret = token.contains(caret);
        if token.token_type == kind.left {
            if !(under_caret && shape == CaretShape::Block) {
                pending_open += 1;
            }
        } else if token.token_type == kind.right {
            if pending_open == 0 {
                return Ok(Some(token));
            }
            pending_open -= 1;
        }

        cursor.advance();
    }

    Ok(None)
}

fn check_token(token: &Token) -> Result<()> {
    if token.is_empty() {
        return Err(PairError::InconsistentCursor {
            offset: token.start,
            detail: format!("empty token {:?} ending at {}", token.token_type, token.end),
        });
    }
    Ok(())
}

fn out_of_order(token: &Token, detail: &str) -> PairError {
    PairError::InconsistentCursor {
        offset: token.start,
        detail: format!("{} ({:?} {}..{})", detail, token.token_type, token.start, token.end),
    }
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod scan_tests;
