use super::Scanner;
use crate::token::{Token, TokenType};

pub(super) fn tokenize(text: &str) -> Vec<Token> {
    let mut scanner = Scanner::new(text);
    let mut tokens = Vec::new();
    let mut in_tag = false;

    while !scanner.is_done() {
        let start = scanner.pos;

        if !in_tag {
            if scanner.starts_with("<!--") {
                scanner.bump_until_after("-->");
                push(&mut tokens, TokenType::Comment, start, scanner.pos);
            } else if scanner.starts_with("</") {
                scanner.bump_str("</");
                in_tag = true;
                push(&mut tokens, TokenType::TagStart, start, scanner.pos);
            } else if scanner.starts_with("<") {
                scanner.bump_str("<");
                in_tag = true;
                push(&mut tokens, TokenType::TagStart, start, scanner.pos);
            } else if scanner.peek().is_some_and(char::is_whitespace) {
                scanner.bump_while(char::is_whitespace);
                push(&mut tokens, TokenType::Whitespace, start, scanner.pos);
            } else {
                scanner.bump_while(|c| c != '<' && !c.is_whitespace());
                push(&mut tokens, TokenType::Other, start, scanner.pos);
            }
            continue;
        }

        if scanner.starts_with("/>") {
            scanner.bump_str("/>");
            in_tag = false;
            push(&mut tokens, TokenType::TagEnd, start, scanner.pos);
            continue;
        }

        match scanner.peek() {
            Some('>') => {
                scanner.bump();
                in_tag = false;
                push(&mut tokens, TokenType::TagEnd, start, scanner.pos);
            }
            Some(quote @ ('"' | '\'')) => {
                scanner.bump();
                push(&mut tokens, TokenType::AttrValueStart, start, scanner.pos);

                let value_start = scanner.pos;
                scanner.bump_while(|c| c != quote);
                push(&mut tokens, TokenType::AttrValue, value_start, scanner.pos);

                let end_start = scanner.pos;
                if scanner.peek() == Some(quote) {
                    scanner.bump();
                    push(&mut tokens, TokenType::AttrValueEnd, end_start, scanner.pos);
                }
            }
            Some(c) if c.is_whitespace() => {
                scanner.bump_while(char::is_whitespace);
                push(&mut tokens, TokenType::Whitespace, start, scanner.pos);
            }
            Some('=') => {
                scanner.bump();
                push(&mut tokens, TokenType::Other, start, scanner.pos);
            }
            _ => {
                scanner.bump_while(|c| {
                    !c.is_whitespace() && !matches!(c, '>' | '=' | '"' | '\'' | '/')
                });
                if scanner.pos == start {
                    // lone '/' inside a tag
                    scanner.bump();
                }
                push(&mut tokens, TokenType::Other, start, scanner.pos);
            }
        }
    }

    tokens
}

/// Empty spans (an empty attribute value) produce no token.
fn push(tokens: &mut Vec<Token>, token_type: TokenType, start: usize, end: usize) {
    if end > start {
        tokens.push(Token::new(token_type, start, end));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types(text: &str) -> Vec<TokenType> {
        tokenize(text).into_iter().map(|t| t.token_type).collect()
    }

    #[test]
    fn test_element_with_attribute() {
        assert_eq!(
            types(r#"<a href="x">t</a>"#),
            vec![
                TokenType::TagStart,
                TokenType::Other,
                TokenType::Whitespace,
                TokenType::Other,
                TokenType::Other,
                TokenType::AttrValueStart,
                TokenType::AttrValue,
                TokenType::AttrValueEnd,
                TokenType::TagEnd,
                TokenType::Other,
                TokenType::TagStart,
                TokenType::Other,
                TokenType::TagEnd,
            ]
        );
    }

    #[test]
    fn test_self_closing_tag() {
        let tokens = tokenize("<br/>");
        assert_eq!(
            tokens.last().map(|t| (t.token_type, t.start, t.end)),
            Some((TokenType::TagEnd, 3, 5))
        );
    }

    #[test]
    fn test_empty_attribute_value() {
        assert_eq!(
            types(r#"<a b="">"#),
            vec![
                TokenType::TagStart,
                TokenType::Other,
                TokenType::Whitespace,
                TokenType::Other,
                TokenType::Other,
                TokenType::AttrValueStart,
                TokenType::AttrValueEnd,
                TokenType::TagEnd,
            ]
        );
    }

    #[test]
    fn test_comment_hides_tags() {
        assert_eq!(types("<!-- <a> -->x"), vec![TokenType::Comment, TokenType::Other]);
    }
}
