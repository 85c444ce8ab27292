use super::{Scanner, is_word_char};
use crate::token::{Token, TokenType};

pub(super) fn tokenize(text: &str) -> Vec<Token> {
    let mut scanner = Scanner::new(text);
    let mut tokens = Vec::new();

    while !scanner.is_done() {
        let start = scanner.pos;
        let token_type = next_token(&mut scanner);
        tokens.push(Token::new(token_type, start, scanner.pos));
    }

    tokens
}

fn next_token(scanner: &mut Scanner<'_>) -> TokenType {
    if scanner.starts_with("//") {
        scanner.bump_while(|c| c != '\n');
        return TokenType::Comment;
    }
    if scanner.starts_with("/*") {
        scanner.bump_str("/*");
        scanner.bump_until_after("*/");
        return TokenType::Comment;
    }

    let Some(ch) = scanner.bump() else {
        return TokenType::Other;
    };

    match ch {
        '{' => TokenType::LBrace,
        '}' => TokenType::RBrace,
        '(' => TokenType::LParen,
        ')' => TokenType::RParen,
        '[' => TokenType::LBracket,
        ']' => TokenType::RBracket,
        '<' => TokenType::LAngle,
        '>' => TokenType::RAngle,
        '"' => {
            scan_quoted(scanner, '"');
            TokenType::StringLiteral
        }
        '\'' => scan_char_literal(scanner),
        c if c.is_whitespace() => {
            scanner.bump_while(char::is_whitespace);
            TokenType::Whitespace
        }
        c if is_word_char(c) => {
            scanner.bump_while(is_word_char);
            TokenType::Other
        }
        _ => TokenType::Other,
    }
}

/// Consumes the rest of a quoted literal. Unterminated literals stop at the
/// end of the line.
fn scan_quoted(scanner: &mut Scanner<'_>, quote: char) {
    while let Some(ch) = scanner.peek() {
        match ch {
            '\n' => return,
            '\\' => {
                scanner.bump();
                if scanner.peek().is_some_and(|c| c != '\n') {
                    scanner.bump();
                }
            }
            c if c == quote => {
                scanner.bump();
                return;
            }
            _ => {
                scanner.bump();
            }
        }
    }
}

/// `'x'` and `'\n'` are char literals; a lone `'` (lifetimes, apostrophes)
/// is plain punctuation.
fn scan_char_literal(scanner: &mut Scanner<'_>) -> TokenType {
    match (scanner.peek(), scanner.peek_nth(1)) {
        (Some('\\'), _) => {
            scan_quoted(scanner, '\'');
            TokenType::CharLiteral
        }
        (Some(c), Some('\'')) if c != '\n' => {
            scanner.bump();
            scanner.bump();
            TokenType::CharLiteral
        }
        _ => TokenType::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types(text: &str) -> Vec<TokenType> {
        tokenize(text).into_iter().map(|t| t.token_type).collect()
    }

    #[test]
    fn test_delimiters() {
        assert_eq!(
            types("{([<>])}"),
            vec![
                TokenType::LBrace,
                TokenType::LParen,
                TokenType::LBracket,
                TokenType::LAngle,
                TokenType::RAngle,
                TokenType::RBracket,
                TokenType::RParen,
                TokenType::RBrace,
            ]
        );
    }

    #[test]
    fn test_string_swallows_delimiters() {
        let tokens = tokenize(r#"a = "b(c""#);
        let literal = tokens
            .iter()
            .find(|t| t.token_type == TokenType::StringLiteral)
            .copied()
            .unwrap();
        assert_eq!((literal.start, literal.end), (4, 9));
        assert!(!tokens.iter().any(|t| t.token_type == TokenType::LParen));
    }

    #[test]
    fn test_escaped_quote_in_string() {
        let tokens = tokenize(r#""a\"b" x"#);
        assert_eq!(tokens[0].token_type, TokenType::StringLiteral);
        assert_eq!(tokens[0].end, 6);
    }

    #[test]
    fn test_unterminated_string_stops_at_line_end() {
        let tokens = tokenize("\"abc\n}");
        assert_eq!(tokens[0].token_type, TokenType::StringLiteral);
        assert_eq!(tokens[0].end, 4);
        assert_eq!(tokens.last().unwrap().token_type, TokenType::RBrace);
    }

    #[test]
    fn test_comments_hide_delimiters() {
        assert_eq!(
            types("{ // }\n}"),
            vec![
                TokenType::LBrace,
                TokenType::Whitespace,
                TokenType::Comment,
                TokenType::Whitespace,
                TokenType::RBrace,
            ]
        );
        assert_eq!(
            types("/* { */"),
            vec![TokenType::Comment]
        );
    }

    #[test]
    fn test_char_literal_and_lifetime() {
        assert_eq!(types("'{'"), vec![TokenType::CharLiteral]);
        assert_eq!(types(r"'\n'"), vec![TokenType::CharLiteral]);
        assert_eq!(
            types("&'a"),
            vec![TokenType::Other, TokenType::Other, TokenType::Other]
        );
    }
}
