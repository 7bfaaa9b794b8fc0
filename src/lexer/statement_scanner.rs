use super::token::{Token, TokenKind};

/// Scanner for a single catscript statement
///
/// Each scanner owns one statement's text and produces a fresh token
/// sequence for it. Characters that start no token are skipped, so
/// scanning cannot fail.
pub struct StatementScanner {
    /// Source code as character vector
    source: Vec<char>,
    /// Accumulated tokens
    tokens: Vec<Token>,
    /// Start position of current token
    start: usize,
    /// Current position in source
    current: usize,
}

impl StatementScanner {
    /// Creates a new scanner over one statement
    pub fn new(source: &str) -> Self {
        StatementScanner {
            source: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
        }
    }

    /// Scans all tokens and returns them, terminated by an `Eof` marker
    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }

        let column = self.source.len() + 1;
        self.tokens.push(Token::eof(column));

        tracing::trace!(count = self.tokens.len() - 1, "scanned statement");
        self.tokens
    }

    fn scan_token(&mut self) {
        let c = self.advance();

        match c {
            c if c.is_ascii_alphabetic() => self.scan_identifier(),
            c if c.is_ascii_digit() => self.scan_integer(),
            '-' if self.peek().is_ascii_digit() => self.scan_integer(),
            c => {
                if let Some(kind) = TokenKind::from_operator(c) {
                    self.add_token(kind);
                }
                // anything else is a separator
            }
        }
    }

    fn scan_identifier(&mut self) {
        while self.peek().is_ascii_alphanumeric() {
            self.advance();
        }
        self.add_token(TokenKind::Identifier);
    }

    fn scan_integer(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }
        self.add_token(TokenKind::Integer);
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    fn add_token(&mut self, kind: TokenKind) {
        let lexeme: String = self.source[self.start..self.current].iter().collect();
        self.tokens.push(Token::new(kind, lexeme, self.start + 1));
    }
}

/// Scan one statement into its tokens
pub fn tokenize(source: &str) -> Vec<Token> {
    StatementScanner::new(source).scan_tokens()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexemes(source: &str) -> Vec<String> {
        tokenize(source)
            .into_iter()
            .filter(|t| !t.is_eof())
            .map(|t| t.lexeme)
            .collect()
    }

    #[test]
    fn test_assignment_statement() {
        assert_eq!(
            lexemes("x = 2 + 3 * 4"),
            vec!["x", "=", "2", "+", "3", "*", "4"]
        );

        let tokens = tokenize("x = 2 + 3 * 4");
        assert_eq!(tokens.len(), 8); // x = 2 + 3 * 4 EOF
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].kind, TokenKind::Assign);
        assert_eq!(tokens[2].kind, TokenKind::Integer);
        assert_eq!(tokens[3].kind, TokenKind::Plus);
        assert_eq!(tokens[5].kind, TokenKind::Star);
        assert_eq!(tokens[7].kind, TokenKind::Eof);
    }

    #[test]
    fn test_whitespace_is_optional() {
        assert_eq!(lexemes("x=(1+2)*y2"), vec!["x", "=", "(", "1", "+", "2", ")", "*", "y2"]);
    }

    #[test]
    fn test_negative_literal_binds_minus() {
        // a minus directly before a digit starts a literal
        assert_eq!(lexemes("10 - 2"), vec!["10", "-", "2"]);
        assert_eq!(lexemes("10 -2"), vec!["10", "-2"]);
        assert_eq!(lexemes("x-1"), vec!["x", "-1"]);

        let tokens = tokenize("-7");
        assert_eq!(tokens[0].kind, TokenKind::Integer);
        assert_eq!(tokens[0].lexeme, "-7");
    }

    #[test]
    fn test_identifier_then_digits() {
        assert_eq!(lexemes("abc123"), vec!["abc123"]);
        assert_eq!(lexemes("123abc"), vec!["123", "abc"]);
    }

    #[test]
    fn test_unknown_characters_skipped() {
        assert_eq!(lexemes("x = 1; print x"), vec!["x", "=", "1", "print", "x"]);
        assert_eq!(lexemes("a_b % ä"), vec!["a", "b"]);
        assert!(lexemes("  \t ").is_empty());
    }

    #[test]
    fn test_columns() {
        let tokens = tokenize("print  (7)");
        assert_eq!(tokens[0].column, 1);
        assert_eq!(tokens[1].column, 8);
        assert_eq!(tokens[2].column, 9);
        assert_eq!(tokens[3].column, 10);
        assert_eq!(tokens[4].column, 11);
        assert!(tokens[4].is_eof());
    }

    #[test]
    fn test_each_statement_scanned_independently() {
        let first = tokenize("x = 1");
        let second = tokenize("print x");
        assert_eq!(first.len(), 4);
        assert_eq!(second.len(), 3);
        assert_eq!(second[0].lexeme, "print");
    }
}
