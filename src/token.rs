//! # Tokens and Token Stream
//!
//! Token types form a bitmask hierarchy so the parser can match either a
//! concrete type (`STRING`) or a whole group (`LITERAL`, `KEYWORD`). A
//! concrete type carries its group bit plus a discriminating low bit;
//! [`TokenType::matches`] is plain bitmask containment, so
//! `STRING.matches(LITERAL)` holds while `LITERAL.matches(STRING)` does not.
//!
//! [`TokenStream`] is the eager lexer's output: a cursor over the full token
//! vector with unlimited lookahead, mark/rewind, and expectation helpers
//! that raise positioned syntax errors.

use eyre::Result;

use crate::error::Error;
use crate::keyword::{Keyword, KeywordCategory};

/// Bitmask token type. Group bits occupy the high byte, concrete
/// discriminators the low bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenType(pub u32);

impl TokenType {
    // Generic groups
    pub const LITERAL: TokenType = TokenType(1 << 8);
    pub const PARAMETER: TokenType = TokenType(1 << 9);
    pub const SPECIAL: TokenType = TokenType(1 << 10);
    pub const IDENTIFIER: TokenType = TokenType(1 << 11);
    pub const KEYWORD: TokenType = TokenType(1 << 12);
    pub const EOF: TokenType = TokenType(1 << 16);

    // Literals
    pub const STRING: TokenType = TokenType(Self::LITERAL.0 | 1 << 0);
    pub const BINARY_STRING: TokenType = TokenType(Self::LITERAL.0 | 1 << 1);
    pub const HEX_STRING: TokenType = TokenType(Self::LITERAL.0 | 1 << 2);
    pub const NCHAR_STRING: TokenType = TokenType(Self::LITERAL.0 | 1 << 3);
    pub const INTEGER: TokenType = TokenType(Self::LITERAL.0 | 1 << 5);
    pub const FLOAT: TokenType = TokenType(Self::LITERAL.0 | 1 << 6);

    // Parameters
    pub const POSITIONAL_PARAM: TokenType = TokenType(Self::PARAMETER.0 | 1 << 0);
    pub const NAMED_PARAM: TokenType = TokenType(Self::PARAMETER.0 | 1 << 1);

    // Special characters and operators
    pub const SPECIAL_CHAR: TokenType = TokenType(Self::SPECIAL.0 | 1 << 0);
    pub const TYPECAST: TokenType = TokenType(Self::SPECIAL.0 | 1 << 1);
    pub const COLON_EQUALS: TokenType = TokenType(Self::SPECIAL.0 | 1 << 2);
    pub const OPERATOR: TokenType = TokenType(Self::SPECIAL.0 | 1 << 3);
    pub const INEQUALITY: TokenType = TokenType(Self::SPECIAL.0 | 1 << 4);
    pub const EQUALS_GREATER: TokenType = TokenType(Self::SPECIAL.0 | 1 << 5);

    // Keyword categories
    pub const UNRESERVED_KEYWORD: TokenType = TokenType(Self::KEYWORD.0 | 1 << 0);
    pub const COL_NAME_KEYWORD: TokenType = TokenType(Self::KEYWORD.0 | 1 << 1);
    pub const TYPE_FUNC_NAME_KEYWORD: TokenType = TokenType(Self::KEYWORD.0 | 1 << 2);
    pub const RESERVED_KEYWORD: TokenType = TokenType(Self::KEYWORD.0 | 1 << 3);

    /// Containment test: does this (concrete) type satisfy `expected`,
    /// which may be a generic group mask?
    pub fn matches(self, expected: TokenType) -> bool {
        self.0 & expected.0 == expected.0
    }

    pub fn for_keyword(keyword: Keyword) -> TokenType {
        match keyword.category() {
            KeywordCategory::Unreserved => Self::UNRESERVED_KEYWORD,
            KeywordCategory::ColName => Self::COL_NAME_KEYWORD,
            KeywordCategory::TypeFuncName => Self::TYPE_FUNC_NAME_KEYWORD,
            KeywordCategory::Reserved => Self::RESERVED_KEYWORD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub ty: TokenType,
    /// Processed text: identifiers case-folded, string escapes resolved,
    /// keywords in their lowercase spelling.
    pub value: String,
    /// Byte offset of the token's first character in the source.
    pub position: usize,
    /// Resolved keyword when `ty` is a keyword type.
    pub keyword: Option<Keyword>,
}

impl Token {
    pub fn eof(position: usize) -> Token {
        Token {
            ty: TokenType::EOF,
            value: String::new(),
            position,
            keyword: None,
        }
    }

    pub fn matches(&self, expected: TokenType) -> bool {
        self.ty.matches(expected)
    }

    pub fn matches_value(&self, expected: TokenType, value: &str) -> bool {
        self.ty.matches(expected) && self.value == value
    }

    pub fn matches_keyword(&self, keyword: Keyword) -> bool {
        self.keyword == Some(keyword)
    }

    pub fn matches_any_keyword(&self, keywords: &[Keyword]) -> Option<Keyword> {
        self.keyword.filter(|kw| keywords.contains(kw))
    }

    pub fn matches_special_char(&self, ch: char) -> bool {
        self.ty == TokenType::SPECIAL_CHAR && self.value.len() == ch.len_utf8()
            && self.value.chars().next() == Some(ch)
    }

    pub fn is_eof(&self) -> bool {
        self.ty == TokenType::EOF
    }

    /// Human-readable description for error messages.
    pub fn describe(&self) -> String {
        if self.is_eof() {
            "end of input".to_string()
        } else {
            format!("'{}'", self.value)
        }
    }
}

/// Cursor over a fully lexed token vector. The final element is always the
/// EOF token, so `current()` and `look()` never run off the end.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
    source: String,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>, source: String) -> TokenStream {
        debug_assert!(tokens.last().is_some_and(Token::is_eof));
        TokenStream {
            tokens,
            pos: 0,
            source,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Token `n` positions ahead of the cursor; saturates at EOF.
    pub fn look(&self, n: usize) -> &Token {
        let idx = (self.pos + n).min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// Returns the current token and advances past it.
    pub fn next(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    pub fn skip(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.tokens.len() - 1);
    }

    pub fn is_eof(&self) -> bool {
        self.current().is_eof()
    }

    pub fn mark(&self) -> usize {
        self.pos
    }

    pub fn rewind(&mut self, mark: usize) {
        debug_assert!(mark < self.tokens.len());
        self.pos = mark;
    }

    pub fn matches(&self, expected: TokenType) -> bool {
        self.current().matches(expected)
    }

    pub fn matches_value(&self, expected: TokenType, value: &str) -> bool {
        self.current().matches_value(expected, value)
    }

    pub fn matches_special_char(&self, ch: char) -> bool {
        self.current().matches_special_char(ch)
    }

    pub fn keyword(&self) -> Option<Keyword> {
        self.current().keyword
    }

    pub fn matches_keyword(&self, keyword: Keyword) -> bool {
        self.current().matches_keyword(keyword)
    }

    pub fn matches_any_keyword(&self, keywords: &[Keyword]) -> Option<Keyword> {
        self.current().matches_any_keyword(keywords)
    }

    /// True when the upcoming tokens are exactly this keyword sequence.
    pub fn matches_keyword_sequence(&self, keywords: &[Keyword]) -> bool {
        keywords
            .iter()
            .enumerate()
            .all(|(i, kw)| self.look(i).matches_keyword(*kw))
    }

    /// Consumes the current token if it matches, otherwise raises a
    /// positioned syntax error.
    pub fn expect(&mut self, expected: TokenType, value: Option<&str>) -> Result<Token> {
        let ok = match value {
            Some(v) => self.current().matches_value(expected, v),
            None => self.current().matches(expected),
        };
        if !ok {
            let wanted = match value {
                Some(v) => format!("'{v}'"),
                None => describe_type(expected),
            };
            return Err(self.syntax_error(format!(
                "expected {}, found {}",
                wanted,
                self.current().describe()
            )));
        }
        Ok(self.next())
    }

    pub fn expect_special_char(&mut self, ch: char) -> Result<Token> {
        if !self.matches_special_char(ch) {
            return Err(self.syntax_error(format!(
                "expected '{}', found {}",
                ch,
                self.current().describe()
            )));
        }
        Ok(self.next())
    }

    /// Consumes the current token if it is one of the given keywords.
    pub fn expect_keyword(&mut self, keywords: &[Keyword]) -> Result<Keyword> {
        if let Some(kw) = self.matches_any_keyword(keywords) {
            self.next();
            return Ok(kw);
        }
        let wanted = keywords
            .iter()
            .map(|kw| kw.as_str().to_uppercase())
            .collect::<Vec<_>>()
            .join(" or ");
        Err(self.syntax_error(format!(
            "expected {}, found {}",
            wanted,
            self.current().describe()
        )))
    }

    /// Consumes a keyword if present, reporting whether it was.
    pub fn consume_keyword(&mut self, keyword: Keyword) -> bool {
        if self.matches_keyword(keyword) {
            self.next();
            true
        } else {
            false
        }
    }

    pub fn consume_special_char(&mut self, ch: char) -> bool {
        if self.matches_special_char(ch) {
            self.next();
            true
        } else {
            false
        }
    }

    pub fn syntax_error(&self, message: impl std::fmt::Display) -> eyre::Report {
        Error::syntax_at(message, &self.source, self.current().position).into()
    }
}

fn describe_type(ty: TokenType) -> String {
    let name = match ty {
        TokenType::LITERAL => "a literal",
        TokenType::STRING => "a string literal",
        TokenType::INTEGER => "an integer literal",
        TokenType::FLOAT => "a numeric literal",
        TokenType::IDENTIFIER => "an identifier",
        TokenType::KEYWORD => "a keyword",
        TokenType::PARAMETER => "a parameter placeholder",
        TokenType::OPERATOR => "an operator",
        TokenType::SPECIAL_CHAR => "a special character",
        TokenType::TYPECAST => "'::'",
        TokenType::COLON_EQUALS => "':='",
        TokenType::EQUALS_GREATER => "'=>'",
        TokenType::INEQUALITY => "a comparison operator",
        TokenType::EOF => "end of input",
        _ => return format!("token type {:#x}", ty.0),
    };
    name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(ty: TokenType, value: &str, position: usize) -> Token {
        Token {
            ty,
            value: value.to_string(),
            position,
            keyword: Keyword::lookup(value),
        }
    }

    #[test]
    fn concrete_types_match_their_groups() {
        assert!(TokenType::STRING.matches(TokenType::LITERAL));
        assert!(TokenType::INTEGER.matches(TokenType::LITERAL));
        assert!(TokenType::RESERVED_KEYWORD.matches(TokenType::KEYWORD));
        assert!(TokenType::TYPECAST.matches(TokenType::SPECIAL));
        assert!(
            !TokenType::LITERAL.matches(TokenType::STRING),
            "group mask must not satisfy a concrete expectation"
        );
        assert!(!TokenType::STRING.matches(TokenType::INTEGER));
        assert!(!TokenType::EOF.matches(TokenType::LITERAL));
    }

    #[test]
    fn stream_lookahead_saturates_at_eof() {
        let tokens = vec![tok(TokenType::INTEGER, "1", 0), Token::eof(1)];
        let stream = TokenStream::new(tokens, "1".into());
        assert!(stream.look(5).is_eof());
        assert_eq!(stream.look(0).value, "1");
    }

    #[test]
    fn expect_reports_offending_position() {
        let tokens = vec![tok(TokenType::INTEGER, "42", 7), Token::eof(9)];
        let mut stream = TokenStream::new(tokens, "-- c\n \n42".into());
        let err = stream.expect(TokenType::STRING, None).unwrap_err();
        let err = err.downcast_ref::<Error>().unwrap();
        assert_eq!(err.position(), Some(7));
    }

    #[test]
    fn keyword_sequence_matching() {
        let tokens = vec![
            tok(TokenType::RESERVED_KEYWORD, "group", 0),
            tok(TokenType::RESERVED_KEYWORD, "by", 6),
            Token::eof(8),
        ];
        let stream = TokenStream::new(tokens, "group by".into());
        assert!(stream.matches_keyword_sequence(&[Keyword::Group, Keyword::By]));
        assert!(!stream.matches_keyword_sequence(&[Keyword::Order, Keyword::By]));
    }
}
