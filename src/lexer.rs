//! # SQL Lexer
//!
//! Byte-level scanner implementing PostgreSQL lexical rules:
//!
//! - case-folded identifiers and keyword resolution through a perfect-hash map
//! - `'...'` literals with `''` doubling and implicit newline continuation,
//!   `E'...'` C-style escapes (octal, hex, Unicode with surrogate pairs),
//!   `B'...'`/`X'...'`/`N'...'` prefixed literals, `$tag$...$tag$` dollar quoting
//! - numeric literals with underscore separators, `0b`/`0o`/`0x` radix forms
//!   and trailing-junk detection
//! - `$1` positional and `:name` named parameters
//! - longest-match operator scanning with the trailing `+`/`-` rule and
//!   embedded comment cut-off
//! - `--` line comments and nested `/* */` block comments
//!
//! The lexer is eager: [`Lexer::tokenize`] scans the whole input and returns
//! a [`TokenStream`], or the first lexical error with its byte position.
//! Escape processing happens here, so the parser only ever sees processed
//! values.

use eyre::Result;

use crate::error::Error;
use crate::keyword::Keyword;
use crate::token::{Token, TokenStream, TokenType};

/// Characters permitted inside operator names.
const CHARS_OPERATOR: &[u8] = b"~!@#^&|`?+-*/%<>=";

/// Single characters lexed as `SPECIAL_CHAR` rather than `OPERATOR`.
const CHARS_SPECIAL: &[u8] = b",()[].;:+-*/%^<>=";

/// Operator characters that suppress the trailing `+`/`-` trim rule.
const CHARS_NON_STANDARD: &[u8] = b"~!@#^&|`?%";

/// Lexer options, shared with the parser so re-parsed fragments use the same
/// lexical rules as the original input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerOptions {
    /// Same meaning as the `postgresql.conf` parameter: when `true`
    /// (default) backslashes in plain `'...'` strings are literal, when
    /// `false` they start escape sequences.
    pub standard_conforming_strings: bool,
}

impl Default for LexerOptions {
    fn default() -> LexerOptions {
        LexerOptions {
            standard_conforming_strings: true,
        }
    }
}

pub struct Lexer<'a> {
    source: &'a str,
    bytes: &'a [u8],
    pos: usize,
    tokens: Vec<Token>,
    options: LexerOptions,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, options: LexerOptions) -> Lexer<'a> {
        Lexer {
            source,
            bytes: source.as_bytes(),
            pos: 0,
            tokens: Vec::new(),
            options,
        }
    }

    /// Scans the whole input, returning the complete token stream or the
    /// first lexical error.
    pub fn tokenize(source: &str, options: LexerOptions) -> Result<TokenStream> {
        let mut lexer = Lexer::new(source, options);
        lexer.run()?;
        let eof_pos = lexer.pos;
        lexer.tokens.push(Token::eof(eof_pos));
        Ok(TokenStream::new(lexer.tokens, source.to_string()))
    }

    fn run(&mut self) -> Result<()> {
        self.skip_whitespace();
        while !self.is_eof() {
            self.scan_token()?;
            self.skip_whitespace();
        }
        Ok(())
    }

    fn is_eof(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn current(&self) -> u8 {
        self.bytes[self.pos]
    }

    fn peek(&self, n: usize) -> Option<u8> {
        self.bytes.get(self.pos + n).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(b) = self.bytes.get(self.pos) {
            match b {
                b' ' | b'\n' | b'\r' | b'\t' | 0x0b | 0x0c => self.pos += 1,
                _ => break,
            }
        }
    }

    fn error(&self, message: impl std::fmt::Display, position: usize) -> eyre::Report {
        Error::syntax_at(message, self.source, position).into()
    }

    fn push(&mut self, ty: TokenType, value: String, position: usize) {
        self.tokens.push(Token {
            ty,
            value,
            position,
            keyword: None,
        });
    }

    fn scan_token(&mut self) -> Result<()> {
        let start = self.pos;
        let b = self.current();
        match b {
            b'-' if self.peek(1) == Some(b'-') => {
                self.skip_line_comment();
                Ok(())
            }
            b'/' if self.peek(1) == Some(b'*') => self.skip_block_comment(),
            b'\'' => self.scan_string(start, StringKind::plain(self.options)),
            b'"' => self.scan_quoted_identifier(),
            b'b' | b'B' if self.peek(1) == Some(b'\'') => {
                self.pos += 1;
                self.scan_string(start, StringKind::Binary)
            }
            b'x' | b'X' if self.peek(1) == Some(b'\'') => {
                self.pos += 1;
                self.scan_string(start, StringKind::Hex)
            }
            b'e' | b'E' if self.peek(1) == Some(b'\'') => {
                self.pos += 1;
                self.scan_string(start, StringKind::Escaped)
            }
            b'n' | b'N' if self.peek(1) == Some(b'\'') => {
                self.pos += 1;
                let kind = if self.options.standard_conforming_strings {
                    StringKind::Nchar
                } else {
                    StringKind::NcharEscaped
                };
                self.scan_string(start, kind)
            }
            b'u' | b'U'
                if self.peek(1) == Some(b'&')
                    && matches!(self.peek(2), Some(b'\'') | Some(b'"')) =>
            {
                Err(self.error("Strings with Unicode escapes are not supported", start))
            }
            b'$' => self.scan_dollar(),
            b':' => self.scan_colon(),
            b'.' => {
                if self.peek(1).is_some_and(|c| c.is_ascii_digit()) {
                    self.scan_number()
                } else if self.peek(1) == Some(b'.') {
                    Err(self.error("Unexpected '..'", start))
                } else {
                    self.pos += 1;
                    self.push(TokenType::SPECIAL_CHAR, ".".into(), start);
                    Ok(())
                }
            }
            b'0'..=b'9' => self.scan_number(),
            _ if is_ident_start(b) => {
                self.scan_identifier();
                Ok(())
            }
            _ if CHARS_OPERATOR.contains(&b) => self.scan_operator(),
            b',' | b'(' | b')' | b'[' | b']' | b';' => {
                self.pos += 1;
                self.push(TokenType::SPECIAL_CHAR, (b as char).to_string(), start);
                Ok(())
            }
            _ => {
                let ch = self.source[start..].chars().next().unwrap_or('\0');
                Err(self.error(format!("Unexpected '{ch}'"), start))
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while let Some(b) = self.bytes.get(self.pos) {
            if *b == b'\n' || *b == b'\r' {
                break;
            }
            self.pos += 1;
        }
    }

    /// Block comments nest, matching the server's lexer.
    fn skip_block_comment(&mut self) -> Result<()> {
        let start = self.pos;
        self.pos += 2;
        let mut depth = 1usize;
        while depth > 0 {
            if self.pos + 1 >= self.bytes.len() {
                return Err(self.error("Unterminated /* comment", start));
            }
            match (self.bytes[self.pos], self.bytes[self.pos + 1]) {
                (b'/', b'*') => {
                    depth += 1;
                    self.pos += 2;
                }
                (b'*', b'/') => {
                    depth -= 1;
                    self.pos += 2;
                }
                _ => self.pos += 1,
            }
        }
        Ok(())
    }

    fn scan_identifier(&mut self) {
        let start = self.pos;
        while let Some(&b) = self.bytes.get(self.pos) {
            if is_ident_cont(b) {
                self.pos += 1;
            } else {
                break;
            }
        }
        let folded = self.source[start..self.pos].to_ascii_lowercase();
        match Keyword::lookup(&folded) {
            Some(kw) => self.tokens.push(Token {
                ty: TokenType::for_keyword(kw),
                value: folded,
                position: start,
                keyword: Some(kw),
            }),
            None => self.push(TokenType::IDENTIFIER, folded, start),
        }
    }

    fn scan_quoted_identifier(&mut self) -> Result<()> {
        let start = self.pos;
        self.pos += 1;
        let mut value = String::new();
        loop {
            match self.bytes.get(self.pos) {
                None => return Err(self.error("Unterminated quoted identifier", start)),
                Some(b'"') => {
                    if self.peek(1) == Some(b'"') {
                        value.push('"');
                        self.pos += 2;
                    } else {
                        self.pos += 1;
                        break;
                    }
                }
                Some(_) => {
                    let ch = self.source[self.pos..].chars().next().ok_or_else(|| {
                        self.error("Unterminated quoted identifier", start)
                    })?;
                    value.push(ch);
                    self.pos += ch.len_utf8();
                }
            }
        }
        if value.is_empty() {
            return Err(self.error("Zero-length quoted identifier", start));
        }
        self.push(TokenType::IDENTIFIER, value, start);
        Ok(())
    }

    fn scan_colon(&mut self) -> Result<()> {
        let start = self.pos;
        match self.peek(1) {
            Some(b':') => {
                self.pos += 2;
                self.push(TokenType::TYPECAST, "::".into(), start);
            }
            Some(b'=') => {
                self.pos += 2;
                self.push(TokenType::COLON_EQUALS, ":=".into(), start);
            }
            Some(b) if is_ident_start(b) => {
                self.pos += 1;
                let name_start = self.pos;
                while let Some(&b) = self.bytes.get(self.pos) {
                    if is_ident_cont(b) {
                        self.pos += 1;
                    } else {
                        break;
                    }
                }
                let name = self.source[name_start..self.pos].to_string();
                self.push(TokenType::NAMED_PARAM, name, start);
            }
            _ => {
                self.pos += 1;
                self.push(TokenType::SPECIAL_CHAR, ":".into(), start);
            }
        }
        Ok(())
    }

    fn scan_dollar(&mut self) -> Result<()> {
        let start = self.pos;
        match self.peek(1) {
            Some(b) if b.is_ascii_digit() => {
                self.pos += 1;
                let digits_start = self.pos;
                while self.bytes.get(self.pos).is_some_and(u8::is_ascii_digit) {
                    self.pos += 1;
                }
                if self.bytes.get(self.pos).is_some_and(|&b| is_ident_cont(b)) {
                    let junk_end = self.ident_end(self.pos);
                    return Err(self.error(
                        format!(
                            "Trailing junk after positional parameter: '{}'",
                            &self.source[start..junk_end]
                        ),
                        start,
                    ));
                }
                let value = self.source[digits_start..self.pos].to_string();
                self.push(TokenType::POSITIONAL_PARAM, value, start);
                Ok(())
            }
            _ => self.scan_dollar_quoted(),
        }
    }

    fn scan_dollar_quoted(&mut self) -> Result<()> {
        let start = self.pos;
        let mut end = self.pos + 1;
        if self.bytes.get(end).is_some_and(|&b| is_ident_start(b)) {
            // The tag cannot contain '$': the first one ends it.
            while self.bytes.get(end).is_some_and(|&b| is_dollar_tag_cont(b)) {
                end += 1;
            }
        }
        if self.bytes.get(end) != Some(&b'$') {
            return Err(self.error("Unexpected '$'", start));
        }
        // delimiter includes both dollar signs: $tag$
        let delimiter = &self.source[start..=end];
        let content_start = end + 1;
        match self.source[content_start..].find(delimiter) {
            Some(offset) => {
                let value = self.source[content_start..content_start + offset].to_string();
                self.push(TokenType::STRING, value, start);
                self.pos = content_start + offset + delimiter.len();
                Ok(())
            }
            None => Err(self.error("Unterminated dollar-quoted string", start)),
        }
    }

    fn ident_end(&self, mut idx: usize) -> usize {
        while self.bytes.get(idx).is_some_and(|&b| is_ident_cont(b)) {
            idx += 1;
        }
        idx
    }

    fn scan_number(&mut self) -> Result<()> {
        let start = self.pos;
        let mut pure_digits = true;

        if self.current() == b'0'
            && matches!(
                self.peek(1),
                Some(b'b') | Some(b'B') | Some(b'o') | Some(b'O') | Some(b'x') | Some(b'X')
            )
            && self.radix_digit_follows()
        {
            let radix_check: fn(u8) -> bool = match self.peek(1) {
                Some(b'b') | Some(b'B') => |b| b == b'0' || b == b'1',
                Some(b'o') | Some(b'O') => |b| (b'0'..=b'7').contains(&b),
                _ => |b: u8| b.is_ascii_hexdigit(),
            };
            self.pos += 2;
            self.consume_digit_run(radix_check);
            pure_digits = false;
        } else {
            if self.current() != b'.' {
                self.consume_digit_run(|b| b.is_ascii_digit());
            }
            if self.bytes.get(self.pos) == Some(&b'.') && self.peek(1) != Some(b'.') {
                pure_digits = false;
                self.pos += 1;
                if self.bytes.get(self.pos).is_some_and(u8::is_ascii_digit) {
                    self.consume_digit_run(|b| b.is_ascii_digit());
                }
            }
            if matches!(self.bytes.get(self.pos), Some(b'e') | Some(b'E')) {
                let mut exp_idx = self.pos + 1;
                if matches!(self.bytes.get(exp_idx), Some(b'+') | Some(b'-')) {
                    exp_idx += 1;
                }
                if self.bytes.get(exp_idx).is_some_and(u8::is_ascii_digit) {
                    pure_digits = false;
                    self.pos = exp_idx;
                    self.consume_digit_run(|b| b.is_ascii_digit());
                }
            }
        }

        if self.bytes.get(self.pos).is_some_and(|&b| is_ident_cont(b)) {
            let junk_end = self.ident_end(self.pos);
            return Err(self.error(
                format!(
                    "Trailing junk after numeric literal: '{}'",
                    &self.source[start..junk_end]
                ),
                start,
            ));
        }

        let text = &self.source[start..self.pos];
        let pure_digits = pure_digits && text.bytes().all(|b| b.is_ascii_digit());
        let ty = if pure_digits {
            TokenType::INTEGER
        } else {
            TokenType::FLOAT
        };
        self.push(ty, text.to_string(), start);
        Ok(())
    }

    /// Whether a radix prefix at the current position is followed by at
    /// least one valid digit (otherwise `0x` lexes as `0` plus junk).
    fn radix_digit_follows(&self) -> bool {
        let first = match self.peek(2) {
            Some(b'_') => self.peek(3),
            other => other,
        };
        let Some(first) = first else { return false };
        match self.peek(1) {
            Some(b'b') | Some(b'B') => first == b'0' || first == b'1',
            Some(b'o') | Some(b'O') => (b'0'..=b'7').contains(&first),
            _ => first.is_ascii_hexdigit(),
        }
    }

    /// Consumes `digit (_? digit)*`; an underscore is only eaten when a
    /// digit follows, so trailing junk detection still fires on `1_`.
    fn consume_digit_run(&mut self, is_digit: fn(u8) -> bool) {
        while let Some(&b) = self.bytes.get(self.pos) {
            if is_digit(b) {
                self.pos += 1;
            } else if b == b'_' && self.peek(1).is_some_and(|n| is_digit(n)) {
                self.pos += 2;
            } else {
                break;
            }
        }
    }

    fn scan_operator(&mut self) -> Result<()> {
        let start = self.pos;
        let mut len = 0usize;
        while self
            .bytes
            .get(start + len)
            .is_some_and(|b| CHARS_OPERATOR.contains(b))
        {
            len += 1;
        }
        let run = &self.bytes[start..start + len];

        // an embedded comment opener ends the operator
        if let Some(cut) = find_subslice(run, b"--").filter(|&c| c > 0) {
            len = len.min(cut);
        }
        if let Some(cut) = find_subslice(run, b"/*").filter(|&c| c > 0) {
            len = len.min(cut);
        }

        // a trailing run of + or - only stays if a non-standard operator
        // character appears somewhere before it
        if len > 1 && matches!(run[len - 1], b'+' | b'-') {
            let has_non_standard = run[..len - 1]
                .iter()
                .any(|b| CHARS_NON_STANDARD.contains(b));
            if !has_non_standard {
                while len > 1 && matches!(run[len - 1], b'+' | b'-') {
                    len -= 1;
                }
            }
        }

        let op = &self.source[start..start + len];
        self.pos = start + len;

        if len == 1 && CHARS_SPECIAL.contains(&run[0]) {
            self.push(TokenType::SPECIAL_CHAR, op.to_string(), start);
            return Ok(());
        }
        if len == 2 {
            let ty = match (run[0], run[1]) {
                (b'=', b'>') => Some(TokenType::EQUALS_GREATER),
                (b'<', b'=') | (b'>', b'=') | (b'!', b'=') => Some(TokenType::INEQUALITY),
                (b'<', b'>') => Some(TokenType::INEQUALITY),
                _ => None,
            };
            if let Some(ty) = ty {
                self.push(ty, op.to_string(), start);
                return Ok(());
            }
        }
        self.push(TokenType::OPERATOR, op.to_string(), start);
        Ok(())
    }

    fn scan_string(&mut self, token_start: usize, kind: StringKind) -> Result<()> {
        let mut value: Vec<u8> = Vec::new();
        loop {
            self.read_quoted_segment(token_start, kind, &mut value)?;
            match self.string_continuation() {
                Some(next_quote) => self.pos = next_quote,
                None => break,
            }
        }
        let value = String::from_utf8(value)
            .map_err(|_| self.error("Invalid byte sequence in string literal", token_start))?;
        self.push(kind.token_type(), value, token_start);
        Ok(())
    }

    /// Reads one `'...'` segment starting at the current position (which
    /// must be the opening quote), appending processed bytes to `out`.
    fn read_quoted_segment(
        &mut self,
        token_start: usize,
        kind: StringKind,
        out: &mut Vec<u8>,
    ) -> Result<()> {
        debug_assert_eq!(self.bytes.get(self.pos), Some(&b'\''));
        self.pos += 1;
        let escapes = kind.processes_escapes();
        let doubling = kind.processes_doubling();
        let mut pending_surrogate: Option<(u32, usize)> = None;
        loop {
            match self.bytes.get(self.pos).copied() {
                None => return Err(self.error("Unterminated string literal", token_start)),
                Some(b'\'') => {
                    if doubling && self.peek(1) == Some(b'\'') {
                        if let Some((_, at)) = pending_surrogate {
                            return Err(self.error("Unfinished Unicode surrogate pair", at));
                        }
                        out.push(b'\'');
                        self.pos += 2;
                    } else {
                        if let Some((_, at)) = pending_surrogate {
                            return Err(self.error("Unfinished Unicode surrogate pair", at));
                        }
                        self.pos += 1;
                        return Ok(());
                    }
                }
                Some(b'\\') if escapes => {
                    self.read_escape_sequence(out, &mut pending_surrogate)?;
                }
                Some(b) => {
                    if let Some((_, at)) = pending_surrogate {
                        return Err(self.error("Unfinished Unicode surrogate pair", at));
                    }
                    out.push(b);
                    self.pos += 1;
                }
            }
        }
    }

    fn read_escape_sequence(
        &mut self,
        out: &mut Vec<u8>,
        pending_surrogate: &mut Option<(u32, usize)>,
    ) -> Result<()> {
        let escape_pos = self.pos;
        self.pos += 1;
        let Some(b) = self.bytes.get(self.pos).copied() else {
            // lone backslash right before the closing quote cannot happen:
            // \' is an escaped quote, so the string would be unterminated
            out.push(b'\\');
            return Ok(());
        };
        let is_unicode = b == b'u' || b == b'U';
        if !is_unicode {
            if let Some((_, at)) = *pending_surrogate {
                return Err(self.error("Unfinished Unicode surrogate pair", at));
            }
        }
        match b {
            b'b' => {
                out.push(0x08);
                self.pos += 1;
            }
            b'f' => {
                out.push(0x0c);
                self.pos += 1;
            }
            b'n' => {
                out.push(b'\n');
                self.pos += 1;
            }
            b'r' => {
                out.push(b'\r');
                self.pos += 1;
            }
            b't' => {
                out.push(b'\t');
                self.pos += 1;
            }
            b'v' => {
                out.push(0x0b);
                self.pos += 1;
            }
            b'x' => {
                self.pos += 1;
                let mut hex = 0u32;
                let mut digits = 0;
                while digits < 2 {
                    match self.bytes.get(self.pos) {
                        Some(&d) if d.is_ascii_hexdigit() => {
                            hex = hex * 16 + hex_value(d);
                            digits += 1;
                            self.pos += 1;
                        }
                        _ => break,
                    }
                }
                if digits == 0 {
                    // \x with no digits keeps the x, as the server does
                    out.push(b'x');
                } else {
                    out.push(hex as u8);
                }
            }
            b'0'..=b'7' => {
                let mut oct = 0u32;
                let mut digits = 0;
                while digits < 3 {
                    match self.bytes.get(self.pos) {
                        Some(&d) if (b'0'..=b'7').contains(&d) => {
                            oct = oct * 8 + u32::from(d - b'0');
                            digits += 1;
                            self.pos += 1;
                        }
                        _ => break,
                    }
                }
                out.push((oct & 0xff) as u8);
            }
            b'u' | b'U' => {
                let expected = if b == b'u' { 4 } else { 8 };
                self.pos += 1;
                let mut code = 0u32;
                for _ in 0..expected {
                    match self.bytes.get(self.pos) {
                        Some(&d) if d.is_ascii_hexdigit() => {
                            code = code * 16 + hex_value(d);
                            self.pos += 1;
                        }
                        _ => {
                            return Err(self.error("Invalid Unicode escape value", escape_pos));
                        }
                    }
                }
                self.append_codepoint(code, escape_pos, out, pending_surrogate)?;
            }
            _ => {
                // strip the backslash, keep the character
                out.push(b);
                self.pos += 1;
            }
        }
        Ok(())
    }

    fn append_codepoint(
        &self,
        code: u32,
        escape_pos: usize,
        out: &mut Vec<u8>,
        pending_surrogate: &mut Option<(u32, usize)>,
    ) -> Result<()> {
        let resolved = match (*pending_surrogate, code) {
            (None, 0xd800..=0xdbff) => {
                *pending_surrogate = Some((code, escape_pos));
                return Ok(());
            }
            (None, 0xdc00..=0xdfff) => {
                return Err(self.error("Invalid Unicode surrogate pair", escape_pos));
            }
            (None, other) => other,
            (Some((high, _)), 0xdc00..=0xdfff) => {
                *pending_surrogate = None;
                0x10000 + ((high - 0xd800) << 10) + (code - 0xdc00)
            }
            (Some(_), _) => {
                return Err(self.error("Invalid Unicode surrogate pair", escape_pos));
            }
        };
        let ch = char::from_u32(resolved)
            .ok_or_else(|| self.error("Invalid Unicode escape value", escape_pos))?;
        let mut buf = [0u8; 4];
        out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
        Ok(())
    }

    /// Checks for SQL string continuation: whitespace containing at least
    /// one newline (line comments allowed) followed by another quoted
    /// segment. Returns the position of the next opening quote.
    fn string_continuation(&self) -> Option<usize> {
        let mut idx = self.pos;
        // horizontal whitespace, then an optional line comment
        while matches!(self.bytes.get(idx), Some(b' ') | Some(b'\t') | Some(&0x0b) | Some(&0x0c)) {
            idx += 1;
        }
        if self.bytes.get(idx) == Some(&b'-') && self.bytes.get(idx + 1) == Some(&b'-') {
            while !matches!(self.bytes.get(idx), None | Some(b'\n') | Some(b'\r')) {
                idx += 1;
            }
        }
        if !matches!(self.bytes.get(idx), Some(b'\n') | Some(b'\r')) {
            return None;
        }
        idx += 1;
        loop {
            match self.bytes.get(idx) {
                Some(b' ') | Some(b'\t') | Some(b'\n') | Some(b'\r') | Some(&0x0b)
                | Some(&0x0c) => idx += 1,
                Some(b'-') if self.bytes.get(idx + 1) == Some(&b'-') => {
                    while !matches!(self.bytes.get(idx), None | Some(b'\n') | Some(b'\r')) {
                        idx += 1;
                    }
                    match self.bytes.get(idx) {
                        Some(_) => idx += 1,
                        None => return None,
                    }
                }
                Some(b'\'') => return Some(idx),
                _ => return None,
            }
        }
    }
}

/// Literal flavor: controls quote doubling, escape processing and the
/// resulting token type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StringKind {
    Standard,
    Escaped,
    Binary,
    Hex,
    Nchar,
    NcharEscaped,
}

impl StringKind {
    fn plain(options: LexerOptions) -> StringKind {
        if options.standard_conforming_strings {
            StringKind::Standard
        } else {
            StringKind::Escaped
        }
    }

    fn token_type(self) -> TokenType {
        match self {
            StringKind::Standard | StringKind::Escaped => TokenType::STRING,
            StringKind::Binary => TokenType::BINARY_STRING,
            StringKind::Hex => TokenType::HEX_STRING,
            StringKind::Nchar | StringKind::NcharEscaped => TokenType::NCHAR_STRING,
        }
    }

    fn processes_escapes(self) -> bool {
        matches!(self, StringKind::Escaped | StringKind::NcharEscaped)
    }

    /// Binary and hex literals take their content verbatim; `''` inside
    /// them is two adjacent literals, not a doubled quote.
    fn processes_doubling(self) -> bool {
        !matches!(self, StringKind::Binary | StringKind::Hex)
    }
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b >= 0x80
}

fn is_ident_cont(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || b >= 0x80
}

fn is_dollar_tag_cont(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b >= 0x80
}

fn hex_value(b: u8) -> u32 {
    match b {
        b'0'..=b'9' => u32::from(b - b'0'),
        b'a'..=b'f' => u32::from(b - b'a' + 10),
        _ => u32::from(b - b'A' + 10),
    }
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn lex(sql: &str) -> Vec<Token> {
        let stream = Lexer::tokenize(sql, LexerOptions::default()).expect("lexing should succeed");
        let mut tokens = Vec::new();
        let mut stream = stream;
        while !stream.is_eof() {
            tokens.push(stream.next());
        }
        tokens
    }

    fn lex_err(sql: &str) -> Error {
        let err = Lexer::tokenize(sql, LexerOptions::default()).unwrap_err();
        err.downcast_ref::<Error>().cloned().expect("typed error")
    }

    #[test]
    fn identifiers_fold_to_lowercase_and_resolve_keywords() {
        let tokens = lex("SeLeCt Foo");
        assert_eq!(tokens[0].keyword, Some(Keyword::Select));
        assert_eq!(tokens[0].value, "select");
        assert_eq!(tokens[1].ty, TokenType::IDENTIFIER);
        assert_eq!(tokens[1].value, "foo");
    }

    #[test]
    fn quoted_identifiers_keep_case_and_doubled_quotes() {
        let tokens = lex(r#""Foo""Bar""#);
        assert_eq!(tokens[0].ty, TokenType::IDENTIFIER);
        assert_eq!(tokens[0].value, "Foo\"Bar");
        assert!(matches!(lex_err(r#""""#), Error::Syntax { message, .. }
            if message.contains("Zero-length")));
    }

    #[test]
    fn standard_strings_double_quotes_and_ignore_backslashes() {
        let tokens = lex(r"'it''s \n here'");
        assert_eq!(tokens[0].ty, TokenType::STRING);
        assert_eq!(tokens[0].value, r"it's \n here");
    }

    #[test]
    fn escaped_strings_process_c_style_escapes() {
        let tokens = lex(r"e'a\tb\x41\101и'");
        assert_eq!(tokens[0].value, "a\tbAA\u{438}");
    }

    #[test]
    fn surrogate_pairs_combine() {
        let tokens = lex(r"e'😊'");
        assert_eq!(tokens[0].value, "\u{1f60a}");
        assert!(matches!(lex_err(r"e'\ud83d x'"), Error::Syntax { message, .. }
            if message.contains("surrogate")));
    }

    #[test]
    fn string_continuation_requires_newline() {
        let tokens = lex("'foo'\n'bar'");
        assert_eq!(tokens.len(), 1, "continuation should merge literals");
        assert_eq!(tokens[0].value, "foobar");

        let tokens = lex("'foo' 'bar'");
        assert_eq!(tokens.len(), 2, "no newline means two literals");
    }

    #[test]
    fn string_continuation_skips_line_comments() {
        let tokens = lex("'foo' -- comment\n  'bar'");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].value, "foobar");
    }

    #[test]
    fn dollar_quoted_strings() {
        let tokens = lex("$$plain$$ $tag$has $$ inside$tag$");
        assert_eq!(tokens[0].ty, TokenType::STRING);
        assert_eq!(tokens[0].value, "plain");
        assert_eq!(tokens[1].value, "has $$ inside");
    }

    #[test]
    fn numeric_literals() {
        let tokens = lex("42 3.14 .5 5. 1e10 1.5e-3 1_000_000 0x1F 0b10_1 0o777");
        let types: Vec<TokenType> = tokens.iter().map(|t| t.ty).collect();
        assert_eq!(
            types,
            vec![
                TokenType::INTEGER,
                TokenType::FLOAT,
                TokenType::FLOAT,
                TokenType::FLOAT,
                TokenType::FLOAT,
                TokenType::FLOAT,
                TokenType::FLOAT,
                TokenType::FLOAT,
                TokenType::FLOAT,
                TokenType::FLOAT,
            ]
        );
        assert_eq!(tokens[0].value, "42");
        assert_eq!(tokens[6].value, "1_000_000");
    }

    #[test]
    fn trailing_junk_after_number_is_an_error() {
        assert!(matches!(lex_err("123abc"), Error::Syntax { message, .. }
            if message.contains("Trailing junk") && message.contains("123abc")));
        assert!(matches!(lex_err("1__2"), Error::Syntax { .. }));
    }

    #[test]
    fn five_dot_dot_is_number_then_error() {
        assert!(matches!(lex_err("5..6"), Error::Syntax { message, .. }
            if message.contains("'..'")));
    }

    #[test]
    fn parameters() {
        let tokens = lex("$1 :name");
        assert_eq!(tokens[0].ty, TokenType::POSITIONAL_PARAM);
        assert_eq!(tokens[0].value, "1");
        assert_eq!(tokens[1].ty, TokenType::NAMED_PARAM);
        assert_eq!(tokens[1].value, "name");
        assert!(matches!(lex_err("$1abc"), Error::Syntax { message, .. }
            if message.contains("positional parameter")));
    }

    #[test]
    fn colon_forms() {
        let tokens = lex("a::int b := c");
        assert_eq!(tokens[1].ty, TokenType::TYPECAST);
        assert_eq!(tokens[4].ty, TokenType::COLON_EQUALS);
    }

    #[test]
    fn operator_trailing_plus_minus_trimming() {
        // standard chars only: trailing +/- trimmed back
        let tokens = lex("a =- b");
        assert_eq!(tokens[1].ty, TokenType::SPECIAL_CHAR);
        assert_eq!(tokens[1].value, "=");
        assert_eq!(tokens[2].ty, TokenType::SPECIAL_CHAR);
        assert_eq!(tokens[2].value, "-");

        // a non-standard char anywhere keeps the trailing minus
        let tokens = lex("a @- b");
        assert_eq!(tokens[1].ty, TokenType::OPERATOR);
        assert_eq!(tokens[1].value, "@-");
    }

    #[test]
    fn inequality_and_arrow_operators() {
        let tokens = lex("<= >= != <> => ->> ||");
        assert_eq!(tokens[0].ty, TokenType::INEQUALITY);
        assert_eq!(tokens[1].ty, TokenType::INEQUALITY);
        assert_eq!(tokens[2].ty, TokenType::INEQUALITY);
        assert_eq!(tokens[3].ty, TokenType::INEQUALITY);
        assert_eq!(tokens[4].ty, TokenType::EQUALS_GREATER);
        assert_eq!(tokens[5].ty, TokenType::OPERATOR);
        assert_eq!(tokens[5].value, "->>");
        assert_eq!(tokens[6].ty, TokenType::OPERATOR);
        assert_eq!(tokens[6].value, "||");
    }

    #[test]
    fn operator_cut_at_embedded_comment() {
        let tokens = lex("a <--1");
        // '<--' cuts at the embedded line comment, leaving '<'
        assert_eq!(tokens[1].value, "<");
        assert_eq!(tokens.len(), 2, "rest of the line is a comment");
    }

    #[test]
    fn nested_block_comments() {
        let tokens = lex("1 /* outer /* inner */ still out */ 2");
        assert_eq!(tokens.len(), 2);
        assert!(matches!(lex_err("/* open"), Error::Syntax { message, .. }
            if message.contains("Unterminated /*")));
    }

    #[test]
    fn prefixed_string_literals() {
        let tokens = lex("b'0101' x'1f' n'text'");
        assert_eq!(tokens[0].ty, TokenType::BINARY_STRING);
        assert_eq!(tokens[1].ty, TokenType::HEX_STRING);
        assert_eq!(tokens[2].ty, TokenType::NCHAR_STRING);
    }

    #[test]
    fn non_conforming_strings_process_backslashes() {
        let options = LexerOptions {
            standard_conforming_strings: false,
        };
        let mut stream = Lexer::tokenize(r"'a\tb'", options).unwrap();
        assert_eq!(stream.next().value, "a\tb");
    }

    #[test]
    fn token_positions_are_byte_offsets() {
        let tokens = lex("select  foo");
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[1].position, 8);
    }
}
