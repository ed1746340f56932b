use std::ops::Range;

use crate::error::Error;
use crate::modifier::Modifier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    Literal(&'a str),
    Variable {
        /// Raw name, possibly a dotted path (`foo.bar.0`)
        name: &'a str,
        /// Operator written after the first `:` inside braces
        modifier: Option<Modifier<'a>>,
    },
}

/// Splits a template into literal runs and variable references.
#[derive(Debug)]
pub struct Scanner<'a> {
    source: &'a str,
    byte_idx: usize,
    /// End of the last variable or sigil token; where the current scan step began
    scan_start: usize,
    special_vars: &'a [char],
    ignore_errors: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            byte_idx: 0,
            scan_start: 0,
            special_vars: &[],
            ignore_errors: false,
        }
    }

    /// Accept these single characters as names of unbraced variables, e.g. `$?`.
    pub fn with_special_vars(mut self, special_vars: &'a [char]) -> Self {
        self.special_vars = special_vars;
        self
    }

    /// Treat the rest of the input as the name of an unterminated `${` instead of failing.
    pub fn with_ignore_errors(mut self, ignore_errors: bool) -> Self {
        self.ignore_errors = ignore_errors;
        self
    }

    pub fn scan_next(&mut self) -> Result<Option<(Token<'a>, Range<usize>)>, Error> {
        let start = self.byte_idx;
        if start >= self.source.len() {
            return Ok(None);
        }

        match memchr::memchr(b'$', &self.source.as_bytes()[start..]) {
            Some(0) => {
                let token = self.parse_variable(start)?;
                self.scan_start = self.byte_idx;
                Ok(Some((token, start..self.byte_idx)))
            }
            Some(p) => {
                self.byte_idx = start + p;
                Ok(Some((Token::Literal(&self.source[start..start + p]), start..start + p)))
            }
            None => {
                self.byte_idx = self.source.len();
                Ok(Some((Token::Literal(&self.source[start..]), start..self.source.len())))
            }
        }
    }

    fn parse_variable(&mut self, start_idx: usize) -> Result<Token<'a>, Error> {
        // We are at '$'
        let after = start_idx + 1;
        match self.source[after..].chars().next() {
            Some('{') => self.parse_braced_variable(start_idx),
            Some(c) if self.special_vars.contains(&c) => {
                self.byte_idx = after + c.len_utf8();
                Ok(Token::Variable {
                    name: &self.source[after..self.byte_idx],
                    modifier: None,
                })
            }
            Some(c) if is_name_char(c) => Ok(self.parse_simple_variable(start_idx)),
            _ => {
                // Not a variable, return literal '$'
                self.byte_idx = after;
                Ok(Token::Literal(&self.source[start_idx..after]))
            }
        }
    }

    fn parse_simple_variable(&mut self, start_idx: usize) -> Token<'a> {
        let name_start = start_idx + 1;
        let len = self.source[name_start..]
            .bytes()
            .position(|b| !is_name_char(char::from(b)))
            .unwrap_or(self.source.len() - name_start);

        self.byte_idx = name_start + len;
        Token::Variable {
            name: &self.source[name_start..self.byte_idx],
            modifier: None,
        }
    }

    fn parse_braced_variable(&mut self, start_idx: usize) -> Result<Token<'a>, Error> {
        let inner_start = start_idx + 2; // skip '${'
        let content = match memchr::memchr(b'}', &self.source.as_bytes()[inner_start..]) {
            Some(p) => {
                self.byte_idx = inner_start + p + 1; // skip '}'
                &self.source[inner_start..inner_start + p]
            }
            None if self.ignore_errors => {
                self.byte_idx = self.source.len();
                &self.source[inner_start..]
            }
            None => {
                return Err(Error::UnterminatedToken {
                    position: self.scan_start,
                })
            }
        };

        if content.is_empty() {
            return Ok(Token::Literal("${}"));
        }

        Ok(match content.split_once(':') {
            Some((name, modifier)) => Token::Variable {
                name,
                modifier: Modifier::parse(modifier),
            },
            None => Token::Variable {
                name: content,
                modifier: None,
            },
        })
    }

    /// Plain placeholder scan: only `${path}` and `%{path}` are recognized, where
    /// path is a non-empty run of `[A-Za-z0-9._-]`. Everything else, including
    /// modifiers, unbraced names and unterminated braces, comes back as literal text.
    pub fn scan_placeholder(&mut self) -> Option<(Token<'a>, Range<usize>)> {
        let start = self.byte_idx;
        if start >= self.source.len() {
            return None;
        }

        let bytes = self.source.as_bytes();
        let mut from = start;
        while let Some(p) = memchr::memchr2(b'$', b'%', &bytes[from..]) {
            let sigil = from + p;
            if let Some(end) = self.placeholder_end(sigil) {
                if sigil > start {
                    self.byte_idx = sigil;
                    return Some((Token::Literal(&self.source[start..sigil]), start..sigil));
                }
                self.byte_idx = end + 1;
                let name = &self.source[sigil + 2..end];
                return Some((Token::Variable { name, modifier: None }, sigil..end + 1));
            }
            from = sigil + 1;
        }

        self.byte_idx = self.source.len();
        Some((Token::Literal(&self.source[start..]), start..self.source.len()))
    }

    /// Byte index of the `}` closing a placeholder opened at `sigil`.
    fn placeholder_end(&self, sigil: usize) -> Option<usize> {
        let bytes = self.source.as_bytes();
        if bytes.get(sigil + 1) != Some(&b'{') {
            return None;
        }
        let inner = sigil + 2;
        let len = bytes[inner..]
            .iter()
            .position(|&b| !(b.is_ascii_alphanumeric() || matches!(b, b'.' | b'-' | b'_')))?;
        (len > 0 && bytes[inner + len] == b'}').then_some(inner + len)
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
