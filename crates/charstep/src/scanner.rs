//! Whitespace-delimited reading over line-buffered input.
//!
//! Behaves like a `" %c"` / `"%d"` scan: leading whitespace (including
//! newlines) is skipped, and whatever follows the consumed token on the same
//! line stays buffered for the next read.

use std::io::BufRead;
use std::str::FromStr;

use tracing::trace;

use crate::error::{CharstepError, Result};

/// Initial capacity of the line buffer.
const LINE_BUF_LEN: usize = 64;

pub struct Scanner<R> {
    reader: R,
    line: String,
    pos: usize,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::with_capacity(LINE_BUF_LEN),
            pos: 0,
        }
    }

    /// Skips whitespace and returns the next single character.
    pub fn next_char(&mut self) -> Result<char> {
        self.skip_whitespace()?;
        let c = self.line[self.pos..]
            .chars()
            .next()
            .ok_or(CharstepError::EndOfInput)?;
        self.pos += c.len_utf8();
        trace!(%c, "scanned character");

        Ok(c)
    }

    /// Skips whitespace and returns the next run of non-whitespace characters.
    pub fn next_token(&mut self) -> Result<String> {
        self.skip_whitespace()?;
        let rest = &self.line[self.pos..];
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let token = rest[..end].to_string();
        self.pos += end;
        trace!(%token, "scanned token");

        Ok(token)
    }

    /// Parses the next token as `T`, naming `expected` if it does not parse.
    pub fn next_value<T: FromStr>(&mut self, expected: &'static str) -> Result<T> {
        let token = self.next_token()?;
        token
            .parse()
            .map_err(|_| CharstepError::Malformed { expected, token })
    }

    /// Advances past whitespace, pulling new lines as needed, until the
    /// cursor rests on a non-whitespace character.
    fn skip_whitespace(&mut self) -> Result<()> {
        loop {
            let rest = &self.line[self.pos..];
            let trimmed = rest.trim_start();
            self.pos += rest.len() - trimmed.len();

            if self.pos < self.line.len() {
                return Ok(());
            }

            self.line.clear();
            self.pos = 0;
            if self.reader.read_line(&mut self.line)? == 0 {
                return Err(CharstepError::EndOfInput);
            }
        }
    }
}
