//! Whitespace-token scanning over console lines.
//!
//! Each read consumes one token; a line carrying several tokens feeds
//! several consecutive reads before the console is asked for more input.

use std::collections::VecDeque;

use crate::{
    console::Console,
    diagnostics::{CalcError, Result},
};

pub struct TokenScanner {
    pending: VecDeque<String>,
}

impl TokenScanner {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }

    /// Produces the next token, prompting on `console` until one arrives.
    /// Blank lines are skipped. Yields `None` once input is exhausted.
    pub fn next_token<C: Console>(
        &mut self,
        console: &mut C,
        prompt: &str,
    ) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            match console.read_line(prompt)? {
                Some(line) => {
                    self.pending
                        .extend(line.split_whitespace().map(str::to_owned));
                }
                None => return Ok(None),
            }
        }
    }
}

pub fn parse_real(token: &str) -> Result<f64> {
    token.parse().map_err(|_| CalcError::MalformedInput {
        token: token.to_owned(),
        expected: "a real number",
    })
}

pub fn parse_integer(token: &str) -> Result<i64> {
    token.parse().map_err(|_| CalcError::MalformedInput {
        token: token.to_owned(),
        expected: "an integer",
    })
}
