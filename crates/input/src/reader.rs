//! Line-based reader of menu choices.
//!
//! Works over any [`BufRead`], so the binary reads stdin and tests read
//! in-memory buffers.

use std::io::{self, BufRead};

use tracing::debug;

use crate::choice::{parse_choice, ChoiceError, MenuChoice};

/// Reads one menu choice per line.
#[derive(Debug)]
pub struct ChoiceReader<R> {
    input: R,
    line: Vec<u8>,
}

impl<R: BufRead> ChoiceReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: Vec::with_capacity(16),
        }
    }

    /// Read the next line.
    ///
    /// - `Ok(None)`: end of input
    /// - `Ok(Some(Err(_)))`: the line was not a valid option; nothing was consumed
    ///   beyond that line, so the caller can re-prompt
    ///
    /// Bytes that are not UTF-8 decode to U+FFFD and fail to parse like any
    /// other junk line.
    pub fn next_choice(&mut self) -> io::Result<Option<Result<MenuChoice, ChoiceError>>> {
        self.line.clear();
        if self.input.read_until(b'\n', &mut self.line)? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&self.line);
        let parsed = parse_choice(&line);
        debug!(line = line.trim_end(), ?parsed, "read choice");
        Ok(Some(parsed))
    }
}
