use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::io::BufRead;

/// Whitespace-delimited token reader over a line-oriented input.
///
/// Tokens left over on a line stay queued for the next read, so a user may
/// answer several prompts on one line. `discard_line` drops whatever remains
/// of the current line.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, reading more lines as needed. None at end of input.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            // Raw bytes, so a stray non-UTF-8 byte in a name is replaced, not fatal
            let mut line = Vec::new();
            let read = self
                .reader
                .read_until(b'\n', &mut line)
                .context("Failed to read input")?;
            if read == 0 {
                return Ok(None);
            }

            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_string),
            );
        }
    }

    /// Forget the unread remainder of the current line
    pub fn discard_line(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_tokens_across_lines() {
        let mut reader = TokenReader::new(Cursor::new("Ada Lovelace\n\n  S1 \t 90\n"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("Ada"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("Lovelace"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("S1"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("90"));
        assert_eq!(reader.next_token().unwrap(), None);
    }

    #[test]
    fn test_discard_line_drops_remainder() {
        let mut reader = TokenReader::new(Cursor::new("1 extra junk\n2\n"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("1"));
        reader.discard_line();
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut reader = TokenReader::new(Cursor::new("8"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("8"));
        assert_eq!(reader.next_token().unwrap(), None);
    }

    #[test]
    fn test_latin1_bytes_are_replaced() {
        // "Jos\xe9 Garc\xeda" as Latin-1
        let bytes: &[u8] = b"Jos\xe9 Garc\xeda\n";
        let mut reader = TokenReader::new(Cursor::new(bytes));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("Jos\u{FFFD}"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("Garc\u{FFFD}a"));
        assert_eq!(reader.next_token().unwrap(), None);
    }

    #[test]
    fn test_empty_input() {
        let mut reader = TokenReader::new(Cursor::new(""));
        assert_eq!(reader.next_token().unwrap(), None);
    }
}
