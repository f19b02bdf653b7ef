use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Whitespace-delimited tokens from a line-oriented reader.
///
/// Tokens are handed out one at a time, so several answers may share a
/// line and a single answer may sit on a line of its own.
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

    /// Next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn tokens(input: &str) -> Vec<String> {
        let mut reader = TokenReader::new(Cursor::new(input));
        let mut out = Vec::new();
        while let Some(token) = reader.next_token().unwrap() {
            out.push(token);
        }
        out
    }

    #[test]
    fn splits_across_lines_and_blanks() {
        assert_eq!(
            tokens("1 Algebra\n\n  A.Smith\tMath\nISBN-1\n"),
            ["1", "Algebra", "A.Smith", "Math", "ISBN-1"]
        );
    }

    #[test]
    fn last_line_without_newline() {
        assert_eq!(tokens("0"), ["0"]);
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(tokens("").is_empty());
        assert!(tokens("   \n\n").is_empty());
    }
}
