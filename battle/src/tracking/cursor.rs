//! Line cursor with bounded look-ahead

/// A line of the log with its 1-based line number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub number: usize,
    pub text: &'a str,
}

/// Walks the lines of a log once, front to back.
///
/// Handlers that need the following lines use [`peek`](Self::peek) and then
/// [`advance`](Self::advance) past what they consumed, so consumed lines are
/// never handled again.
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    /// Index of the next line to hand out
    next: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().collect(),
            next: 0,
        }
    }

    /// Every line of the log, including those already consumed
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    /// Move to the next line and return it
    pub fn next_line(&mut self) -> Option<Line<'a>> {
        let line = self.line_at(self.next)?;
        self.next += 1;
        Some(line)
    }

    /// Look at the n-th line after the current one (`peek(1)` is the next line)
    pub fn peek(&self, n: usize) -> Option<Line<'a>> {
        let offset = n.checked_sub(1)?;
        self.line_at(self.next + offset)
    }

    /// Consume the next line without returning it
    pub fn advance(&mut self) {
        if self.next < self.lines.len() {
            self.next += 1;
        }
    }

    fn line_at(&self, index: usize) -> Option<Line<'a>> {
        self.lines.get(index).copied().map(|text| Line {
            number: index + 1,
            text,
        })
    }
}

impl<'a> Iterator for LineCursor<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_does_not_consume() {
        let mut cursor = LineCursor::new("|start\n|switch|a\n|switch|b\n|turn|1");

        let first = cursor.next_line().unwrap();
        assert_eq!(first, Line { number: 1, text: "|start" });
        assert_eq!(cursor.peek(1).unwrap().text, "|switch|a");
        assert_eq!(cursor.peek(2).unwrap().number, 3);
        assert_eq!(cursor.peek(0), None);

        assert_eq!(cursor.next_line().unwrap().text, "|switch|a");
    }

    #[test]
    fn test_advance_skips_consumed_lines() {
        let mut cursor = LineCursor::new("|-zpower|p1a: Koko\n|move|p1a: Koko|Bloom Doom\n|turn|2");

        cursor.next_line();
        cursor.advance();

        assert_eq!(cursor.next_line().unwrap().text, "|turn|2");
        assert_eq!(cursor.next_line(), None);
        cursor.advance();
        assert_eq!(cursor.peek(1), None);
    }

    #[test]
    fn test_handles_crlf() {
        let cursor = LineCursor::new("|turn|1\r\n|turn|2\r\n");
        assert_eq!(cursor.lines(), &["|turn|1", "|turn|2"]);
    }
}
