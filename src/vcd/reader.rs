// Copyright (C) 2022 Yehowshua Immanuel
// This program is distributed under both the GPLV3 license
// and the YEHOWSHUA license, both of which can be found at
// the root of the folder containing the sources for this program.
use std::fmt;
use std::io::BufRead;
use std::ops::Range;

use super::error::VcdResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line(pub usize);
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word(pub usize);
/// Position of a word in the input, both 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor(pub Line, pub Word);

impl Cursor {
    pub fn line(&self) -> usize {
        let Cursor(Line(line), _) = self;
        *line
    }

    pub fn word(&self) -> usize {
        let Cursor(_, Word(word)) = self;
        *word
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, word {}", self.line(), self.word())
    }
}

/// Hands out the whitespace separated words of a line oriented source.
///
/// Only the current line is held in memory. Words are byte ranges into that
/// line, so a word can be partially consumed and its tail handed back with
/// [`WordReader::push_back`] without copying.
pub(super) struct WordReader<R> {
    reader: R,
    line_buf: String,
    curr_line: usize,
    curr_word: usize,
    // byte offset in `line_buf` where the search for the next word resumes
    scan_pos: usize,
    pending: Option<(Range<usize>, Cursor)>,
    eof: bool,
}

impl<R: BufRead> WordReader<R> {
    pub(super) fn new(reader: R) -> WordReader<R> {
        WordReader {
            reader,
            line_buf: String::new(),
            curr_line: 0,
            curr_word: 0,
            scan_pos: 0,
            pending: None,
            eof: false,
        }
    }

    /// Pops the front of the queue: a pushed back fragment if there is one,
    /// otherwise the next word of the current line, reading further lines as
    /// needed. Fragments may be empty; words never are.
    pub(super) fn next_word(&mut self) -> VcdResult<Option<(Range<usize>, Cursor)>> {
        if let Some(pending) = self.pending.take() {
            return Ok(Some(pending));
        }

        loop {
            if let Some(span) = self.scan_word() {
                self.curr_word += 1;
                let cursor = Cursor(Line(self.curr_line), Word(self.curr_word));
                return Ok(Some((span, cursor)));
            }

            if self.eof {
                return Ok(None);
            }

            self.line_buf.clear();
            self.scan_pos = 0;
            self.curr_word = 0;

            let bytes_read = self.reader.read_line(&mut self.line_buf)?;
            if bytes_read == 0 {
                self.eof = true;
                return Ok(None);
            }
            self.curr_line += 1;
        }
    }

    fn scan_word(&mut self) -> Option<Range<usize>> {
        let bytes = self.line_buf.as_bytes();
        let rest = bytes.get(self.scan_pos..)?;

        let start = self.scan_pos + rest.iter().position(|b| !b.is_ascii_whitespace())?;
        let end = bytes[start..]
            .iter()
            .position(|b| b.is_ascii_whitespace())
            .map_or(bytes.len(), |len| start + len);

        self.scan_pos = end;
        Some(start..end)
    }

    pub(super) fn word(&self, span: &Range<usize>) -> &str {
        &self.line_buf[span.clone()]
    }

    /// Puts the tail of the word at `span`, skipping its first `consumed`
    /// bytes, back on the front of the queue.
    pub(super) fn push_back(&mut self, span: Range<usize>, consumed: usize, cursor: Cursor) {
        self.pending = Some((span.start + consumed..span.end, cursor));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor as IoCursor;

    fn drain(reader: &mut WordReader<IoCursor<&str>>) -> Vec<(String, Cursor)> {
        let mut words = vec![];
        while let Some((span, cursor)) = reader.next_word().unwrap() {
            words.push((reader.word(&span).to_string(), cursor));
        }
        words
    }

    #[test]
    fn splits_on_any_whitespace_run() {
        let mut reader = WordReader::new(IoCursor::new("$date \t Jan   1\r\n\n  2020 $end\n"));
        let words: Vec<String> = drain(&mut reader).into_iter().map(|(w, _)| w).collect();
        assert_eq!(words, vec!["$date", "Jan", "1", "2020", "$end"]);
    }

    #[test]
    fn cursor_tracks_lines_and_words() {
        let mut reader = WordReader::new(IoCursor::new("a b\n\nc\n"));
        let cursors: Vec<Cursor> = drain(&mut reader).into_iter().map(|(_, c)| c).collect();
        assert_eq!(
            cursors,
            vec![
                Cursor(Line(1), Word(1)),
                Cursor(Line(1), Word(2)),
                Cursor(Line(3), Word(1)),
            ]
        );
    }

    #[test]
    fn pushed_back_fragment_comes_first() {
        let mut reader = WordReader::new(IoCursor::new("b101 #\n"));
        let (span, cursor) = reader.next_word().unwrap().unwrap();
        assert_eq!(reader.word(&span), "b101");

        reader.push_back(span, 1, cursor);
        let (span, again) = reader.next_word().unwrap().unwrap();
        assert_eq!(reader.word(&span), "101");
        assert_eq!(again, cursor);

        let (span, _) = reader.next_word().unwrap().unwrap();
        assert_eq!(reader.word(&span), "#");
        assert!(reader.next_word().unwrap().is_none());
    }

    #[test]
    fn fully_consumed_word_leaves_empty_fragment() {
        let mut reader = WordReader::new(IoCursor::new("#\n"));
        let (span, cursor) = reader.next_word().unwrap().unwrap();
        reader.push_back(span, 1, cursor);
        let (span, _) = reader.next_word().unwrap().unwrap();
        assert!(reader.word(&span).is_empty());
    }
}
