// Copyright (C) 2022 Yehowshua Immanuel
// This program is distributed under both the GPLV3 license
// and the YEHOWSHUA license, both of which can be found at
// the root of the folder containing the sources for this program.
use std::io::BufRead;
use std::iter::FusedIterator;

use super::error::{VcdError, VcdResult};
use super::reader::{Cursor, Line, Word, WordReader};
use super::types::{Event, VCD};

mod combinator_atoms;

mod types;

mod metadata;
pub use metadata::parse_date;

mod state_machine;
use state_machine::{advance, State};

mod header;
pub use header::read_header;

/// Lazy sequence of [`Event`]s read from a line oriented source.
///
/// At most one line of input and one partially built event are held at any
/// time. The stream is single pass; after it yields an error it yields
/// nothing more.
pub struct EventStream<R> {
    words: WordReader<R>,
    state: State,
    cursor: Cursor,
    done: bool,
}

pub fn parse<R: BufRead>(reader: R) -> EventStream<R> {
    EventStream {
        words: WordReader::new(reader),
        state: State::Start,
        cursor: Cursor(Line(0), Word(0)),
        done: false,
    }
}

/// Reads the declaration section and returns it along with the stream,
/// which is left just after `$enddefinitions $end`.
pub fn parse_vcd<R: BufRead>(reader: R) -> VcdResult<VCD<R>> {
    let mut events = parse(reader);
    let header = read_header(&mut events)?;

    Ok(VCD { header, events })
}

impl<R: BufRead> EventStream<R> {
    pub fn next_event(&mut self) -> VcdResult<Option<Event>> {
        if self.done {
            return Ok(None);
        }

        let next = self.pull();
        if !matches!(next, Ok(Some(_))) {
            self.done = true;
        }
        next
    }

    /// Position of the last word handed to the state machine.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    fn pull(&mut self) -> VcdResult<Option<Event>> {
        loop {
            let Some((span, cursor)) = self.words.next_word()? else {
                return match self.state.expecting() {
                    None => Ok(None),
                    Some(expecting) => Err(VcdError::UnexpectedEof { expecting }),
                };
            };

            let word = self.words.word(&span);
            if word.is_empty() {
                continue;
            }
            self.cursor = cursor;

            let state = std::mem::take(&mut self.state);
            let step = advance(state, word, cursor)?;
            self.state = step.next;

            if let Some(consumed) = step.consumed {
                self.words.push_back(span, consumed, cursor);
            }

            if let Some(event) = step.emitted {
                return Ok(Some(event));
            }
        }
    }
}

impl<R: BufRead> Iterator for EventStream<R> {
    type Item = VcdResult<Event>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_event().transpose()
    }
}

impl<R: BufRead> FusedIterator for EventStream<R> {}
