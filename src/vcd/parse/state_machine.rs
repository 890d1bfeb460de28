// Copyright (C) 2022 Yehowshua Immanuel
// This program is distributed under both the GPLV3 license
// and the YEHOWSHUA license, both of which can be found at
// the root of the folder containing the sources for this program.

//! The five state grammar that turns words into events.
//!
//! The in-flight event rides inside the state it is being built in, so the
//! machine can never hold more than one of them.
use log::trace;

use super::super::error::{VcdError, VcdResult};
use super::super::reader::Cursor;
use super::super::types::{Command, CommandKind, Event, SimulationTime, ValueChange};

const SCALARS: [char; 6] = ['0', '1', 'x', 'X', 'z', 'Z'];
const VECTOR_TYPES: [char; 4] = ['b', 'B', 'r', 'R'];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(super) enum State {
    #[default]
    Start,
    Command(Command),
    ValueChangeVal(ValueChange),
    ValueChangeSid(ValueChange),
    Time,
}

impl State {
    /// What the machine is waiting for, for end of input diagnostics.
    pub(super) fn expecting(&self) -> Option<&'static str> {
        match self {
            State::Start => None,
            State::Command(_) => Some("looking for `$end`"),
            State::ValueChangeVal(_) => Some("reading a vector value"),
            State::ValueChangeSid(_) => Some("reading a signal identifier"),
            State::Time => Some("reading a simulation time"),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(super) struct Step {
    pub(super) next: State,
    // how many bytes of the word were used; the remainder is pushed back
    pub(super) consumed: Option<usize>,
    pub(super) emitted: Option<Event>,
}

impl Step {
    fn to(next: State) -> Step {
        Step {
            next,
            consumed: None,
            emitted: None,
        }
    }

    fn split(next: State, consumed: usize) -> Step {
        Step {
            next,
            consumed: Some(consumed),
            emitted: None,
        }
    }

    fn emit(event: Event) -> Step {
        Step {
            next: State::Start,
            consumed: None,
            emitted: Some(event),
        }
    }
}

pub(super) fn advance(state: State, word: &str, cursor: Cursor) -> VcdResult<Step> {
    trace!("{state:?} <- `{word}` at {cursor}");

    match state {
        State::Start => start(word, cursor),
        State::Command(mut command) => {
            if word == "$end" {
                return Ok(Step::emit(Event::Command(command)));
            }

            // collapses any whitespace run in the source into one space
            let text = command.text.get_or_insert_with(String::new);
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(word);

            Ok(Step::to(State::Command(command)))
        }
        State::ValueChangeVal(mut value_change) => {
            value_change.value.push_str(word);
            Ok(Step::to(State::ValueChangeSid(value_change)))
        }
        State::ValueChangeSid(mut value_change) => {
            value_change.signal_id = word.to_string();
            Ok(Step::emit(Event::ValueChange(value_change)))
        }
        State::Time => Ok(Step::emit(Event::SimulationTime(SimulationTime {
            time: word.to_string(),
        }))),
    }
}

fn start(word: &str, cursor: Cursor) -> VcdResult<Step> {
    if let Some(kind) = CommandKind::from_keyword(word) {
        return Ok(Step::to(State::Command(Command { kind, text: None })));
    }

    let unrecognized = || VcdError::UnrecognizedToken {
        token: word.to_string(),
        cursor,
    };
    let first = word.chars().next().ok_or_else(unrecognized)?;
    let consumed = first.len_utf8();

    if first == '#' {
        return Ok(Step::split(State::Time, consumed));
    }

    let value_change = ValueChange {
        value: first.to_ascii_lowercase().to_string(),
        signal_id: String::new(),
    };

    if SCALARS.contains(&first) {
        return Ok(Step::split(State::ValueChangeSid(value_change), consumed));
    }

    if VECTOR_TYPES.contains(&first) {
        return Ok(Step::split(State::ValueChangeVal(value_change), consumed));
    }

    Err(unrecognized())
}
