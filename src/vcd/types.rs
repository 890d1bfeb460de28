// Copyright (C) 2022 Yehowshua Immanuel
// This program is distributed under both the GPLV3 license
// and the YEHOWSHUA license, both of which can be found at
// the root of the folder containing the sources for this program.
use std::fmt;

use chrono::prelude::*;
use num::BigUint;

use super::error::VcdResult;
use super::parse::{parse_date, EventStream};
use super::signal::Signal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    // declaration commands, IEEE 1364-2005 table 18.3
    Comment,
    Date,
    EndDefinitions,
    Scope,
    Timescale,
    UpScope,
    Var,
    Version,
    // simulation commands
    DumpAll,
    DumpOff,
    DumpOn,
    DumpVars,
}

impl CommandKind {
    pub const ALL: [CommandKind; 12] = [
        CommandKind::Comment,
        CommandKind::Date,
        CommandKind::EndDefinitions,
        CommandKind::Scope,
        CommandKind::Timescale,
        CommandKind::UpScope,
        CommandKind::Var,
        CommandKind::Version,
        CommandKind::DumpAll,
        CommandKind::DumpOff,
        CommandKind::DumpOn,
        CommandKind::DumpVars,
    ];

    /// Matches a whole word such as `$scope`. The `$` is required.
    pub fn from_keyword(word: &str) -> Option<CommandKind> {
        let name = word.strip_prefix('$')?;
        CommandKind::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// The keyword without its `$` sigil.
    pub fn name(&self) -> &'static str {
        match self {
            CommandKind::Comment => "comment",
            CommandKind::Date => "date",
            CommandKind::EndDefinitions => "enddefinitions",
            CommandKind::Scope => "scope",
            CommandKind::Timescale => "timescale",
            CommandKind::UpScope => "upscope",
            CommandKind::Var => "var",
            CommandKind::Version => "version",
            CommandKind::DumpAll => "dumpall",
            CommandKind::DumpOff => "dumpoff",
            CommandKind::DumpOn => "dumpon",
            CommandKind::DumpVars => "dumpvars",
        }
    }

    pub fn is_declaration(&self) -> bool {
        !matches!(
            self,
            CommandKind::DumpAll | CommandKind::DumpOff | CommandKind::DumpOn | CommandKind::DumpVars
        )
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub kind: CommandKind,
    /// Body between the keyword and `$end`, words separated by one space.
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueChange {
    pub value: String,
    pub signal_id: String,
}

impl ValueChange {
    /// True for single character values, false for `b`/`r` vectors.
    pub fn is_scalar(&self) -> bool {
        !self.value.starts_with(['b', 'r'])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationTime {
    pub time: String,
}

impl SimulationTime {
    pub fn as_biguint(&self) -> Option<BigUint> {
        BigUint::parse_bytes(self.time.as_bytes(), 10)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Command(Command),
    ValueChange(ValueChange),
    SimulationTime(SimulationTime),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimescaleUnit {
    Fs,
    Ps,
    Ns,
    Us,
    Ms,
    S,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timescale {
    pub scalar: u32,
    pub unit: TimescaleUnit,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ScopeIdx(pub usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    pub scope_type: String,
    pub name: String,

    pub parent: Option<ScopeIdx>,
    pub self_idx: ScopeIdx,

    pub child_scopes: Vec<ScopeIdx>,
    pub signals: Vec<Signal>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    pub date: Option<String>,
    pub version: Option<String>,
    pub timescale: Option<String>,
    pub root_scope: Option<ScopeIdx>,
    // every scope of the tree, in declaration order
    pub(super) all_scopes: Vec<Scope>,
}

impl Header {
    pub fn root(&self) -> Option<&Scope> {
        self.root_scope.and_then(|idx| self.scope(idx))
    }

    pub fn scope(&self, idx: ScopeIdx) -> Option<&Scope> {
        let ScopeIdx(idx) = idx;
        self.all_scopes.get(idx)
    }

    pub fn scopes(&self) -> &[Scope] {
        &self.all_scopes
    }

    pub fn child_scopes<'a>(&'a self, scope: &'a Scope) -> impl Iterator<Item = &'a Scope> + 'a {
        scope
            .child_scopes
            .iter()
            .filter_map(move |idx| self.scope(*idx))
    }

    pub fn parent_of(&self, scope: &Scope) -> Option<&Scope> {
        scope.parent.and_then(|idx| self.scope(idx))
    }

    /// Number of enclosing scopes; the root has depth 0.
    pub fn depth(&self, scope: &Scope) -> usize {
        let mut depth = 0;
        let mut curr = scope;
        while let Some(parent) = self.parent_of(curr) {
            depth += 1;
            curr = parent;
        }
        depth
    }

    /// Every declared signal paired with the scope that owns it.
    pub fn all_signals(&self) -> impl Iterator<Item = (&Scope, &Signal)> {
        self.all_scopes
            .iter()
            .flat_map(|scope| scope.signals.iter().map(move |signal| (scope, signal)))
    }

    /// A missing `$timescale` reads as an empty, and so invalid, timescale.
    pub fn parsed_timescale(&self) -> VcdResult<Timescale> {
        self.timescale.as_deref().unwrap_or_default().parse()
    }

    /// The `$date` text as a timestamp, when it is in one of the layouts
    /// simulators commonly write.
    pub fn parsed_date(&self) -> Option<DateTime<Utc>> {
        self.date.as_deref().and_then(parse_date)
    }
}

/// A parsed header together with the stream it was read from, positioned
/// just after `$enddefinitions $end`.
pub struct VCD<R> {
    pub header: Header,
    pub events: EventStream<R>,
}
