// Copyright (C) 2022 Yehowshua Immanuel
// This program is distributed under both the GPLV3 license
// and the YEHOWSHUA license, both of which can be found at
// the root of the folder containing the sources for this program.

//! part of the vcd parser that handles the declaration section and
//! builds the resulting scope tree
use log::{debug, warn};

use super::super::error::{VcdError, VcdResult};
use super::super::signal::Signal;
use super::super::types::{Command, CommandKind, Event, Header, Scope, ScopeIdx};

/// Consumes events up to and including `$enddefinitions` and returns the
/// declared header. Nothing past that command is pulled from `events`.
pub fn read_header<I>(events: I) -> VcdResult<Header>
where
    I: IntoIterator<Item = VcdResult<Event>>,
{
    let mut builder = HeaderBuilder::default();

    for event in events {
        let Event::Command(command) = event? else {
            continue;
        };

        if command.kind == CommandKind::EndDefinitions {
            return builder.finish();
        }
        builder.apply(command)?;
    }

    Err(VcdError::UnexpectedEof {
        expecting: "looking for `$enddefinitions`",
    })
}

#[derive(Debug, Default)]
pub(super) struct HeaderBuilder {
    header: Header,
    curr_scope: Option<ScopeIdx>,
}

impl HeaderBuilder {
    pub(super) fn apply(&mut self, command: Command) -> VcdResult<()> {
        let Command { kind, text } = command;

        match kind {
            CommandKind::Date => self.header.date = text,
            CommandKind::Version => self.header.version = text,
            CommandKind::Timescale => self.header.timescale = text,
            CommandKind::Scope => self.open_scope(text.as_deref())?,
            CommandKind::Var => self.declare_var(text.as_deref())?,
            CommandKind::UpScope => self.close_scope()?,
            _ => {}
        }

        Ok(())
    }

    fn open_scope(&mut self, text: Option<&str>) -> VcdResult<()> {
        // $scope module top $end
        //        ^^^^^^ ^^^ - scope_type, name
        let [scope_type, name] = fields::<2>(CommandKind::Scope, text)?;

        if let (None, Some(root)) = (self.curr_scope, self.header.root_scope) {
            return Err(VcdError::structure(format!(
                "`$scope {name}` opened after root scope {root:?} was closed"
            )));
        }

        let self_idx = ScopeIdx(self.header.all_scopes.len());
        let parent = self.curr_scope;
        if let Some(parent_idx) = parent {
            self.scope_mut(parent_idx).child_scopes.push(self_idx);
        }

        debug!("opening {scope_type} `{name}` as {self_idx:?} under {parent:?}");
        self.header.all_scopes.push(Scope {
            scope_type,
            name,
            parent,
            self_idx,
            child_scopes: vec![],
            signals: vec![],
        });

        self.curr_scope = Some(self_idx);
        if self.header.root_scope.is_none() {
            self.header.root_scope = Some(self_idx);
        }

        Ok(())
    }

    fn declare_var(&mut self, text: Option<&str>) -> VcdResult<()> {
        // $var wire 1 ! clk $end
        //      ^^^^ ^ ^ ^^^ - signal_type, width, signal_id, name
        let [signal_type, width, signal_id, name] = fields::<4>(CommandKind::Var, text)?;

        let Some(scope_idx) = self.curr_scope else {
            return Err(VcdError::structure(format!(
                "`$var` for `{name}` declared outside of any `$scope`"
            )));
        };

        self.scope_mut(scope_idx).signals.push(Signal {
            signal_type,
            width,
            signal_id,
            name,
        });

        Ok(())
    }

    fn close_scope(&mut self) -> VcdResult<()> {
        // closing the root leaves no scope open
        let Some(scope_idx) = self.curr_scope else {
            return Err(VcdError::structure("`$upscope` with no open scope"));
        };

        let ScopeIdx(idx) = scope_idx;
        let scope = &self.header.all_scopes[idx];
        debug!("closing `{}`", scope.name);
        self.curr_scope = scope.parent;

        Ok(())
    }

    pub(super) fn finish(self) -> VcdResult<Header> {
        let header = self.header;

        let mut missing = vec![];
        if header.date.is_none() {
            missing.push("date");
        }
        if header.version.is_none() {
            missing.push("version");
        }
        if header.timescale.is_none() {
            missing.push("timescale");
        }
        if header.root_scope.is_none() {
            missing.push("root scope");
        }
        if !missing.is_empty() {
            return Err(VcdError::Validation { missing });
        }

        if let Some(scope) = self.curr_scope.and_then(|idx| header.scope(idx)) {
            warn!(
                "$enddefinitions reached with {} unclosed scope(s), innermost `{}`",
                header.depth(scope) + 1,
                scope.name
            );
        }

        debug!(
            "header complete: {} scope(s), {} signal(s)",
            header.all_scopes.len(),
            header.all_signals().count()
        );
        Ok(header)
    }

    // indices handed out by `open_scope` always point into `all_scopes`
    fn scope_mut(&mut self, idx: ScopeIdx) -> &mut Scope {
        let ScopeIdx(idx) = idx;
        &mut self.header.all_scopes[idx]
    }
}

/// Splits a command body into exactly `N` whitespace separated fields.
fn fields<const N: usize>(command: CommandKind, text: Option<&str>) -> VcdResult<[String; N]> {
    let text = text.unwrap_or_default();
    let words: Vec<&str> = text.split_ascii_whitespace().collect();
    let found = words.len();

    let words: [&str; N] = words.try_into().map_err(|_| VcdError::FieldCount {
        command,
        expected: N,
        found,
        text: text.to_string(),
    })?;

    Ok(words.map(str::to_string))
}
