// Copyright (C) 2022 Yehowshua Immanuel
// This program is distributed under both the GPLV3 license
// and the YEHOWSHUA license, both of which can be found at
// the root of the folder containing the sources for this program.

//! Streaming reader for Value Change Dump files.
//!
//! [`parse`] turns any [`std::io::BufRead`] into a lazy [`EventStream`] of
//! commands, value changes and timestamps, holding one line at a time.
//! [`read_header`] consumes that stream up to `$enddefinitions` and builds
//! the scope tree.
//!
//! ```
//! let input = "\
//! $date Jan 1 2020 $end
//! $version tool 1.0 $end
//! $timescale 1ns $end
//! $scope module top $end
//! $var wire 1 ! clk $end
//! $upscope $end
//! $enddefinitions $end
//! #0
//! 1!
//! ";
//! let vcd_stream::VCD { header, mut events } = vcd_stream::parse_vcd(input.as_bytes())?;
//! assert_eq!(header.root().unwrap().signals[0].name, "clk");
//! assert!(matches!(events.next(), Some(Ok(vcd_stream::Event::SimulationTime(_)))));
//! # Ok::<(), vcd_stream::VcdError>(())
//! ```
mod vcd;
pub use vcd::error::{VcdError, VcdResult};
pub use vcd::parse::{parse, parse_date, parse_vcd, read_header, EventStream};
pub use vcd::reader::{Cursor, Line, Word};
pub use vcd::signal::{Signal, SignalType};
pub use vcd::types::{Command, CommandKind, Event, SimulationTime, ValueChange};
pub use vcd::types::{Header, Scope, ScopeIdx, VCD};
pub use vcd::types::{Timescale, TimescaleUnit};

pub use num::BigUint;
