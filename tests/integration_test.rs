// Copyright (C) 2022 Yehowshua Immanuel
// This program is distributed under both the GPLV3 license
// and the YEHOWSHUA license, both of which can be found at
// the root of the folder containing the sources for this program.
use std::fs::File;
use std::io::{BufReader, Write};

use vcd_stream::*;

use files::*;

fn open(file_name: &str) -> VCD<BufReader<File>> {
    let file = File::open(file_name).unwrap();
    parse_vcd(BufReader::new(file)).unwrap()
}

/// (commands, value changes, timestamps)
fn tally(events: impl Iterator<Item = VcdResult<Event>>) -> (usize, usize, usize) {
    let mut counts = (0, 0, 0);
    for event in events {
        match event.unwrap() {
            Event::Command(_) => counts.0 += 1,
            Event::ValueChange(_) => counts.1 += 1,
            Event::SimulationTime(_) => counts.2 += 1,
        }
    }
    counts
}

#[test]
fn parse_all_vcds() {
    for file_name in FILES {
        let file = File::open(file_name).unwrap();
        let vcd = parse_vcd(BufReader::new(file));

        if vcd.is_err() {
            dbg!(file_name);
        }
        let VCD { events, .. } = vcd.unwrap();
        for event in events {
            event.unwrap();
        }
    }
}

#[test]
fn ieee_example_scope_tree() {
    let VCD { header, events } = open(IEEE_EXAMPLE);

    assert_eq!(header.date.as_deref(), Some("June 26, 1989 10:05:41"));
    assert_eq!(header.parsed_date(), None);
    assert_eq!(header.version.as_deref(), Some("VERILOG-SIMULATOR 1.0a"));
    assert_eq!(
        header.parsed_timescale().unwrap(),
        Timescale {
            scalar: 1,
            unit: TimescaleUnit::Ns
        }
    );

    let top = header.root().unwrap();
    assert_eq!(top.name, "top");
    assert!(top.signals.is_empty());

    let children: Vec<&Scope> = header.child_scopes(top).collect();
    assert_eq!(children.len(), 2);
    assert_eq!(
        (children[0].scope_type.as_str(), children[0].name.as_str()),
        ("module", "m1")
    );
    assert_eq!(
        (children[1].scope_type.as_str(), children[1].name.as_str()),
        ("task", "t1")
    );

    let ids: Vec<&str> = children[0]
        .signals
        .iter()
        .map(|signal| signal.signal_id.as_str())
        .collect();
    assert_eq!(ids, vec!["*@", "*#", "*$"]);

    let accumulator = &children[1].signals[0];
    assert_eq!(accumulator.name, "accumulator[31:0]");
    assert_eq!(accumulator.parsed_type(), Some(SignalType::Reg));
    assert_eq!(accumulator.num_bits(), Some(32));

    assert_eq!(tally(events), (3, 9, 7));
}

#[test]
fn ieee_example_simulation_events() {
    let VCD { events, .. } = open(IEEE_EXAMPLE);
    let events: Vec<Event> = events.map(Result::unwrap).collect();

    assert_eq!(
        events[0],
        Event::Command(Command {
            kind: CommandKind::Comment,
            text: Some("Note: $var has been declared for every net".to_string()),
        })
    );
    assert_eq!(
        events[2],
        Event::Command(Command {
            kind: CommandKind::DumpVars,
            text: Some(
                "bxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx (k bxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx {2 0*@ x*# 0*$"
                    .to_string()
            ),
        })
    );

    let zs: Vec<&ValueChange> = events
        .iter()
        .filter_map(|event| match event {
            Event::ValueChange(change) if change.value == "z" => Some(change),
            _ => None,
        })
        .collect();
    assert_eq!(zs.len(), 2);
    assert_eq!(zs[1].signal_id, "*#");

    let last_time = events
        .iter()
        .rev()
        .find_map(|event| match event {
            Event::SimulationTime(time) => time.as_biguint(),
            _ => None,
        })
        .unwrap();
    assert_eq!(last_time, BigUint::from(500u32));
}

#[test]
fn icarus_counter() {
    let VCD { header, events } = open(ICARUS_COUNTER);

    assert_eq!(header.version.as_deref(), Some("Icarus Verilog"));
    assert!(header.parsed_date().is_some());
    assert_eq!(header.parsed_timescale().unwrap().unit, TimescaleUnit::Ps);

    let top = header.root().unwrap();
    assert_eq!(top.name, "counter_tb");
    let dut = header.child_scopes(top).next().unwrap();
    assert_eq!(header.depth(dut), 1);
    assert_eq!(dut.signals[0].signal_id, "$");
    assert_eq!(header.all_signals().count(), 6);

    assert_eq!(tally(events), (1, 10, 4));
}

#[test]
fn irregular_whitespace() {
    let VCD { header, events } = open(WHITESPACE);

    assert_eq!(header.date.as_deref(), Some("Wed Jan 1 00:00:00 2020"));
    assert_eq!(header.version.as_deref(), Some("tool 1.0"));
    assert_eq!(
        header.parsed_timescale().unwrap(),
        Timescale {
            scalar: 10,
            unit: TimescaleUnit::Us
        }
    );
    assert_eq!(header.root().unwrap().signals[0].name, "clk");

    // the rest of the `$enddefinitions` line belongs to the caller
    let events: Vec<Event> = events.map(Result::unwrap).collect();
    assert_eq!(
        events,
        vec![
            Event::SimulationTime(SimulationTime {
                time: "0".to_string()
            }),
            Event::ValueChange(ValueChange {
                value: "1".to_string(),
                signal_id: "!".to_string()
            }),
        ]
    );
}

#[test]
fn header_then_value_changes_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "$date Jan 1 2020 $end\n\
         $version tool 1.0 $end\n\
         $timescale 1ns $end\n\
         $scope module top $end\n\
         $var wire 1 ! clk $end\n\
         $upscope $end\n\
         $enddefinitions $end\n\
         1!\n\
         b101 #\n\
         #100\n"
    )
    .unwrap();
    file.flush().unwrap();

    let VCD { header, mut events } = open(file.path().to_str().unwrap());
    assert_eq!(header.timescale.as_deref(), Some("1ns"));

    assert_eq!(
        events.next().unwrap().unwrap(),
        Event::ValueChange(ValueChange {
            value: "1".to_string(),
            signal_id: "!".to_string()
        })
    );
    assert_eq!(
        events.next().unwrap().unwrap(),
        Event::ValueChange(ValueChange {
            value: "b101".to_string(),
            signal_id: "#".to_string()
        })
    );
    assert_eq!(
        events.next().unwrap().unwrap(),
        Event::SimulationTime(SimulationTime {
            time: "100".to_string()
        })
    );
    assert!(events.next().is_none());
}

#[test]
fn broken_header_from_disk() {
    const DECLARATIONS: &str = "\
$date d $end
$version v $end
$timescale 1ns $end
$scope module top $end
$upscope $end";

    // closing the root is balanced
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{DECLARATIONS}\n$enddefinitions $end").unwrap();
    file.flush().unwrap();
    let VCD { header, .. } = parse_vcd(BufReader::new(File::open(file.path()).unwrap())).unwrap();
    assert_eq!(header.root().unwrap().name, "top");

    // one `$upscope` more than was opened is not
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{DECLARATIONS}\n$upscope $end\n$enddefinitions $end").unwrap();
    file.flush().unwrap();
    let err = parse_vcd(BufReader::new(File::open(file.path()).unwrap()))
        .err()
        .unwrap();
    match err {
        VcdError::Structure(message) => assert!(message.contains("no open scope")),
        other => panic!("expected structure error, got {other:?}"),
    }
}

#[test]
fn unrecognized_token_carries_position() {
    let input = "$date d $end\n  ?what $end\n";
    let err = read_header(parse(input.as_bytes())).unwrap_err();
    assert_eq!(err.line(), Some(2));
    assert!(err.to_string().contains("?what"));
}
