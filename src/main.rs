// Copyright (C) 2022 Yehowshua Immanuel
// This program is distributed under both the GPLV3 license
// and the YEHOWSHUA license, both of which can be found at
// the root of the folder containing the sources for this program.
use std::fs::File;
use std::io::BufReader;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use log::warn;

use vcd_stream::{parse_vcd, Event, Header, Scope, VcdError, VCD};

#[derive(Parser)]
#[command(about = "Read the declaration section of a VCD file")]
struct Cli {
    /// The path to the file to read
    path: std::path::PathBuf,

    /// Also stream the simulation section and count its events
    #[arg(long)]
    events: bool,
}

fn indented_print(indent: usize, text: &str) {
    for _ in 0..indent {
        print!("  |");
    }
    print!("---");
    println!("{text}");
}

fn print_scope_tree(header: &Header, scope: &Scope, indent: usize) {
    indented_print(indent, &format!("{} {}", scope.scope_type, scope.name));
    for signal in &scope.signals {
        indented_print(
            indent + 1,
            &format!(
                "{} [{}] {} ({})",
                signal.signal_type, signal.width, signal.name, signal.signal_id
            ),
        );
    }
    for child in header.child_scopes(scope) {
        print_scope_tree(header, child, indent + 1);
    }
}

fn run(args: &Cli) -> Result<(), VcdError> {
    let now = Instant::now();
    let file = File::open(&args.path)?;
    let VCD { header, events } = parse_vcd(BufReader::new(file))?;
    println!(
        "Parsed VCD header {} : {:.2?}",
        args.path.display(),
        now.elapsed()
    );

    println!("date      : {}", header.date.as_deref().unwrap_or_default());
    if let Some(date) = header.parsed_date() {
        println!("            {date}");
    }
    println!("version   : {}", header.version.as_deref().unwrap_or_default());
    match header.parsed_timescale() {
        Ok(timescale) => println!("timescale : {} {:?}", timescale.scalar, timescale.unit),
        Err(err) => {
            warn!("{err}");
            println!("timescale : {}", header.timescale.as_deref().unwrap_or_default());
        }
    }

    println!("Printing Scopes");
    if let Some(root) = header.root() {
        print_scope_tree(&header, root, 0);
    }

    if args.events {
        let now = Instant::now();
        let (mut commands, mut changes, mut timestamps) = (0usize, 0usize, 0usize);
        for event in events {
            match event? {
                Event::Command(_) => commands += 1,
                Event::ValueChange(_) => changes += 1,
                Event::SimulationTime(_) => timestamps += 1,
            }
        }
        println!(
            "{commands} commands, {changes} value changes, {timestamps} timestamps : {:.2?}",
            now.elapsed()
        );
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Cli::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
