//! Y86-64 pipeline simulator CLI.
//!
//! This binary wires the simulator core to the process interface:
//! 1. **Input:** Reads a `.yo` object listing from standard input, or from
//!    a file with `-f/--file`.
//! 2. **Output:** Writes the retirement snapshot stream as a JSON array to
//!    standard output.
//! 3. **Diagnostics:** Writes the performance report (and optional stage
//!    traces) to standard error.
//!
//! Exits 0 on success and 1 when no program could be loaded.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process;

use clap::Parser;

use y86_core::sim::loader;
use y86_core::Simulator;

#[derive(Parser, Debug)]
#[command(
    name = "y86-sim",
    author,
    version,
    about = "Y86-64 cycle-accurate pipeline simulator",
    long_about = "Simulate a Y86-64 program on a five-stage pipeline with forwarding,\n\
                  load-use stalls, and branch/return misprediction flushes.\n\n\
                  Reads a .yo object listing from stdin (or --file), writes one JSON\n\
                  snapshot per retired instruction to stdout, and a performance report\n\
                  to stderr.\n\n\
                  Examples:\n  y86-sim < prog.yo\n  y86-sim -f prog.yo --trace"
)]
struct Cli {
    /// Object file (.yo) to simulate; reads standard input when omitted.
    #[arg(short, long)]
    file: Option<String>,

    /// Print per-stage trace lines and a pipeline diagram on stderr.
    #[arg(long)]
    trace: bool,
}

fn main() {
    let cli = Cli::parse();

    let image = match &cli.file {
        Some(path) => match File::open(path) {
            Ok(file) => loader::parse_yo(BufReader::new(file)),
            Err(e) => {
                eprintln!("Error: could not read '{}': {}", path, e);
                process::exit(1);
            }
        },
        None => loader::parse_yo(io::stdin().lock()),
    };

    if image.is_empty() {
        eprintln!("Error: No program loaded");
        process::exit(1);
    }

    let mut sim = Simulator::new();
    sim.cpu.trace = cli.trace;
    sim.load_program(&image);
    sim.run();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = serde_json::to_writer_pretty(&mut out, &sim.cpu.snapshots) {
        eprintln!("Error: could not write snapshots: {}", e);
        process::exit(1);
    }
    writeln!(out).ok();

    sim.cpu.stats.print();
}
