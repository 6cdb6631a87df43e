//! Filter-style command line front end for the IPPcode20 parser.
//!
//! Reads IPPcode20 source from standard input, writes the XML
//! representation to standard output, and optionally writes source
//! statistics to a file. Error classes are reported through distinct
//! process exit codes so that an external test harness can tell them
//! apart without parsing messages.

use std::fs::File;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use ippcode_core::{StatKind, parse_program, write_program};

const EXIT_BAD_INVOCATION: u8 = 10;
const EXIT_FILE_UNAVAILABLE: u8 = 12;

fn main() -> ExitCode {
    run()
}

fn run() -> ExitCode {
    let matches = match command().try_get_matches() {
        Ok(matches) => matches,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(EXIT_BAD_INVOCATION);
        }
    };

    let arg_count = std::env::args().skip(1).count();
    if matches.get_flag("help") {
        if arg_count > 1 {
            eprintln!("--help cannot be combined with other options");
            return ExitCode::from(EXIT_BAD_INVOCATION);
        }
        print_usage();
        return ExitCode::SUCCESS;
    }

    let stats_paths: Vec<&String> = matches
        .get_many::<String>("stats")
        .map(|values| values.collect())
        .unwrap_or_default();
    if arg_count > 0 {
        // Any statistics option requires exactly one destination.
        if stats_paths.len() != 1 {
            eprintln!("statistics options require exactly one --stats=FILE");
            return ExitCode::from(EXIT_BAD_INVOCATION);
        }
        let path = stats_paths[0];
        if path.is_empty() || path.contains('=') {
            eprintln!("malformed --stats destination '{path}'");
            return ExitCode::from(EXIT_BAD_INVOCATION);
        }
    }

    let mut source = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut source) {
        eprintln!("failed to read standard input: {err}");
        return ExitCode::from(EXIT_FILE_UNAVAILABLE);
    }

    let output = match parse_program(&source) {
        Ok(output) => output,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(err.exit_code() as u8);
        }
    };

    print!("{}", write_program(&output.program));

    // The statistics sink is only touched after a fully successful parse.
    if let Some(path) = stats_paths.first() {
        if let Err(err) = write_stats(path, &output.stats) {
            eprintln!("{err:#}");
            return ExitCode::from(EXIT_FILE_UNAVAILABLE);
        }
    }

    ExitCode::SUCCESS
}

fn command() -> Command {
    Command::new("ippcode-cli")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("stats")
                .long("stats")
                .value_name("FILE")
                .require_equals(true)
                .action(ArgAction::Append),
        )
        .arg(Arg::new("loc").long("loc").action(ArgAction::Count))
        .arg(
            Arg::new("comments")
                .long("comments")
                .action(ArgAction::Count),
        )
        .arg(Arg::new("labels").long("labels").action(ArgAction::Count))
        .arg(Arg::new("jumps").long("jumps").action(ArgAction::Count))
}

/// Statistics requested on the command line, in the order given.
///
/// clap has already rejected unknown options, so scanning the raw
/// arguments is safe; the scan is what preserves the relative order of
/// repeatable flags.
fn requested_stats() -> Vec<StatKind> {
    std::env::args()
        .skip(1)
        .filter_map(|arg| match arg.as_str() {
            "--loc" => Some(StatKind::Loc),
            "--comments" => Some(StatKind::Comments),
            "--labels" => Some(StatKind::Labels),
            "--jumps" => Some(StatKind::Jumps),
            _ => None,
        })
        .collect()
}

fn write_stats(path: &str, stats: &ippcode_core::Statistics) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("failed to open statistics file {path}"))?;
    for kind in requested_stats() {
        writeln!(file, "{}", stats.get(kind))
            .with_context(|| format!("failed to write statistics file {path}"))?;
    }
    Ok(())
}

fn print_usage() {
    println!(
        "ippcode-cli: IPPcode20 lexical and syntactic analyzer

Reads IPPcode20 source code from standard input, checks its lexical and
syntactic correctness and writes the XML representation of the program
to standard output.

Usage: ippcode-cli [--help] [--stats=FILE] [--loc] [--comments] [--labels] [--jumps]

  --help        print this help and exit
  --stats=FILE  write source statistics to FILE
  --loc         add the number of instruction lines to the statistics
  --comments    add the number of lines carrying a comment
  --labels      add the number of defined labels
  --jumps       add the number of jumps, calls and returns combined

Statistics lines are written in the order the options are given; every
option except --help may be combined with the others."
    );
}
