use std::{
    fs,
    io::{self, BufRead},
};

use clap::{ArgAction, Parser};
use keycalc::{engine::Registry, session::Session};
use tracing_subscriber::EnvFilter;

/// keycalc evaluates calculator key sequences in entry order, the way a
/// pocket calculator does.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells keycalc to read the keys from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Prints every operation symbol and its kind, then exits.
    #[arg(short, long)]
    list_operations: bool,

    /// Raises the log level. Repeat for more detail. Without it, the
    /// `KEYCALC_LOG` environment variable sets the filter.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The keys to evaluate, such as "3 + 4 =". When omitted, keys are read
    /// from stdin one line at a time into a single running session.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.list_operations {
        for (symbol, op) in Registry::standard().symbols() {
            println!("{symbol}\t{}", op.kind());
        }
        return;
    }

    let Some(contents) = args.contents else {
        run_interactive();
        return;
    };

    let keys = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    match Session::new().feed(&keys) {
        Ok(result) => println!("{}", format_result(result)),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

fn run_interactive() {
    let mut session = Session::new();

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Failed to read from stdin: {e}");
                std::process::exit(1);
            },
        };

        match session.feed(&line) {
            Ok(result) => println!("{}", format_result(result)),
            Err(e) => eprintln!("{e}"),
        }
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env("KEYCALC_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}

fn format_result(result: Option<f64>) -> String {
    result.map_or_else(|| "(no value)".to_string(), |value| value.to_string())
}
