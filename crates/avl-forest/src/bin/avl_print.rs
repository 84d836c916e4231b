//! `avl-print`: feed strings through an AVL map and print the trees.
//!
//! Usage:
//!   avl-print [--dump] [--check] [INPUTS]...
//!
//! Every character of an input becomes a single-character key (value 1);
//! repeated characters update the existing entry. Without inputs a fixed
//! set of demonstration strings is used. Set `RUST_LOG=trace` to watch the
//! restructurings.

use std::io::{self, Write};

use avl_forest::{AvlMap, InvariantViolation};
use clap::Parser;
use tracing_subscriber::EnvFilter;

const DEMO_INPUTS: [&str; 5] = [
    "CBDAE",
    "DACBEFMLGHJK",
    "JABCDEFISN",
    "NATASHASHARMA",
    "NEWYORKCITY",
];

#[derive(Parser, Debug)]
#[command(name = "avl-print", about = "Print the AVL tree built from each input string")]
struct Cli {
    /// Strings whose characters are inserted as keys, one tree per string.
    inputs: Vec<String>,
    /// Also print the node-by-node dump with cached heights.
    #[arg(long)]
    dump: bool,
    /// Validate the tree after every insertion; exit non-zero on a violation.
    #[arg(long)]
    check: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("after inserting {ch:?} into {input:?}: {source}")]
    Invalid {
        input: String,
        ch: char,
        #[source]
        source: InvariantViolation,
    },
}

fn build(input: &str, check: bool) -> Result<AvlMap<String, i32>, CliError> {
    let mut map = AvlMap::new();
    for ch in input.chars() {
        map.put(ch.to_string(), 1);
        if check {
            map.assert_valid().map_err(|source| CliError::Invalid {
                input: input.to_string(),
                ch,
                source,
            })?;
        }
    }
    Ok(map)
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<(), CliError> {
    let inputs: Vec<&str> = if cli.inputs.is_empty() {
        DEMO_INPUTS.to_vec()
    } else {
        cli.inputs.iter().map(String::as_str).collect()
    };

    for input in inputs {
        let map = build(input, cli.check)?;
        writeln!(out, "Input of {input}")?;
        writeln!(out, "{}", map.print_tree())?;
        if cli.dump {
            writeln!(out, "{}", map.dump())?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli, &mut io::stdout().lock()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
