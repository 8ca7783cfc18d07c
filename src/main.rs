//! deduce CLI entry point.

mod cli;

use clap::Parser;
use cli::{Cli, Command};
use deduce::{demo, listing, script};
use deduce_rules::{Derivation, RULE_GROUPS};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Rules => {
            if cli.json {
                print_json(&RULE_GROUPS);
            } else {
                print!("{}", listing::rules_text());
            }
        }
        Command::Demo => match demo::derivation() {
            Ok(derivation) => print_derivation(&derivation, cli.json),
            Err(e) => fail(format_args!("Demo derivation failed: {e}")),
        },
        Command::Run { file } => {
            let source = match std::fs::read_to_string(&file) {
                Ok(source) => source,
                Err(e) => fail(format_args!("Error reading {}: {e}", file.display())),
            };
            match script::run(&source) {
                Ok(derivation) => print_derivation(&derivation, cli.json),
                Err(e) => fail(format_args!("{}: {e}", file.display())),
            }
        }
    }
}

fn print_derivation(derivation: &Derivation, json: bool) {
    if json {
        print_json(derivation);
    } else {
        print!("{derivation}");
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => fail(format_args!("Error serializing output: {e}")),
    }
}

fn fail(message: std::fmt::Arguments<'_>) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}
