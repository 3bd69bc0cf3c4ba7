//! The `letix` command line driver.
//!
//! Reads one program from a file (or stdin when no file is given),
//! checks it, and runs it. The stdout contract is fixed: the single
//! line `Def error` when the program uses an unbound variable, the
//! single line `Type error` when inference fails, the evaluated value
//! otherwise. Run-time faults report on stderr. Exit status is 0 only
//! for a program that printed a value (or, with `--check-only`, passed
//! both checks).

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use letix_eval::{eval, undefined_names};
use letix_log::{Level, debug, error, info};
use letix_typecheck::infer;

/// Type checker and interpreter for the letix expression language.
#[derive(Debug, Parser)]
#[command(name = "letix", version, about)]
struct Cli {
    /// Program file to run; reads stdin when omitted.
    file: Option<PathBuf>,

    /// Stop after type checking, without evaluating.
    #[arg(long)]
    check_only: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    letix_log::init_from_env();
    match cli.verbose {
        0 => {}
        1 => letix_log::set_level(Level::Info),
        _ => letix_log::set_level(Level::Debug),
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(()) => ExitCode::FAILURE,
    }
}

fn run(cli: &Cli) -> Result<(), ()> {
    let source = read_source(cli.file.as_deref()).map_err(|err| {
        error!("cannot read input: {err}");
    })?;

    let expr = letix_syntax::parse(&source).map_err(|err| {
        error!("syntax error: {err}");
    })?;
    debug!("parsed: {expr}");

    let free = undefined_names(&expr);
    if !free.is_empty() {
        info!("undefined: {}", free.join(", "));
        println!("Def error");
        return Err(());
    }

    match infer(&expr) {
        Ok(types) => {
            debug!("resolved {} terms", types.len());
        }
        Err(err) => {
            info!("inference failed: {err:?}");
            println!("{err}");
            return Err(());
        }
    }

    if cli.check_only {
        info!("check passed");
        return Ok(());
    }

    let value = eval(&expr).map_err(|err| {
        error!("evaluation failed: {err}");
    })?;
    println!("{value}");
    Ok(())
}

fn read_source(file: Option<&std::path::Path>) -> std::io::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}
