use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::Parser;
use lisplet::{eval_source, interpreter::evaluator::core::Environment};

/// lisplet is a minimal interpreter for a small S-expression language with
/// numbers, symbols, `if`, `define` and host math primitives.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate a script file line by line and print its final value,
    /// instead of starting the interactive prompt.
    script: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();
    let mut env = Environment::standard();

    match args.script {
        Some(path) => run_script(&path, &mut env),
        None => repl(&mut env),
    }
}

/// Evaluates a script file, one expression per non-blank line, and prints
/// the last value produced. Any error aborts the run.
fn run_script(path: &PathBuf, env: &mut Environment) {
    let source = fs::read_to_string(path).unwrap_or_else(|_| {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  path.display());
        std::process::exit(1);
    });

    let mut last = None;

    for line in source.lines() {
        if line.trim().is_empty() {
            continue;
        }

        match eval_source(line, env) {
            Ok(Some(value)) => last = Some(value),
            Ok(None) => {},
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            },
        }
    }

    if let Some(value) = last {
        println!("{value}");
    }
}

/// The prompt-read-eval-print loop.
///
/// Reads one line per iteration, stops on end of input or a
/// case-insensitive `exit`/`quit`, and prints each result unless the line
/// was a definition. Every pipeline error is caught here, printed, and the
/// loop continues; the environment keeps whatever state it had.
fn repl(env: &mut Environment) {
    let stdin = io::stdin();

    loop {
        print!("lisplet> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        let source = line.trim();
        if source.is_empty() {
            continue;
        }

        if source.eq_ignore_ascii_case("exit") || source.eq_ignore_ascii_case("quit") {
            break;
        }

        match eval_source(source, env) {
            Ok(Some(value)) => println!("{value}"),
            Ok(None) => {},
            Err(e) => println!("Error: {e}"),
        }
    }
}
