use std::{fs::read_to_string, path::PathBuf, process::ExitCode, sync::Arc, time::Instant};

use clap::Parser as ClapParser;
use tracing::debug;
use watt::{lexer::lexer::tokenize, parser::parser::parse, render_error};

#[derive(ClapParser)]
#[command(
    name = "watt",
    about = "Lexer and parser for the Watt language",
    version = env!("CARGO_PKG_VERSION"),
    long_about = None
)]
struct Cli {
    /// Path to the .watt file
    file: PathBuf,

    /// Print the token stream
    #[arg(long)]
    tokens: bool,

    /// Print the parsed tree as s-expressions
    #[arg(long)]
    ast: bool,
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Only initialize if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    let source = match read_to_string(&cli.file) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read {}: {}", cli.file.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let file_name = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.file.to_string_lossy().into_owned());

    let start = Instant::now();

    let tokens = match tokenize(&source, Some(file_name.clone())) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprint!("{}", render_error(&err, &source));
            return ExitCode::FAILURE;
        }
    };

    debug!(elapsed = ?start.elapsed(), count = tokens.len(), "tokenized");

    if cli.tokens {
        for token in &tokens {
            println!("{}", token);
        }
    }

    let parse_start = Instant::now();

    let program = match parse(tokens, Arc::new(file_name)) {
        Ok(program) => program,
        Err(err) => {
            eprint!("{}", render_error(&err, &source));
            return ExitCode::FAILURE;
        }
    };

    debug!(elapsed = ?parse_start.elapsed(), "parsed");

    if cli.ast {
        println!("{}", program);
    }

    println!("Parsed {} items", program.items.len());

    ExitCode::SUCCESS
}
