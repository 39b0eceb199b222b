use std::{fs::read_to_string, path::PathBuf, sync::Once, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;
use gbscript::{errors::errors::ErrorTip, lexer::lexer::tokenize, parser::parser::parse};

#[derive(Parser)]
#[command(name = "gbscript")]
#[command(about = "Tokenize and parse a Gb-Script source file", version)]
struct Cli {
    /// Source file to read
    input: PathBuf,

    /// Print the token stream
    #[arg(long)]
    tokens: bool,

    /// Skip printing the AST
    #[arg(long)]
    no_ast: bool,
}

static TRACING_INIT: Once = Once::new();

/// Enable with `RUST_LOG=gbscript=debug` or `RUST_LOG=gbscript=trace`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let source = read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    let start = Instant::now();
    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(error) => {
            report(&error);
            std::process::exit(1);
        }
    };
    tracing::debug!(elapsed = ?start.elapsed(), "tokenize finished");

    if cli.tokens {
        println!("Tokens:");
        for token in &tokens {
            println!("{}", token);
        }
    }

    let parse_start = Instant::now();
    let ast = match parse(tokens) {
        Ok(ast) => ast,
        Err(error) => {
            report(&error);
            std::process::exit(1);
        }
    };
    tracing::debug!(elapsed = ?parse_start.elapsed(), "parse finished");

    if !cli.no_ast {
        println!("AST:");
        println!("{:#?}", ast);
    }

    Ok(())
}

fn report(error: &gbscript::errors::errors::Error) {
    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {} ({})", error.get_error_name(), error);
    } else {
        eprintln!(
            "Error: {} ({})\n  tip: {}",
            error.get_error_name(),
            error,
            error.get_tip()
        );
    }
}
