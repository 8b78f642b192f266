use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::{ArgAction, ArgGroup, Parser};
use exprxml::{
    format_error,
    lexer::{lexer::tokenize, stream::TokenStream},
    parser::parser::parse,
    serializer::xml::{wrap, ExprXml},
};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Parse an expression and serialize its syntax tree as XML.
#[derive(Debug, Parser)]
#[command(name = "exprxml", version, about)]
#[command(group(ArgGroup::new("input").required(true).args(["expression", "file"])))]
struct Cli {
    /// Expression text, e.g. "2 * (3 + x)"
    expression: Option<String>,

    /// Read the expression from a file instead
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Write the document here instead of printing it
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_writer(std::io::stderr)
        .init();

    let (source, name) = match (&cli.expression, &cli.file) {
        (Some(expression), _) => (expression.clone(), String::from("shell")),
        (None, Some(file)) => match read_to_string(file) {
            Ok(contents) => (contents, file.display().to_string()),
            Err(e) => {
                error!(path = %file.display(), error = %e, "failed to read expression file");
                return ExitCode::FAILURE;
            }
        },
        // clap enforces the input group
        (None, None) => return ExitCode::FAILURE,
    };

    let start = Instant::now();

    let tokens = match tokenize(&source, Some(name.clone())) {
        Ok(tokens) => tokens,
        Err(e) => {
            eprint!("{}", format_error(&e, &source, &name));
            return ExitCode::FAILURE;
        }
    };
    debug!(count = tokens.len(), elapsed = ?start.elapsed(), "tokenized");

    let expr = match parse(TokenStream::new(tokens)) {
        Ok(expr) => expr,
        Err(e) => {
            eprint!("{}", format_error(&e, &source, &name));
            return ExitCode::FAILURE;
        }
    };
    debug!(elapsed = ?start.elapsed(), "parsed");

    let mut serializer = ExprXml::new();
    let node = expr.accept(&mut serializer);

    match &cli.output {
        Some(path) => {
            if let Err(e) = serializer.save_to(path, node) {
                eprint!("{}", format_error(&e, &source, &name));
                return ExitCode::FAILURE;
            }
        }
        None => println!("{}", wrap(node)),
    }

    debug!(elapsed = ?start.elapsed(), "done");
    ExitCode::SUCCESS
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "exprxml=warn",
        1 => "exprxml=debug",
        _ => "exprxml=trace",
    }
}
