//! Command-line interface for textcalc
//! This binary evaluates, classifies, and tokenizes delimited number expressions.
//!
//! Usage:
//!   textcalc eval [TEXT] [--file `<path>`] [--format `<format>`]      - Print the expression's sum
//!   textcalc classify [TEXT] [--file `<path>`] [--format `<format>`]  - Print the classified shape
//!   textcalc tokens [TEXT] [--file `<path>`] [--format `<format>`]    - Print the token dump
//!   textcalc renderings                                           - List stage-format spec strings

use clap::{Arg, ArgMatches, Command};
use textcalc::calc::processor::{available_renderings, process, RenderSpec};

fn main() {
    let matches = Command::new("textcalc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A calculator for delimited number expressions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(expression_command(
            "eval",
            "Evaluate an expression and print its sum",
        ))
        .subcommand(expression_command(
            "classify",
            "Classify an expression and print its shape",
        ))
        .subcommand(expression_command(
            "tokens",
            "Tokenize an expression and print the token dump",
        ))
        .subcommand(Command::new("renderings").about("List available stage-format spec strings"))
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("eval", eval_matches)) => handle_expression_command(eval_matches, "sum"),
        Some(("classify", classify_matches)) => handle_expression_command(classify_matches, "shape"),
        Some(("tokens", tokens_matches)) => handle_expression_command(tokens_matches, "tokens"),
        Some(("renderings", _)) => handle_renderings_command(),
        _ => unreachable!(),
    }
}

/// Build one of the three expression-taking subcommands
fn expression_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(
            Arg::new("text")
                .help("Expression text; omit (without --file) to evaluate absent input")
                .index(1),
        )
        .arg(
            Arg::new("file")
                .long("file")
                .help("Read the expression from a file instead")
                .conflicts_with("text"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'simple', 'json', 'yaml')")
                .default_value("simple"),
        )
}

/// Handle one expression subcommand against the given rendering stage
fn handle_expression_command(matches: &ArgMatches, stage: &str) {
    let text = expression_text(matches);
    let format = matches.get_one::<String>("format").unwrap();

    let spec = RenderSpec::from_string(&format!("{}-{}", stage, format)).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let output = process(text.as_deref(), &spec).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    println!("{}", output);
}

/// Resolve the expression text from the positional argument or --file
fn expression_text(matches: &ArgMatches) -> Option<String> {
    if let Some(path) = matches.get_one::<String>("file") {
        let content = std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading file: {}", e);
            std::process::exit(1);
        });
        // a final newline in a file is not part of the expression
        let content = content.strip_suffix('\n').unwrap_or(&content);
        let content = content.strip_suffix('\r').unwrap_or(content);
        return Some(content.to_string());
    }
    matches.get_one::<String>("text").cloned()
}

/// Handle the renderings command
fn handle_renderings_command() {
    println!("Available stage-format spec strings:\n");
    for rendering in available_renderings() {
        println!("  {}", rendering);
    }
}
