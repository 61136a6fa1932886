use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use infix_calculator::interpreter::error::EvaluationError;
use infix_calculator::interpreter::{evaluator, lexer, parser, tokens_to_string};
use log::debug;
use rustyline::error::ReadlineError;
use rustyline::Editor;

/// Evaluates arithmetic expressions
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate; starts an interactive session when omitted
    expression: Option<String>,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    match args.expression {
        Some(expression) => evaluate_once(&expression),
        None => run_session(),
    }
}

/// Evaluates a single expression given on the command line. There is no
/// session, so `ans` is never available here.
fn evaluate_once(expression: &str) -> Result<()> {
    if let Some(result) = evaluate_expression(expression, None)? {
        println!("{}", format_result(result));
    }
    Ok(())
}

/// Runs the interactive read-evaluate-print loop until the user exits.
fn run_session() -> Result<()> {
    let mut editor = Editor::<()>::new().context("Failed to initialize the line editor")?;
    let mut history: Vec<f64> = Vec::new();

    println!("=== CLI Calculator ===");
    println!("Type your expression and press Enter.");
    println!("Special Commands: 'history', 'clear', 'exit', 'quit'");
    println!("Use 'ans' to refer to the last result.");

    loop {
        let line = match editor.readline("\ncalc > ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(error) => return Err(error).context("Failed to read input"),
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        editor.add_history_entry(input);

        match input.to_lowercase().as_str() {
            "exit" | "quit" => {
                println!("Goodbye!");
                break;
            }
            "history" => print_history(&history),
            "clear" => {
                history.clear();
                println!("History cleared.");
            }
            _ => match evaluate_expression(input, history.last().copied()) {
                Ok(Some(result)) => {
                    println!("Result: {}", format_result(result));
                    history.push(result);
                }
                Ok(None) => {}
                Err(error) => println!("Error: {}", error),
            },
        }
    }
    Ok(())
}

/// Runs the full tokenize-convert-evaluate pipeline on one expression,
/// logging the intermediate token sequences.
fn evaluate_expression(
    expression: &str,
    last_result: Option<f64>,
) -> Result<Option<f64>, EvaluationError> {
    let tokens = lexer::tokenize(expression);
    debug!("tokens: {}", tokens_to_string(&tokens).unwrap_or_default());
    let postfix_tokens = parser::convert_to_postfix(tokens, last_result)?;
    debug!(
        "postfix: {}",
        tokens_to_string(&postfix_tokens).unwrap_or_default()
    );
    evaluator::evaluate_postfix(postfix_tokens)
}

fn print_history(history: &[f64]) {
    if history.is_empty() {
        println!("History is empty.");
        return;
    }
    println!("History (from oldest to newest):");
    for (index, result) in history.iter().enumerate() {
        println!("{}: {}", index + 1, format_result(*result));
    }
}

/// Integral values display without a fractional part; the stored value
/// stays a float either way.
fn format_result(result: f64) -> String {
    if result == result.trunc() {
        format!("{:.0}", result)
    } else {
        result.to_string()
    }
}
