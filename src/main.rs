use calculator::Calculator;
use clap::Parser;
use tracing::info;

/// Evaluate an arithmetic expression or solve a linear equation in x.
#[derive(Debug, Parser)]
#[command(name = "calculator")]
#[command(after_help = "Examples:
  calculator 3 + 4*5
  calculator \"x + 5 = 11\"")]
#[command(version)]
struct Cli {
    /// Print the tokens, postfix form and final polynomial to stderr
    #[arg(short, long)]
    verbose: bool,

    /// The expression, its parts are joined together without spaces
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expression: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.expression.is_empty() {
        println!("Usage: calculator \"expression\"");
        println!("Example: calculator 3 + 4*5");
        return;
    }

    let expression = cli.expression.concat();
    info!(%expression, "Evaluating expression");

    let calc = Calculator::new().verbose(cli.verbose);
    println!("Result: {}", calc.eval(&expression));
}
