use clap::{Parser, Subcommand};
use sitecalc::config::DisplayConfig;
use sitecalc::eval;
use sitecalc::format;
use sitecalc::units;
use sitecalc::units::Evaluation;

#[derive(Parser)]
#[command(name = "sitecalc")]
#[command(about = "Construction measurement expression evaluator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a measurement or arithmetic expression
    Eval {
        /// Expression, e.g. "5 1/2 + 3 1/4" or "2' 6 - 1'"
        expression: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Display config file (TOML)
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Evaluate a structured operand/operator/operand triple
    Parts {
        /// Left operand, e.g. "3 1/4"
        a: String,

        /// Operator: + - * /
        op: String,

        /// Right operand, e.g. "5 3/8"
        b: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse a single measurement token into decimal inches
    Parse {
        /// Token, e.g. "3' 5 1/2"
        token: String,
    },

    /// Format a decimal inch value in both display forms
    Fmt {
        /// Value in inches
        inches: f64,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Eval {
            expression,
            json,
            config,
        } => match run_eval(&expression, json, config.as_deref()) {
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Commands::Parts { a, op, b, json } => match run_parts(&a, &op, &b, json) {
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Commands::Parse { token } => {
            println!("{}", units::parse_quantity(&token));
        }
        Commands::Fmt { inches } => {
            println!("{}", format::format_feet_inches(inches));
            println!("{}", format::format_total_inches(inches));
        }
    }
}

fn run_eval(
    expression: &str,
    json: bool,
    config_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = match config_path {
        Some(path) => DisplayConfig::load_from_file(path)?,
        None => DisplayConfig::default(),
    };

    let result = eval::evaluate(expression)?;
    print_result(&result, json, &config)
}

fn run_parts(a: &str, op: &str, b: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let result = eval::evaluate_parts(a, op, b)?;
    print_result(&result, json, &DisplayConfig::default())
}

fn print_result(
    result: &Evaluation,
    json: bool,
    config: &DisplayConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    println!("{}", result.display);
    if result.measurement && config.show_total_inches {
        println!("{}", result.total_inches);
    }
    if config.show_value {
        println!("= {}", format::format_number(result.value));
    }

    Ok(())
}
