//! Command-line front end for the safe arithmetic engine.
//!
//! ```text
//! safe-calc eval divide 10 4
//! safe-calc eval factorial 5 --decorated --pretty
//! safe-calc check -3.5 --non-negative --label Quantity
//! safe-calc list
//! ```

use clap::{Args, Parser, Subcommand};
use safe_calc::api::ErrorResponse;
use safe_calc::application::services::commands;
use safe_calc::application::{ApplicationError, ApplicationResult, Calculator};
use safe_calc::domain::validation::ValidationPolicy;
use safe_calc::domain::value_objects::{Operation, RawValue};
use safe_calc::infrastructure::config::{OutputSettings, Settings};
use safe_calc::infrastructure::logging::{self, TracingSink};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

/// Exit status for a rejected calculation or value.
const EXIT_REJECTED: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "safe-calc", version, about = "Validated arithmetic on the command line")]
struct Cli {
    /// Settings file (TOML). Defaults to ./safe-calc.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run an operation
    Eval(EvalArgs),
    /// Validate a single value against a policy
    Check(CheckArgs),
    /// List supported operations
    List,
}

#[derive(Debug, Args)]
struct EvalArgs {
    /// Operation name or alias (e.g. `add`, `pow`, `abs`)
    operation: String,

    /// Operands, one for unary and two for binary operations
    #[arg(allow_negative_numbers = true, num_args = 1..)]
    operands: Vec<String>,

    /// Print a JSON record with timestamp and calculation id
    #[arg(long)]
    decorated: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// Value to validate
    #[arg(allow_negative_numbers = true)]
    value: String,

    /// Name used in the failure reason
    #[arg(long, default_value = "Value")]
    label: String,

    /// Accept +/-Infinity and drop the default bounds
    #[arg(long)]
    allow_infinity: bool,

    /// Reject negative values
    #[arg(long)]
    non_negative: bool,

    /// Require an integral value
    #[arg(long)]
    integer: bool,

    /// Inclusive lower bound
    #[arg(long, allow_negative_numbers = true)]
    min: Option<f64>,

    /// Inclusive upper bound
    #[arg(long, allow_negative_numbers = true)]
    max: Option<f64>,
}

impl CheckArgs {
    fn policy(&self) -> ValidationPolicy {
        let mut policy = ValidationPolicy::new(&self.label)
            .with_allow_infinity(self.allow_infinity)
            .with_allow_negative(!self.non_negative)
            .with_require_integer(self.integer);
        if self.allow_infinity {
            policy = policy.unbounded();
        }
        if let Some(min) = self.min {
            policy = policy.with_min(min);
        }
        if let Some(max) = self.max {
            policy = policy.with_max(max);
        }
        policy
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => Ok(code),
        Err(err) if err.is_client_error() => {
            eprintln!("error: {err}");
            Ok(ExitCode::from(EXIT_REJECTED))
        }
        Err(err) => Err(anyhow::Error::new(err).context("safe-calc failed")),
    }
}

fn run(cli: Cli) -> ApplicationResult<ExitCode> {
    let settings = Settings::load_from(cli.config.as_deref())?;
    logging::init(&settings.logging)?;

    let calculator = Calculator::new().with_sink(Arc::new(TracingSink));

    match cli.command {
        Command::Eval(args) => eval(&calculator, &args, settings.output),
        Command::Check(args) => check(&args),
        Command::List => {
            list();
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn eval(
    calculator: &Calculator,
    args: &EvalArgs,
    output: OutputSettings,
) -> ApplicationResult<ExitCode> {
    let operands: Vec<RawValue> =
        args.operands.iter().map(|s| RawValue::from(s.as_str())).collect();
    let decorated = args.decorated || output.decorated;
    let pretty = args.pretty || output.pretty;

    match commands::evaluate(calculator, &args.operation, &operands, decorated) {
        Ok(outcome) => {
            println!("{}", outcome.render(pretty)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => match err.as_calculation() {
            Some(calculation) => {
                let body = ErrorResponse::from(calculation);
                eprintln!("{}", body.to_json(pretty)?);
                Ok(ExitCode::from(EXIT_REJECTED))
            }
            None => Err(err),
        },
    }
}

fn check(args: &CheckArgs) -> ApplicationResult<ExitCode> {
    match commands::check(&RawValue::from(args.value.as_str()), &args.policy()) {
        Ok(number) => {
            println!("valid: {number}");
            Ok(ExitCode::SUCCESS)
        }
        Err(ApplicationError::Validation(failure)) => {
            println!("invalid: {failure}");
            Ok(ExitCode::from(EXIT_REJECTED))
        }
        Err(err) => Err(err),
    }
}

fn list() {
    for operation in Operation::ALL {
        println!(
            "{:<10} {:<7} {}",
            operation.name(),
            operation.arity(),
            operation.description()
        );
    }
}
