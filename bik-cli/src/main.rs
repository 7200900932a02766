mod logging;
mod report;

use std::process;

use bik_core::{EmployeeInput, simulate};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::error;

/// Housing benefit-in-kind payroll simulator.
#[derive(Parser)]
#[command(
    name = "bik",
    version,
    about = "Simulates converting part of a cash salary into an in-kind housing benefit",
    long_about = "Computes before/after payroll profiles for a salary-to-housing-benefit \
                  restructuring and reports the monthly disposable-income effect, broken \
                  into income-tax, social-insurance, and resident-tax components."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "text", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one simulation from an eight-field message
    Simulate(SimulateArgs),
}

#[derive(Args)]
struct SimulateArgs {
    /// The eight fields separated by 、 or , in order:
    /// age、marital status (あり/なし)、dependents、region、living space
    /// (tatami)、monthly rent、monthly salary、annual bonus
    message: String,
}

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn run_simulate(
    args: &SimulateArgs,
    output: &OutputFormat,
) -> anyhow::Result<String> {
    let fields: Vec<&str> = args.message.split(['、', ',']).collect();
    let input = EmployeeInput::from_fields(&fields)?;
    let result = simulate(&input)?;

    Ok(match output {
        OutputFormat::Text => report::render(&input, &result),
        OutputFormat::Json => serde_json::to_string_pretty(&result)?,
    })
}

fn main() {
    logging::init_default_logging();

    let cli = Cli::parse();
    let result = match &cli.command {
        Commands::Simulate(args) => run_simulate(args, &cli.output),
    };

    match result {
        Ok(rendered) => println!("{rendered}"),
        Err(error) => {
            error!(%error, "simulation rejected");
            eprintln!("error: {error}");
            process::exit(1);
        }
    }
}
