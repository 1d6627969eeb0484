use crate::report::{
    run_calculate, run_preset, run_quick, run_scenario, CalculateArgs, PresetArgs, QuickArgs,
    ScenarioArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use yard_roi::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Yard ROI",
    about = "Value yard-automation programs and serve the ROI calculator API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Value a full scenario read from a JSON file
    Calculate(CalculateArgs),
    /// Value a scenario from the six quick-mode fields
    Quick(QuickArgs),
    /// Value one of the canned scenario/mode presets
    Preset(PresetArgs),
    /// Value a scenario with capacity unlocked and discounted finance figures
    Scenario(ScenarioArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Calculate(args) => run_calculate(args),
        Command::Quick(args) => run_quick(args),
        Command::Preset(args) => run_preset(args),
        Command::Scenario(args) => run_scenario(args),
    }
}
