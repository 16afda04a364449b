use crate::demo::{
    run_demo, run_dime_estimate, run_final_expense_estimate, DemoArgs, DimeArgs, FinalExpenseArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use clearpath_life::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "ClearPath Life Platform",
    about = "Run the coverage estimation and lead intake service from the command line",
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
    /// Run a coverage estimate without starting the service
    Estimate {
        #[command(subcommand)]
        command: EstimateCommand,
    },
    /// Run an end-to-end CLI demo covering estimates and lead intake
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum EstimateCommand {
    /// Final-expense estimate for a service type and region
    FinalExpense(FinalExpenseArgs),
    /// DIME coverage-needs estimate
    Dime(DimeArgs),
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
        Command::Estimate {
            command: EstimateCommand::FinalExpense(args),
        } => run_final_expense_estimate(args),
        Command::Estimate {
            command: EstimateCommand::Dime(args),
        } => run_dime_estimate(args),
        Command::Demo(args) => run_demo(args),
    }
}
