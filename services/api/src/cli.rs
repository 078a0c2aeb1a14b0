use crate::demo::{run_demo, run_rate, DemoArgs, RateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use nutriscore::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "NutriScore Service",
    about = "Run the personalized nutrition rating service and demos from the command line",
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
    /// Rate meals from a CSV export against an optional health profile
    Rate(RateArgs),
    /// Run an end-to-end demo comparing restricted and unrestricted profiles
    Demo(DemoArgs),
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
        Command::Rate(args) => run_rate(args),
        Command::Demo(args) => run_demo(args),
    }
}
