use crate::lookup::{
    run_check, run_county, run_reference, run_resolve, run_utility, CheckArgs, CountyArgs,
    ResolveArgs, UtilityArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use vpp_eligibility::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "VPP Texas Eligibility",
    about = "Check Texas addresses against the energy community and utility tables",
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
    /// Check a structured address for program eligibility
    Check(CheckArgs),
    /// Look up the utility territory serving a zip code
    Utility(UtilityArgs),
    /// Look up a county's energy community status
    County(CountyArgs),
    /// Resolve free text or coordinates with the configured geocoder, then check it
    Resolve(ResolveArgs),
    /// Summarize the loaded reference tables
    Reference,
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
        Command::Check(args) => run_check(args),
        Command::Utility(args) => run_utility(args),
        Command::County(args) => run_county(args),
        Command::Resolve(args) => run_resolve(args).await,
        Command::Reference => run_reference(),
    }
}
