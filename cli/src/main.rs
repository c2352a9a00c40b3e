use clap::Parser;
use clap::Subcommand;
use lcia_cli::RunArgs;
use lcia_cli::run_main;
use tracing_subscriber::EnvFilter;

/// Submit a residential building model for life-cycle impact assessment and
/// render the results.
#[derive(Debug, Parser)]
#[clap(name = "lcia", version)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Assemble the payload, run the calculation, and write the reports.
    Run(RunArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Run(args) => run_main(args).await,
    }
}
