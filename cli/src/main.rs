mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{opts::Opts, subs::SubCommands};

#[tokio::main]
async fn main() -> Result<()> {
    let opts = Opts::parse();
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_env("RUST_LOG")
        .init();

    match &opts.commands {
        SubCommands::Test => cli::test(&opts),
        SubCommands::Package => cli::package(&opts),
        SubCommands::Upload(sub) => cli::upload(&opts, sub).await,
        SubCommands::Run(sub) => cli::run(sub).await,
    }?;
    Ok(())
}
