use crate::{pkg::server::listen, prelude::Result};
use clap::{Parser, Subcommand};

pub(crate) mod migrate;

#[derive(Parser)]
#[command(name = "hustlink", about = "hustlink job board services")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    /// Serve the job board (the default when no subcommand is given)
    Listen,
    /// Apply pending database migrations and exit
    Migrate,
}

pub async fn run() -> Result<()> {
    let args = Cmd::parse();
    match args.command.unwrap_or(SubCommandType::Listen) {
        SubCommandType::Listen => listen().await,
        SubCommandType::Migrate => migrate::apply().await,
    }
}
