
use anyhow::Result;

use kassa_db::Connection;

mod cli;
mod commands;
mod formatting;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::init();

    let conn = Connection::open(&cli.db).await?;
    match cli.command {
        Command::Account(cmd) => cmd.run(&conn).await,
        Command::Expense(cmd) => cmd.run(&conn).await,
        Command::Summary(cmd) => cmd.run(&conn).await,
        Command::Dashboard(cmd) => cmd.run(&conn).await,
    }?;

    Ok(())
}
