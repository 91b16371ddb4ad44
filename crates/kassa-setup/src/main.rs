use anyhow::Result;

use clap::{Parser, Subcommand};

use kassa_db::{schema, Connection};

#[derive(Parser, Debug)]
#[clap(name = "kassa-setup")]
struct Cli {
    #[clap(default_value = "kassa.sqlite3")]
    pub db: String,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Init,
}

/// Initialize the database
async fn db_init(filename: &str) -> Result<()> {
    let conn = Connection::open(filename).await?;
    schema::install(&conn).await?;
    println!("database schema installed in {}", filename);

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Init => db_init(&cli.db).await?,
    }
    Ok(())
}
