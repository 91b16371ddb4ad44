
use clap::{Parser, Subcommand};

use crate::commands::{Accounts, Expenses, ShowDashboard, ShowSummary};

#[derive(Parser, Debug)]
#[clap(name = "kassa", version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[clap(long, default_value = "kassa.sqlite3")]
    pub db: String,

    #[clap(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn init() -> Self {
        Self::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage accounts
    #[clap(subcommand)]
    Account(Accounts),
    /// Manage expenses
    #[clap(subcommand)]
    Expense(Expenses),

    /// Show grouped expense totals
    #[clap(name = "summary")]
    Summary(ShowSummary),
    /// Show dashboard statistics
    #[clap(name = "dashboard")]
    Dashboard(ShowDashboard),
}
