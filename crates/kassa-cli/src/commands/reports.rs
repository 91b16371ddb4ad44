
use anyhow::Result;
use clap::Args;

use kassa_db::Connection;
use kassa_reports::dashboard;
use kassa_reports::datetime;
use kassa_reports::summary::{group_and_sum, round2, GroupBy, GroupTotal};

use crate::commands::account_for;
use crate::formatting::PrintFormatted;

#[derive(Args, Debug)]
pub struct ShowSummary {
    #[clap(short, long)]
    pub user: String,
    #[clap(short, long, default_value = "category")]
    pub group_by: GroupBy,
}

impl ShowSummary {
    /// Run the command and print grouped totals
    pub async fn run(self, db: &Connection) -> Result<()> {
        let account = account_for(db, &self.user).await?;
        let expenses = account.get_expenses(db).await?;

        let groups: Vec<GroupTotal> = group_and_sum(&expenses, self.group_by);
        let total = round2(groups.iter().map(|g| g.total).sum());

        groups.print_formatted();
        println!("{:-<60}", "-");
        println!("{:<40}\t{:>12.2}", "Total", total);

        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct ShowDashboard {
    #[clap(short, long)]
    pub user: String,
}

impl ShowDashboard {
    /// Run the command and print dashboard statistics
    pub async fn run(self, db: &Connection) -> Result<()> {
        let account = account_for(db, &self.user).await?;
        let expenses = account.get_expenses(db).await?;

        let stats = dashboard::compute(&expenses, datetime::today());
        println!("");
        stats.print_formatted();
        println!("");

        Ok(())
    }
}
