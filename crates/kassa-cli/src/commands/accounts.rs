
use anyhow::Result;
use clap::{Args, Subcommand};
use inquire::Password;

use kassa_data::{Account, AccountFilter, Insert, Query};
use kassa_db::Connection;

use crate::formatting::PrintFormatted;

#[derive(Subcommand, Debug)]
pub enum Accounts {
    /// Register an account
    #[clap(name = "add")]
    Add(AddAccount),
    /// List accounts
    #[clap(name = "list")]
    List(ListAccounts),
}

impl Accounts {
    pub async fn run(self, db: &Connection) -> Result<()> {
        match self {
            Accounts::Add(cmd) => cmd.run(db).await,
            Accounts::List(cmd) => cmd.run(db).await,
        }
    }
}

#[derive(Args, Debug)]
pub struct AddAccount {
    #[clap(short, long)]
    pub username: String,
    /// Prompted for when not given
    #[clap(short, long)]
    pub password: Option<String>,
}

impl AddAccount {
    /// Run the command and register an account
    pub async fn run(self, db: &Connection) -> Result<()> {
        let password = match self.password {
            Some(password) => password,
            None => Password::new("Password:").prompt()?,
        };

        let account = db.insert(Account::new(&self.username, &password)).await?;
        println!("Account added with id {}.", account.id);

        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct ListAccounts {
    #[clap(short, long)]
    pub id: Option<u32>,
    #[clap(short, long)]
    pub username: Option<String>,
}

impl ListAccounts {
    /// Run the command and list accounts
    pub async fn run(self, db: &Connection) -> Result<()> {
        let filter = AccountFilter {
            id: self.id,
            username: self.username,
        };

        let accounts: Vec<Account> = db.query(&filter).await?;
        println!("{} accounts.", accounts.len());
        accounts.print_formatted();

        Ok(())
    }
}
