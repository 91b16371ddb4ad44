
use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use inquire::Confirm;

use kassa_data::{
    Account, AccountKey, Category, Delete, Expense, ExpenseFilter,
    ExpenseInput, Insert, Query, Retrieve, Update,
};
use kassa_db::Connection;
use kassa_reports::datetime;

use crate::formatting::PrintFormatted;

/// Resolve the account a command acts for.
pub async fn account_for(db: &Connection, username: &str) -> Result<Account> {
    let account: Option<Account> = db
        .retrieve(AccountKey::Username(username.to_string()))
        .await?;
    account.ok_or_else(|| anyhow!("no account named {}", username))
}

#[derive(Subcommand, Debug)]
pub enum Expenses {
    /// Record an expense
    #[clap(name = "add")]
    Add(AddExpense),
    /// List expenses
    #[clap(name = "list")]
    List(ListExpenses),
    /// Update an expense
    #[clap(name = "set")]
    Update(UpdateExpense),
    /// Delete an expense
    #[clap(name = "delete")]
    Delete(DeleteExpense),
}

impl Expenses {
    pub async fn run(self, db: &Connection) -> Result<()> {
        match self {
            Expenses::Add(cmd) => cmd.run(db).await,
            Expenses::List(cmd) => cmd.run(db).await,
            Expenses::Update(cmd) => cmd.run(db).await,
            Expenses::Delete(cmd) => cmd.run(db).await,
        }
    }
}

#[derive(Args, Debug)]
pub struct AddExpense {
    #[clap(short, long)]
    pub user: String,
    #[clap(short, long)]
    pub amount: String,
    #[clap(short, long)]
    pub category: String,
    /// Defaults to today
    #[clap(short, long)]
    pub date: Option<String>,
    #[clap(short, long)]
    pub note: Option<String>,
}

impl AddExpense {
    /// Run the command and record an expense
    pub async fn run(self, db: &Connection) -> Result<()> {
        let account = account_for(db, &self.user).await?;

        let input = ExpenseInput {
            amount: self.amount,
            category: self.category,
            date: self.date.unwrap_or_else(|| datetime::today().to_string()),
            note: self.note,
        };
        let expense = input.validate(account.id)?;

        let expense = db.insert(expense).await?;
        println!("Expense added with id {}.", expense.id);
        println!("");
        expense.print_formatted();
        println!("");

        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct ListExpenses {
    #[clap(short, long)]
    pub user: String,
    #[clap(short, long)]
    pub category: Option<Category>,
    #[clap(short, long)]
    pub after_date: Option<NaiveDate>,
    #[clap(short, long)]
    pub before_date: Option<NaiveDate>,
}

impl ListExpenses {
    /// Run the command and list expenses
    pub async fn run(self, db: &Connection) -> Result<()> {
        let account = account_for(db, &self.user).await?;

        let filter = ExpenseFilter {
            account_id: Some(account.id),
            category: self.category,
            date_after: self.after_date,
            date_before: self.before_date,
            ..Default::default()
        };

        let expenses: Vec<Expense> = db.query(&filter).await?;
        println!("{} expenses.", expenses.len());
        expenses.print_formatted();

        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct UpdateExpense {
    #[clap(short, long)]
    pub user: String,
    #[clap(short, long)]
    pub id: u32,
    #[clap(short, long)]
    pub amount: Option<String>,
    #[clap(short, long)]
    pub category: Option<String>,
    #[clap(short, long)]
    pub date: Option<String>,
    #[clap(short, long)]
    pub note: Option<String>,
}

impl UpdateExpense {
    /// Run command and update an expense
    pub async fn run(self, db: &Connection) -> Result<()> {
        let account = account_for(db, &self.user).await?;

        let expense: Option<Expense> =
            db.retrieve((self.id, account.id)).await?;
        let expense = expense
            .ok_or_else(|| anyhow!("no expense with id {}", self.id))?;

        // Overlay the given fields and revalidate the lot.
        let input = ExpenseInput {
            amount: self.amount.unwrap_or_else(|| expense.amount.to_string()),
            category: self
                .category
                .unwrap_or_else(|| expense.category.to_string()),
            date: self.date.unwrap_or_else(|| expense.date.to_string()),
            note: Some(self.note.unwrap_or_else(|| expense.note.clone())),
        };
        let mut update = input.validate(account.id)?;
        update.id = expense.id;

        println!("");
        update.print_formatted();
        println!("");
        let confirm = Confirm::new("Update expense?").with_default(true);
        if !confirm.prompt()? {
            return Ok(());
        }

        db.update(update)
            .await?
            .ok_or_else(|| anyhow!("no expense with id {}", self.id))?;

        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct DeleteExpense {
    #[clap(short, long)]
    pub user: String,
    #[clap(short, long)]
    pub id: u32,
}

impl DeleteExpense {
    pub async fn run(&self, db: &Connection) -> Result<()> {
        let account = account_for(db, &self.user).await?;

        let expense: Option<Expense> =
            db.retrieve((self.id, account.id)).await?;
        let expense = expense
            .ok_or_else(|| anyhow!("no expense with id {}", self.id))?;

        println!("");
        expense.print_formatted();
        println!("");
        let confirm = Confirm::new("Delete expense from database?")
            .with_default(true);
        if !confirm.prompt()? {
            return Ok(());
        }
        db.delete(expense).await?;
        Ok(())
    }
}
