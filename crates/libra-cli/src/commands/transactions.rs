use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};
use inquire::Confirm;

use libra_data::{Delete, Paginate, Query, Retrieve, Transaction, TransactionSearch, TransactionsTableRow};
use libra_db::Connection;

use crate::formatting::PrintFormatted;

#[derive(Subcommand, Debug)]
pub enum Transactions {
    /// List transactions, newest first
    #[clap(name = "list")]
    List(ListTransactions),
    /// Delete a transaction
    #[clap(name = "delete")]
    Delete(DeleteTransaction),
}

impl Transactions {
    pub async fn run(self, db: &Connection) -> Result<()> {
        match self {
            Transactions::List(cmd) => cmd.run(db).await,
            Transactions::Delete(cmd) => cmd.run(db).await,
        }
    }
}

#[derive(Args, Debug)]
pub struct ListTransactions {
    /// Search member, amount, date, status, book, class and text fields
    #[clap(short, long)]
    pub query: Option<String>,
    #[clap(short, long, default_value_t = 1)]
    pub page: u32,
}

impl ListTransactions {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let search = TransactionSearch::new(self.query.unwrap_or_default(), self.page);
        let transactions: Vec<TransactionsTableRow> = db.query(&search).await?;
        let pages = Paginate::<TransactionsTableRow>::pages(db, &search).await?;

        transactions.print_formatted();
        println!();
        println!("Page {} of {}.", search.pagination().page, pages);
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct DeleteTransaction {
    #[clap(short, long)]
    pub id: String,
}

impl DeleteTransaction {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let tx: Option<Transaction> = db.retrieve(self.id.clone()).await?;
        let tx = tx.ok_or_else(|| anyhow!("transaction {} not found", self.id))?;

        println!();
        tx.print_formatted();
        println!();
        let confirm = Confirm::new("Delete transaction from database?").with_default(false);
        if !confirm.prompt()? {
            return Ok(());
        }

        db.delete(tx).await?;
        println!("Transaction deleted.");
        Ok(())
    }
}
