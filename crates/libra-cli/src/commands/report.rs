use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};

use libra_data::{CardData, CardScope, CostSeries, DailyCost, Query, Summarize};
use libra_db::Connection;

use crate::formatting::PrintFormatted;

#[derive(Subcommand, Debug)]
pub enum Report {
    /// Summary cards for an accountant book
    #[clap(name = "cards")]
    Cards(CardsReport),
    /// Daily cost of the last 14 days
    #[clap(name = "costs")]
    Costs(CostsReport),
}

impl Report {
    pub async fn run(self, db: &Connection) -> Result<()> {
        match self {
            Report::Cards(cmd) => cmd.run(db).await,
            Report::Costs(cmd) => cmd.run(db).await,
        }
    }
}

#[derive(Args, Debug)]
pub struct CardsReport {
    #[clap(short, long, default_value = "General")]
    pub book: String,
    /// First day of the range (needs --end)
    #[clap(short, long, requires = "end")]
    pub start: Option<NaiveDate>,
    /// Last day of the range (needs --start)
    #[clap(short, long, requires = "start")]
    pub end: Option<NaiveDate>,
}

impl CardsReport {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let scope = CardScope::new(self.book).with_range(self.start, self.end);
        let data: CardData = db.summarize(&scope).await?;

        println!("Accountant book:\t{}", scope.accountant_book);
        if let Some(period) = &scope.period {
            println!("Period:\t\t\t{} to {}", period.start, period.end);
        }
        data.print_formatted();
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct CostsReport {
    #[clap(short, long, default_value = "General")]
    pub book: String,
    /// Last day of the series, defaults to today
    #[clap(short, long)]
    pub until: Option<NaiveDate>,
}

impl CostsReport {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let series = CostSeries {
            until: self.until,
            ..CostSeries::new(self.book)
        };
        let costs: Vec<DailyCost> = db.query(&series).await?;
        costs.print_formatted();
        Ok(())
    }
}
