use anyhow::Result;

use libra_db::Connection;

mod cli;
mod commands;
mod formatting;
mod tracing_setup;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::init();
    tracing_setup::init_tracing(cli.debug)?;

    tracing::debug!(db = %cli.db, "opening database");
    let conn = Connection::open(&cli.db).await?;
    let result = match cli.command {
        Command::Init(cmd) => cmd.run(&conn).await,
        Command::Serve(cmd) => cmd.run(&conn).await,
        Command::Members(cmd) => cmd.run(&conn).await,
        Command::Transactions(cmd) => cmd.run(&conn).await,
        Command::Users(cmd) => cmd.run(&conn).await,
        Command::Report(cmd) => cmd.run(&conn).await,
    };
    conn.close().await;

    result
}
