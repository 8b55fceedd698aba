use clap::{Parser, Subcommand};

use crate::commands::{Init, Members, Report, Serve, Transactions, Users};

#[derive(Parser, Debug)]
#[clap(name = "libra", version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// SQLite database file
    #[clap(long, env = "LIBRA_DB", default_value = "libra.sqlite3")]
    pub db: String,

    /// Enable debug logging
    #[clap(long, global = true)]
    pub debug: bool,

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
    /// Install the database schema
    #[clap(name = "init")]
    Init(Init),
    /// Run the dashboard web server
    #[clap(name = "serve")]
    Serve(Serve),
    /// Manage members
    #[clap(name = "members", subcommand)]
    Members(Members),
    /// Manage transactions
    #[clap(name = "transactions", subcommand)]
    Transactions(Transactions),
    /// Manage dashboard users
    #[clap(name = "users", subcommand)]
    Users(Users),
    /// Print dashboard reports
    #[clap(name = "report", subcommand)]
    Report(Report),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_nested_commands() {
        let cli = Cli::try_parse_from([
            "libra", "--db", "test.sqlite3", "transactions", "list", "--query", "rent", "--page", "2",
        ])
        .unwrap();
        assert_eq!(cli.db, "test.sqlite3");
        match cli.command {
            Command::Transactions(Transactions::List(cmd)) => {
                assert_eq!(cmd.query.as_deref(), Some("rent"));
                assert_eq!(cmd.page, 2);
            }
            other => panic!("unexpected command: {:?}", other),
        }

        let cli = Cli::try_parse_from(["libra", "report", "cards", "--book", "Club", "--debug"]).unwrap();
        assert!(cli.debug);
        assert!(matches!(cli.command, Command::Report(Report::Cards(_))));
    }
}
