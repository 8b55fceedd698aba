use std::net::SocketAddr;

use anyhow::Result;
use clap::Args;

use libra_db::{schema, Connection};
use libra_web::{run_server, ServerConfig};

#[derive(Args, Debug)]
pub struct Init {}

impl Init {
    /// Install the schema into the database
    pub async fn run(self, db: &Connection) -> Result<()> {
        schema::install(db).await?;
        println!("Database schema installed.");
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct Serve {
    /// Address to listen on
    #[clap(long, env = "LIBRA_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,
    /// Accountant book shown on the dashboard by default
    #[clap(long, env = "LIBRA_BOOK", default_value = "General")]
    pub book: String,
}

impl Serve {
    pub async fn run(self, db: &Connection) -> Result<()> {
        schema::install(db).await?;
        let config = ServerConfig {
            bind_addr: self.bind,
            default_book: self.book,
        };
        run_server(db.clone(), config).await?;
        Ok(())
    }
}
