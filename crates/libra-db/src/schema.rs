use anyhow::Result;

use crate::Connection;

const SCHEMA: &str = include_str!("../db/schema.sql");

/// Install the database schema. Safe to run on an existing database.
pub async fn install(conn: &Connection) -> Result<()> {
    tracing::info!("installing database schema");
    sqlx::raw_sql(SCHEMA).execute(conn.pool()).await?;
    Ok(())
}
