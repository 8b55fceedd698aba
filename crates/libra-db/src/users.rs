use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite};

use libra_data::{Insert, QueryError, Result, Retrieve, User};

use crate::{
    results::{failed, new_id},
    Connection,
};

#[async_trait]
impl Retrieve<User> for Connection {
    /// Users are looked up by email
    type Key = String;

    async fn retrieve(&self, email: Self::Key) -> Result<Option<User>> {
        sqlx::query_as("SELECT id, name, email, password FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(self.pool())
            .await
            .map_err(failed("failed to fetch user"))
    }
}

#[async_trait]
impl Insert<User> for Connection {
    async fn insert(&self, user: User) -> Result<User> {
        let id = new_id(&user.id);
        let mut qry = QueryBuilder::<Sqlite>::new("INSERT INTO users (id, name, email, password) VALUES (");
        qry.separated(", ")
            .push_bind(&id)
            .push_bind(&user.name)
            .push_bind(&user.email)
            .push_bind(&user.password);
        qry.push(")")
            .build()
            .execute(self.pool())
            .await
            .map_err(failed("failed to create user"))?;

        let stored: Option<User> = self.retrieve(user.email).await?;
        stored.ok_or_else(|| QueryError::not_found("user"))
    }
}

/// Look up a user by email and check the password.
/// Unknown users and wrong passwords both give `None`.
pub async fn authenticate(db: &Connection, email: &str, password: &str) -> Result<Option<User>> {
    let user: Option<User> = db.retrieve(email.to_string()).await?;
    Ok(user.filter(|user| user.verify_password(password)))
}
