use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};
use inquire::{Password, PasswordDisplayMode};

use libra_data::{Insert, Retrieve, User};
use libra_db::{users::authenticate, Connection};

use crate::formatting::PrintFormatted;

#[derive(Subcommand, Debug)]
pub enum Users {
    /// Add a dashboard user
    #[clap(name = "add")]
    Add(AddUser),
    /// Check a user's password
    #[clap(name = "verify")]
    Verify(VerifyUser),
}

impl Users {
    pub async fn run(self, db: &Connection) -> Result<()> {
        match self {
            Users::Add(cmd) => cmd.run(db).await,
            Users::Verify(cmd) => cmd.run(db).await,
        }
    }
}

#[derive(Args, Debug)]
pub struct AddUser {
    #[clap(short, long)]
    pub name: String,
    #[clap(short, long)]
    pub email: String,
}

impl AddUser {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let existing: Option<User> = db.retrieve(self.email.clone()).await?;
        if existing.is_some() {
            return Err(anyhow!("User with email {} already exists.", self.email));
        }

        let password = Password::new("Password:")
            .with_display_mode(PasswordDisplayMode::Masked)
            .prompt()?;
        if password.is_empty() {
            return Err(anyhow!("Password must not be empty."));
        }

        let user = db.insert(User::new(&self.name, &self.email, &password)).await?;
        println!();
        user.print_formatted();
        println!();
        println!("User added.");
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct VerifyUser {
    #[clap(short, long)]
    pub email: String,
}

impl VerifyUser {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let password = Password::new("Password:")
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt()?;

        match authenticate(db, &self.email, &password).await? {
            Some(user) => println!("Credentials valid for {}.", user.name),
            None => return Err(anyhow!("Invalid credentials.")),
        }
        Ok(())
    }
}
