use anyhow::Result;
use clap::{Args, Subcommand};
use inquire::Confirm;

use libra_data::{Insert, Member, MemberSearch, MembersTableRow, Query};
use libra_db::Connection;

use crate::formatting::PrintFormatted;

#[derive(Subcommand, Debug)]
pub enum Members {
    /// List members with their totals
    #[clap(name = "list")]
    List(ListMembers),
    /// Add a member
    #[clap(name = "add")]
    Add(AddMember),
}

impl Members {
    pub async fn run(self, db: &Connection) -> Result<()> {
        match self {
            Members::List(cmd) => cmd.run(db).await,
            Members::Add(cmd) => cmd.run(db).await,
        }
    }
}

#[derive(Args, Debug)]
pub struct ListMembers {
    /// Only members whose name contains this text
    #[clap(short, long)]
    pub query: Option<String>,
}

impl ListMembers {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let search = MemberSearch::new(self.query.unwrap_or_default());
        let members: Vec<MembersTableRow> = db.query(&search).await?;
        println!("{} members.", members.len());
        members.print_formatted();
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct AddMember {
    #[clap(short, long)]
    pub name: String,
    #[clap(short, long)]
    pub email: String,
    /// Avatar shown next to the member's transactions
    #[clap(short, long)]
    pub image_url: Option<String>,
    /// Do not ask for confirmation
    #[clap(short, long)]
    pub yes: bool,
}

impl AddMember {
    /// Run the command and add a member to the database
    pub async fn run(self, db: &Connection) -> Result<()> {
        let member = Member {
            name: self.name,
            email: self.email,
            image_url: self.image_url.unwrap_or_default(),
            ..Default::default()
        };

        println!();
        member.print_formatted();
        println!();

        if !self.yes {
            let confirm = Confirm::new("Add member?").with_default(true);
            if !confirm.prompt()? {
                return Ok(());
            }
        }

        let member = db.insert(member).await?;
        println!("Member added with id {}.", member.id);
        Ok(())
    }
}
