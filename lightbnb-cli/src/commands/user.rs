//! `lightbnb user` - lookups and sign-up

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lightbnb_db::{LightBnb, NewUser};

use super::print_json;

#[derive(Parser, Debug)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommand,
}

#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// Find a user by exact email (prints null when absent)
    Email {
        /// Email address to look up
        email: String,
    },
    /// Find a user by id (prints null when absent)
    Id {
        /// User id
        id: i32,
    },
    /// Add a user; the email must not be taken
    Add {
        /// Display name
        #[arg(long)]
        name: String,
        /// Email address (unique)
        #[arg(long)]
        email: String,
        /// Password hash, stored as given
        #[arg(long)]
        password: String,
    },
}

pub async fn run_user(db: &LightBnb, args: UserArgs) -> Result<()> {
    match args.command {
        UserCommand::Email { email } => {
            let user = db
                .get_user_with_email(&email)
                .await
                .context("User lookup failed")?;
            print_json(&user)
        }
        UserCommand::Id { id } => {
            let user = db.get_user_with_id(id).await.context("User lookup failed")?;
            print_json(&user)
        }
        UserCommand::Add {
            name,
            email,
            password,
        } => {
            let user = db
                .add_user(&NewUser::new(name, email, password))
                .await
                .context("Failed to add user")?;
            print_json(&user)
        }
    }
}
