//! Command implementations for the lightbnb CLI

use anyhow::Result;
use clap::Subcommand;
use lightbnb_db::LightBnb;
use serde::Serialize;

pub mod property;
pub mod reservations;
pub mod user;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up a user by email or id, or add one
    User(user::UserArgs),
    /// List a guest's reservations, earliest first
    Reservations(reservations::ReservationsArgs),
    /// Search properties, cheapest first
    Properties(property::SearchArgs),
    /// Add a property
    Property(property::PropertyArgs),
}

pub async fn run(db: &LightBnb, command: Commands) -> Result<()> {
    match command {
        Commands::User(args) => user::run_user(db, args).await,
        Commands::Reservations(args) => reservations::run_reservations(db, args).await,
        Commands::Properties(args) => property::run_search(db, args).await,
        Commands::Property(args) => property::run_property(db, args).await,
    }
}

/// Pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
