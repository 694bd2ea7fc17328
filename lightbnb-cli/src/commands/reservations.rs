//! `lightbnb reservations`

use anyhow::{Context, Result};
use clap::Parser;
use lightbnb_db::{LightBnb, Limit};

use super::print_json;

#[derive(Parser, Debug)]
pub struct ReservationsArgs {
    /// Guest (user) id
    pub guest_id: i32,

    /// Maximum rows to return
    #[arg(long, default_value_t = 10)]
    pub limit: u32,
}

pub async fn run_reservations(db: &LightBnb, args: ReservationsArgs) -> Result<()> {
    let rows = db
        .get_all_reservations(args.guest_id, Limit::new(args.limit))
        .await
        .context("Failed to list reservations")?;
    print_json(&rows)
}
