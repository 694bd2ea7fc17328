//! `lightbnb properties` (search) and `lightbnb property add`

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use lightbnb_db::{LightBnb, Limit, NewProperty, PropertySearch};

use super::print_json;

#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Only properties of this owner
    #[arg(long)]
    pub owner_id: Option<i32>,

    /// City contains this text
    #[arg(long)]
    pub city: Option<String>,

    /// Minimum price per night, whole currency units
    #[arg(long = "min-price", value_name = "AMOUNT")]
    pub minimum_price_per_night: Option<u32>,

    /// Maximum price per night, whole currency units
    #[arg(long = "max-price", value_name = "AMOUNT")]
    pub maximum_price_per_night: Option<u32>,

    /// Minimum average review rating
    #[arg(long = "min-rating", value_name = "RATING")]
    pub minimum_rating: Option<f64>,

    /// Maximum rows to return
    #[arg(long, default_value_t = 10)]
    pub limit: u32,
}

impl SearchArgs {
    fn search(&self) -> PropertySearch {
        PropertySearch {
            owner_id: self.owner_id,
            city: self.city.clone(),
            minimum_price_per_night: self.minimum_price_per_night,
            maximum_price_per_night: self.maximum_price_per_night,
            minimum_rating: self.minimum_rating,
        }
    }
}

pub async fn run_search(db: &LightBnb, args: SearchArgs) -> Result<()> {
    let rows = db
        .get_all_properties(&args.search(), Limit::new(args.limit))
        .await
        .context("Property search failed")?;
    print_json(&rows)
}

#[derive(Parser, Debug)]
pub struct PropertyArgs {
    #[command(subcommand)]
    pub command: PropertyCommand,
}

#[derive(Subcommand, Debug)]
pub enum PropertyCommand {
    /// Add an active property
    Add(AddPropertyArgs),
}

#[derive(Args, Debug)]
pub struct AddPropertyArgs {
    /// Owning user id
    #[arg(long)]
    pub owner_id: i32,
    #[arg(long)]
    pub title: String,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long)]
    pub thumbnail_photo_url: String,
    #[arg(long)]
    pub cover_photo_url: String,
    /// Price per night in cents
    #[arg(long, value_name = "CENTS")]
    pub cost_per_night: i32,
    #[arg(long, default_value_t = 0)]
    pub parking_spaces: i32,
    #[arg(long, default_value_t = 0)]
    pub number_of_bathrooms: i32,
    #[arg(long, default_value_t = 0)]
    pub number_of_bedrooms: i32,
    #[arg(long)]
    pub country: String,
    #[arg(long)]
    pub street: String,
    #[arg(long)]
    pub city: String,
    #[arg(long)]
    pub province: String,
    #[arg(long)]
    pub post_code: String,
}

impl From<AddPropertyArgs> for NewProperty {
    fn from(args: AddPropertyArgs) -> Self {
        NewProperty {
            owner_id: args.owner_id,
            title: args.title,
            description: args.description,
            thumbnail_photo_url: args.thumbnail_photo_url,
            cover_photo_url: args.cover_photo_url,
            cost_per_night: args.cost_per_night,
            parking_spaces: args.parking_spaces,
            number_of_bathrooms: args.number_of_bathrooms,
            number_of_bedrooms: args.number_of_bedrooms,
            country: args.country,
            street: args.street,
            city: args.city,
            province: args.province,
            post_code: args.post_code,
        }
    }
}

pub async fn run_property(db: &LightBnb, args: PropertyArgs) -> Result<()> {
    match args.command {
        PropertyCommand::Add(args) => {
            let property = db
                .add_property(&args.into())
                .await
                .context("Failed to add property")?;
            print_json(&property)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        search: SearchArgs,
    }

    #[test]
    fn search_flags_map_to_options() {
        let cli = TestCli::parse_from([
            "test",
            "--city",
            "Vancouver",
            "--min-price",
            "50",
            "--max-price",
            "150",
            "--min-rating",
            "4",
        ]);
        assert_eq!(
            cli.search.search(),
            PropertySearch::default()
                .in_city("Vancouver")
                .min_price(50)
                .max_price(150)
                .min_rating(4.0)
        );
        assert_eq!(cli.search.limit, 10);
    }
}
