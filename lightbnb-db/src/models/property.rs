//! Property rows, insert records and search options

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::{fit_varchar, non_negative, require_text};
use super::ValidationError;

/// Property record from database
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Property {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// Cents
    pub cost_per_night: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub active: bool,
}

/// Property with the average rating over all of its reviews.
///
/// `average_rating` is `None` for a property nobody has reviewed yet.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct PropertyListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: Property,
    pub average_rating: Option<f64>,
}

/// Fields for a new `properties` row. The row is always inserted active.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProperty {
    pub owner_id: i32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// Cents, unlike the whole-unit bounds of [`PropertySearch`].
    pub cost_per_night: i32,
    #[serde(default)]
    pub parking_spaces: i32,
    #[serde(default)]
    pub number_of_bathrooms: i32,
    #[serde(default)]
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
}

impl NewProperty {
    /// Check the record fits the `properties` table.
    ///
    /// Whether `owner_id` exists is left to the foreign key.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title)?;
        fit_varchar("thumbnail_photo_url", &self.thumbnail_photo_url)?;
        fit_varchar("cover_photo_url", &self.cover_photo_url)?;

        non_negative("cost_per_night", self.cost_per_night.into())?;
        non_negative("parking_spaces", self.parking_spaces.into())?;
        non_negative("number_of_bathrooms", self.number_of_bathrooms.into())?;
        non_negative("number_of_bedrooms", self.number_of_bedrooms.into())?;

        require_text("country", &self.country)?;
        require_text("street", &self.street)?;
        require_text("city", &self.city)?;
        require_text("province", &self.province)?;
        require_text("post_code", &self.post_code)?;
        Ok(())
    }
}

/// Optional predicates for a property search.
///
/// Prices are whole currency units per night; they are converted to cents
/// when the query is built. A zero or empty value counts as "not given".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertySearch {
    #[serde(default)]
    pub owner_id: Option<i32>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub minimum_price_per_night: Option<u32>,
    #[serde(default)]
    pub maximum_price_per_night: Option<u32>,
    #[serde(default)]
    pub minimum_rating: Option<f64>,
}

impl PropertySearch {
    pub fn owned_by(mut self, owner_id: i32) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn in_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn min_price(mut self, per_night: u32) -> Self {
        self.minimum_price_per_night = Some(per_night);
        self
    }

    pub fn max_price(mut self, per_night: u32) -> Self {
        self.maximum_price_per_night = Some(per_night);
        self
    }

    pub fn min_rating(mut self, rating: f64) -> Self {
        self.minimum_rating = Some(rating);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speed_lamp() -> NewProperty {
        NewProperty {
            owner_id: 1,
            title: "Speed lamp".into(),
            description: "description".into(),
            thumbnail_photo_url: "https://images.pexels.com/photos/2086676/pexels-photo-2086676.jpeg?auto=compress&cs=tinysrgb&h=350".into(),
            cover_photo_url: "https://images.pexels.com/photos/2086676/pexels-photo-2086676.jpeg".into(),
            cost_per_night: 93061,
            parking_spaces: 6,
            number_of_bathrooms: 4,
            number_of_bedrooms: 8,
            country: "Canada".into(),
            street: "536 Namsub Highway".into(),
            city: "Sotboske".into(),
            province: "Quebec".into(),
            post_code: "28142".into(),
        }
    }

    #[test]
    fn accepts_complete_property() {
        assert!(speed_lamp().validate().is_ok());
    }

    #[test]
    fn rejects_negative_cost() {
        let mut p = speed_lamp();
        p.cost_per_night = -1;
        assert_eq!(
            p.validate(),
            Err(ValidationError::Negative {
                field: "cost_per_night",
                value: -1
            })
        );
    }

    #[test]
    fn rejects_missing_address() {
        let mut p = speed_lamp();
        p.city = " ".into();
        assert_eq!(p.validate(), Err(ValidationError::Empty { field: "city" }));
    }

    #[test]
    fn empty_description_is_allowed() {
        let mut p = speed_lamp();
        p.description.clear();
        assert!(p.validate().is_ok());
    }

    #[test]
    fn search_options_from_json() {
        let search: PropertySearch =
            serde_json::from_str(r#"{"city":"Vancouver","minimum_price_per_night":50}"#).unwrap();
        assert_eq!(
            search,
            PropertySearch::default().in_city("Vancouver").min_price(50)
        );
    }

    #[test]
    fn listing_serializes_flat() {
        let listing = PropertyListing {
            property: Property {
                id: 7,
                owner_id: 1,
                title: "Speed lamp".into(),
                description: None,
                thumbnail_photo_url: String::new(),
                cover_photo_url: String::new(),
                cost_per_night: 93061,
                parking_spaces: 6,
                number_of_bathrooms: 4,
                number_of_bedrooms: 8,
                country: "Canada".into(),
                street: "536 Namsub Highway".into(),
                city: "Sotboske".into(),
                province: "Quebec".into(),
                post_code: "28142".into(),
                active: true,
            },
            average_rating: Some(4.5),
        };
        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["cost_per_night"], 93061);
        assert_eq!(json["average_rating"], 4.5);
    }
}
