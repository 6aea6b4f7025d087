// Property Domain Model

use super::error::{require_non_negative, require_text, Result};
use super::user::UserId;
use serde::{Deserialize, Serialize};

/// Property ID (SERIAL primary key)
pub type PropertyId = i32;

/// Minor currency units per major unit (cost_per_night is stored in cents)
pub const MINOR_UNITS_PER_MAJOR: i64 = 100;

/// Stored property listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub owner_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_photo_url: Option<String>,
    pub cover_photo_url: Option<String>,
    pub cost_per_night: i32, // minor units
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: Option<String>,
    pub city: String,
    pub province: Option<String>,
    pub post_code: Option<String>,
    pub active: bool,
}

/// Property joined with the mean rating of its reviews
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyListing {
    #[serde(flatten)]
    pub property: Property,
    pub average_rating: f64,
}

/// Listing payload (id and active flag are assigned by the store)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProperty {
    pub owner_id: UserId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail_photo_url: Option<String>,
    #[serde(default)]
    pub cover_photo_url: Option<String>,
    pub cost_per_night: i32,
    #[serde(default)]
    pub parking_spaces: i32,
    #[serde(default)]
    pub number_of_bathrooms: i32,
    #[serde(default)]
    pub number_of_bedrooms: i32,
    pub country: String,
    #[serde(default)]
    pub street: Option<String>,
    pub city: String,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub post_code: Option<String>,
}

impl NewProperty {
    pub fn validate(&self) -> Result<()> {
        require_text("title", &self.title)?;
        require_text("city", &self.city)?;
        require_text("country", &self.country)?;
        require_non_negative("cost_per_night", self.cost_per_night)?;
        require_non_negative("parking_spaces", self.parking_spaces)?;
        require_non_negative("number_of_bathrooms", self.number_of_bathrooms)?;
        require_non_negative("number_of_bedrooms", self.number_of_bedrooms)?;
        Ok(())
    }
}
