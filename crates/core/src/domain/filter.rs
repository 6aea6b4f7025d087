// Property Search Filter Criteria

use super::user::UserId;
use serde::{Deserialize, Serialize};

/// Result limit applied when the caller does not pass one
pub const DEFAULT_SEARCH_LIMIT: i64 = 10;

/// Sparse search criteria; every present field enables one predicate.
///
/// Prices are in major currency units and are scaled to minor units
/// when the search statement is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyFilter {
    pub city: Option<String>,
    pub owner_id: Option<UserId>,
    pub minimum_price_per_night: Option<i64>,
    pub maximum_price_per_night: Option<i64>,
    pub minimum_rating: Option<f64>,
}

impl PropertyFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_owner(mut self, owner_id: UserId) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn with_price_range(mut self, minimum: Option<i64>, maximum: Option<i64>) -> Self {
        self.minimum_price_per_night = minimum;
        self.maximum_price_per_night = maximum;
        self
    }

    pub fn with_minimum_rating(mut self, rating: f64) -> Self {
        self.minimum_rating = Some(rating);
        self
    }

    /// City criterion, with blank input treated as absent
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref().filter(|c| !c.trim().is_empty())
    }

    /// True when no criterion would emit a predicate
    pub fn is_empty(&self) -> bool {
        self.city().is_none()
            && self.owner_id.is_none()
            && self.minimum_price_per_night.is_none()
            && self.maximum_price_per_night.is_none()
            && self.minimum_rating.is_none()
    }
}
