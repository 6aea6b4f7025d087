// Property Repository Port (Interface)

use crate::domain::{NewProperty, Property, PropertyListing};
use crate::error::Result;
use crate::query::SearchQuery;
use async_trait::async_trait;

/// Repository interface for property listings.
///
/// `search` is the store execution capability: it runs a prepared
/// statement as one round trip and maps each row to a listing, keeping
/// the order the store returned.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<PropertyListing>>;

    async fn insert(&self, property: &NewProperty) -> Result<Property>;
}
