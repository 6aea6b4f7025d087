// Listing Service - Filtered property search and listing creation

use crate::application::deadline::within;
use crate::domain::{NewProperty, Property, PropertyFilter, PropertyListing, DEFAULT_SEARCH_LIMIT};
use crate::error::Result;
use crate::port::PropertyRepository;
use crate::query::build_property_search;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

pub struct ListingService {
    properties: Arc<dyn PropertyRepository>,
}

impl ListingService {
    pub fn new(properties: Arc<dyn PropertyRepository>) -> Self {
        Self { properties }
    }

    /// Filtered property search.
    ///
    /// Builds the statement for `filter` (limit defaults to 10), runs it as a
    /// single round trip and returns listings cheapest first. Store failures
    /// are returned to the caller, never converted into an empty result.
    pub async fn search(
        &self,
        filter: &PropertyFilter,
        limit: Option<i64>,
    ) -> Result<Vec<PropertyListing>> {
        let limit = limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
        let query = build_property_search(filter, limit)?;

        debug!(
            params = query.params().len(),
            limit,
            "Running property search"
        );

        match self.properties.search(&query).await {
            Ok(listings) => {
                debug!(count = listings.len(), "Property search complete");
                Ok(listings)
            }
            Err(e) => {
                warn!(error = %e, "Property search failed");
                Err(e)
            }
        }
    }

    /// `search` bounded by a caller deadline
    pub async fn search_within(
        &self,
        filter: &PropertyFilter,
        limit: Option<i64>,
        deadline: Duration,
    ) -> Result<Vec<PropertyListing>> {
        within(deadline, self.search(filter, limit)).await
    }

    /// Validate and store a new listing
    pub async fn add(&self, property: NewProperty) -> Result<Property> {
        property.validate()?;

        let stored = self
            .properties
            .insert(&property)
            .await
            .inspect_err(|e| {
                warn!(error = %e, owner_id = property.owner_id, "Property insert failed")
            })?;
        info!(
            property_id = stored.id,
            owner_id = stored.owner_id,
            "Property added"
        );
        Ok(stored)
    }
}
