// PostgreSQL PropertyRepository Implementation

use crate::error::map_sqlx_error;
use crate::rows::{ListingRow, PropertyRow};
use async_trait::async_trait;
use lightbnb_core::domain::{NewProperty, Property, PropertyListing};
use lightbnb_core::error::{AppError, Result};
use lightbnb_core::port::PropertyRepository;
use lightbnb_core::query::{SearchQuery, SqlParam};
use sqlx::PgPool;
use tracing::{debug, error};

pub struct PgPropertyRepository {
    pool: PgPool,
}

impl PgPropertyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PropertyRepository for PgPropertyRepository {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<PropertyListing>> {
        debug!(sql = %query.sql(), params = ?query.params(), "Executing property search");

        let mut statement = sqlx::query_as::<_, ListingRow>(query.sql());
        for param in query.params() {
            statement = match param {
                SqlParam::Text(value) => statement.bind(value.as_str()),
                SqlParam::Int(value) => statement.bind(*value),
                SqlParam::Float(value) => statement.bind(*value),
            };
        }

        let rows = statement
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)
            .inspect_err(|e| {
                if let AppError::Internal(_) = e {
                    error!(error = %e, sql = %query.sql(), "Search statement rejected by store");
                }
            })?;

        Ok(rows.into_iter().map(ListingRow::into_listing).collect())
    }

    async fn insert(&self, property: &NewProperty) -> Result<Property> {
        let row = sqlx::query_as::<_, PropertyRow>(
            r#"
            INSERT INTO properties (
                title,
                description,
                owner_id,
                cover_photo_url,
                thumbnail_photo_url,
                cost_per_night,
                parking_spaces,
                number_of_bathrooms,
                number_of_bedrooms,
                province,
                city,
                country,
                street,
                post_code
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            "#,
        )
        .bind(&property.title)
        .bind(&property.description)
        .bind(property.owner_id)
        .bind(&property.cover_photo_url)
        .bind(&property.thumbnail_photo_url)
        .bind(property.cost_per_night)
        .bind(property.parking_spaces)
        .bind(property.number_of_bathrooms)
        .bind(property.number_of_bedrooms)
        .bind(&property.province)
        .bind(&property.city)
        .bind(&property.country)
        .bind(&property.street)
        .bind(&property.post_code)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.into_property())
    }
}
