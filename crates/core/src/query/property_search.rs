// Filtered Property Search Statement

use super::{SearchQuery, SqlParam, StatementBuilder};
use crate::domain::{PropertyFilter, MINOR_UNITS_PER_MAJOR};
use crate::error::{AppError, Result};

const BASE_SELECT: &str = r#"
SELECT properties.*, avg(property_reviews.rating)::float8 AS average_rating
FROM properties
JOIN property_reviews ON properties.id = property_reviews.property_id
"#;

/// Build the property search statement for `filter`, capped at `limit` rows.
///
/// Predicates are emitted in a fixed order (city, owner, minimum price,
/// maximum price), followed by the grouping clause, the optional rating
/// threshold, the ordering and the limit. Identical inputs always produce
/// identical statement text and parameters.
///
/// # Errors
///
/// `AppError::Validation` when `limit` is not positive, a price bound
/// overflows once scaled to minor units, or the rating is not finite.
pub fn build_property_search(filter: &PropertyFilter, limit: i64) -> Result<SearchQuery> {
    if limit <= 0 {
        return Err(AppError::Validation(format!(
            "limit must be positive (got {})",
            limit
        )));
    }

    let mut builder = StatementBuilder::new(BASE_SELECT);

    // LIKE wildcards inside the city text pass through unescaped
    if let Some(city) = filter.city() {
        builder.push_predicate(
            "properties.city",
            "LIKE",
            SqlParam::Text(format!("%{}%", city)),
        );
    }

    if let Some(owner_id) = filter.owner_id {
        builder.push_predicate("properties.owner_id", "=", SqlParam::Int(owner_id.into()));
    }

    if let Some(minimum) = filter.minimum_price_per_night {
        let cents = to_minor_units("minimum_price_per_night", minimum)?;
        builder.push_predicate("properties.cost_per_night", ">=", SqlParam::Int(cents));
    }

    if let Some(maximum) = filter.maximum_price_per_night {
        let cents = to_minor_units("maximum_price_per_night", maximum)?;
        builder.push_predicate("properties.cost_per_night", "<=", SqlParam::Int(cents));
    }

    builder.push_line("GROUP BY properties.id");

    if let Some(rating) = filter.minimum_rating {
        if !rating.is_finite() {
            return Err(AppError::Validation(format!(
                "minimum_rating must be a finite number (got {})",
                rating
            )));
        }
        let position = builder.bind(SqlParam::Float(rating));
        builder.push_line(&format!(
            "HAVING avg(property_reviews.rating) >= ${}",
            position
        ));
    }

    let position = builder.bind(SqlParam::Int(limit));
    builder.push_line("ORDER BY properties.cost_per_night");
    builder.push_line(&format!("LIMIT ${}", position));

    Ok(builder.finish())
}

fn to_minor_units(field: &str, major: i64) -> Result<i64> {
    major.checked_mul(MINOR_UNITS_PER_MAJOR).ok_or_else(|| {
        AppError::Validation(format!("{} is out of range (got {})", field, major))
    })
}
