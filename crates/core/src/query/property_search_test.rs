//! Unit tests for the property search statement

use super::property_search::build_property_search;
use super::SqlParam;
use crate::domain::{PropertyFilter, DEFAULT_SEARCH_LIMIT};
use crate::error::AppError;

/// Count `$n` placeholders in statement text
fn placeholder_count(sql: &str) -> usize {
    let bytes = sql.as_bytes();
    bytes
        .windows(2)
        .filter(|w| w[0] == b'$' && w[1].is_ascii_digit())
        .count()
}

fn lines_starting_with(sql: &str, keyword: &str) -> Vec<String> {
    sql.lines()
        .filter(|line| line.starts_with(keyword))
        .map(str::to_string)
        .collect()
}

#[test]
fn test_city_filter_with_limit_five() {
    let filter = PropertyFilter::new().with_city("Vancouver");
    let query = build_property_search(&filter, 5).unwrap();

    assert_eq!(
        query.sql(),
        "SELECT properties.*, avg(property_reviews.rating)::float8 AS average_rating\n\
         FROM properties\n\
         JOIN property_reviews ON properties.id = property_reviews.property_id\n\
         WHERE properties.city LIKE $1\n\
         GROUP BY properties.id\n\
         ORDER BY properties.cost_per_night\n\
         LIMIT $2"
    );
    assert_eq!(
        query.params(),
        &[SqlParam::Text("%Vancouver%".into()), SqlParam::Int(5)]
    );
}

#[test]
fn test_price_range_scaled_to_minor_units() {
    let filter = PropertyFilter::new().with_price_range(Some(50), Some(150));
    let query = build_property_search(&filter, 10).unwrap();

    assert_eq!(
        lines_starting_with(query.sql(), "WHERE"),
        vec!["WHERE properties.cost_per_night >= $1"]
    );
    assert_eq!(
        lines_starting_with(query.sql(), "AND"),
        vec!["AND properties.cost_per_night <= $2"]
    );
    assert_eq!(
        query.params(),
        &[SqlParam::Int(5000), SqlParam::Int(15000), SqlParam::Int(10)]
    );
}

#[test]
fn test_rating_only_emits_having_without_where() {
    let filter = PropertyFilter::new().with_minimum_rating(4.0);
    let query = build_property_search(&filter, DEFAULT_SEARCH_LIMIT).unwrap();

    assert!(!query.sql().contains("WHERE"));
    assert!(query
        .sql()
        .contains("GROUP BY properties.id\nHAVING avg(property_reviews.rating) >= $1\n"));
    assert!(query.sql().ends_with("LIMIT $2"));
    assert_eq!(
        query.params(),
        &[SqlParam::Float(4.0), SqlParam::Int(DEFAULT_SEARCH_LIMIT)]
    );
}

#[test]
fn test_empty_filter_default_limit() {
    let query = build_property_search(&PropertyFilter::default(), DEFAULT_SEARCH_LIMIT).unwrap();

    assert!(!query.sql().contains("WHERE"));
    assert!(!query.sql().contains("HAVING"));
    assert!(query.sql().contains("JOIN property_reviews"));
    assert!(query.sql().contains("GROUP BY properties.id"));
    assert!(query.sql().contains("ORDER BY properties.cost_per_night"));
    assert!(query.sql().ends_with("LIMIT $1"));
    assert_eq!(query.params(), &[SqlParam::Int(10)]);
}

#[test]
fn test_all_criteria_in_fixed_order() {
    let filter = PropertyFilter::new()
        .with_city("Van")
        .with_owner(3)
        .with_price_range(Some(1), Some(2))
        .with_minimum_rating(3.5);
    let query = build_property_search(&filter, 20).unwrap();

    let sql = query.sql();
    assert_eq!(lines_starting_with(sql, "WHERE"), vec!["WHERE properties.city LIKE $1"]);
    assert_eq!(
        lines_starting_with(sql, "AND"),
        vec![
            "AND properties.owner_id = $2",
            "AND properties.cost_per_night >= $3",
            "AND properties.cost_per_night <= $4",
        ]
    );
    assert_eq!(
        lines_starting_with(sql, "HAVING"),
        vec!["HAVING avg(property_reviews.rating) >= $5"]
    );
    assert!(sql.ends_with("LIMIT $6"));
    assert_eq!(
        query.params(),
        &[
            SqlParam::Text("%Van%".into()),
            SqlParam::Int(3),
            SqlParam::Int(100),
            SqlParam::Int(200),
            SqlParam::Float(3.5),
            SqlParam::Int(20),
        ]
    );
}

#[test]
fn test_owner_without_city_starts_with_where() {
    let filter = PropertyFilter::new().with_owner(42);
    let query = build_property_search(&filter, 10).unwrap();

    assert_eq!(
        lines_starting_with(query.sql(), "WHERE"),
        vec!["WHERE properties.owner_id = $1"]
    );
    assert!(lines_starting_with(query.sql(), "AND").is_empty());
}

#[test]
fn test_placeholders_match_params_for_every_combination() {
    for mask in 0u8..32 {
        let mut filter = PropertyFilter::new();
        if mask & 1 != 0 {
            filter = filter.with_city("Calgary");
        }
        if mask & 2 != 0 {
            filter = filter.with_owner(7);
        }
        if mask & 4 != 0 {
            filter.minimum_price_per_night = Some(80);
        }
        if mask & 8 != 0 {
            filter.maximum_price_per_night = Some(400);
        }
        if mask & 16 != 0 {
            filter = filter.with_minimum_rating(2.0);
        }

        let query = build_property_search(&filter, 3).unwrap();
        let predicates = (mask & 0b1111).count_ones() as usize;

        assert_eq!(
            placeholder_count(query.sql()),
            query.params().len(),
            "mask {:05b}",
            mask
        );
        assert_eq!(
            lines_starting_with(query.sql(), "WHERE").len(),
            usize::from(predicates > 0)
        );
        assert_eq!(
            lines_starting_with(query.sql(), "AND").len(),
            predicates.saturating_sub(1)
        );
        assert_eq!(query.params().last(), Some(&SqlParam::Int(3)));

        for line in lines_starting_with(query.sql(), "HAVING") {
            assert!(!line.contains("WHERE") && !line.contains("AND"));
        }
    }
}

#[test]
fn test_builder_is_idempotent() {
    let filter = PropertyFilter::new()
        .with_city("Toronto")
        .with_price_range(Some(10), None)
        .with_minimum_rating(4.0);

    let first = build_property_search(&filter, 5).unwrap();
    let second = build_property_search(&filter, 5).unwrap();
    assert_eq!(first.sql(), second.sql());
    assert_eq!(first.params(), second.params());
}

#[test]
fn test_blank_city_emits_no_predicate() {
    let filter = PropertyFilter::new().with_city("");
    let query = build_property_search(&filter, 10).unwrap();
    assert!(!query.sql().contains("WHERE"));
    assert_eq!(query.params().len(), 1);
}

#[test]
fn test_city_wildcards_are_bound_verbatim() {
    let filter = PropertyFilter::new().with_city("%");
    let query = build_property_search(&filter, 10).unwrap();
    assert!(query.sql().contains("WHERE properties.city LIKE $1"));
    assert_eq!(query.params()[0], SqlParam::Text("%%%".into()));

    let filter = PropertyFilter::new().with_city("North_Van");
    let query = build_property_search(&filter, 10).unwrap();
    assert_eq!(query.params()[0], SqlParam::Text("%North_Van%".into()));
}

#[test]
fn test_non_positive_limit_rejected() {
    for limit in [0, -1] {
        let err = build_property_search(&PropertyFilter::default(), limit).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(err.to_string().contains("limit"));
    }
}

#[test]
fn test_price_overflow_rejected() {
    let filter = PropertyFilter::new().with_price_range(None, Some(i64::MAX));
    let err = build_property_search(&filter, 10).unwrap_err();
    assert!(err.to_string().contains("maximum_price_per_night"));
}

#[test]
fn test_nan_rating_rejected() {
    let filter = PropertyFilter::new().with_minimum_rating(f64::NAN);
    assert!(matches!(
        build_property_search(&filter, 10),
        Err(AppError::Validation(_))
    ));
}
