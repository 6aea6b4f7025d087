//! Shared setup: an isolated PostgreSQL schema per test, loaded from fixtures.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::str::FromStr;

const SCHEMA_SQL: &str = include_str!("../fixtures/schema.sql");
const SEEDS_SQL: &str = include_str!("../fixtures/seeds.sql");

/// Create `schema` from scratch and return a pool whose search_path points at it
pub async fn setup_db(schema: &str) -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");

    let admin = PgPool::connect(&url).await.expect("admin connection failed");
    sqlx::query(&format!("DROP SCHEMA IF EXISTS {} CASCADE", schema))
        .execute(&admin)
        .await
        .unwrap();
    sqlx::query(&format!("CREATE SCHEMA {}", schema))
        .execute(&admin)
        .await
        .unwrap();
    admin.close().await;

    let options = PgConnectOptions::from_str(&url)
        .unwrap()
        .options([("search_path", schema)]);
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect_with(options)
        .await
        .expect("pool creation failed");

    apply_sql(&pool, SCHEMA_SQL).await;
    apply_sql(&pool, SEEDS_SQL).await;
    pool
}

/// Execute a fixture file statement by statement
async fn apply_sql(pool: &PgPool, sql: &str) {
    for statement in sql.split(';') {
        let clean_statement: String = statement
            .lines()
            .filter(|line| !line.trim().starts_with("--"))
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string();

        if !clean_statement.is_empty() {
            sqlx::query(&clean_statement)
                .execute(pool)
                .await
                .unwrap_or_else(|e| panic!("fixture statement failed: {}\n{}", e, clean_statement));
        }
    }
}
