//! LightBnB CLI - Command-line access to the LightBnB data layer
//!
//! Wires configuration, the connection pool, the PostgreSQL repositories and
//! the application services, then runs one operation per invocation.

mod logging;
mod output;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tabled::{Table, Tabled};
use tracing::info;

use lightbnb_core::application::{AccountService, BookingService, ListingService};
use lightbnb_core::domain::{NewProperty, NewReservation, NewUser, PropertyFilter};
use lightbnb_infra_postgres::{
    create_pool, DatabaseConfig, PgPropertyRepository, PgReservationRepository, PgUserRepository,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "lightbnb")]
#[command(about = "LightBnB data layer CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// PostgreSQL URL (overrides LIGHTBNB_DATABASE_URL / DATABASE_URL)
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    json_output: bool,

    /// Enable debug logging (includes generated SQL)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a user by email
    UserByEmail { email: String },

    /// Look up a user by id
    User { id: i32 },

    /// Register a new user
    AddUser {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// List a guest's reservations (earliest first)
    Reservations {
        guest_id: i32,

        #[arg(short, long, default_value = "10")]
        limit: i64,
    },

    /// Book a property
    AddReservation {
        #[arg(long)]
        property_id: i32,
        #[arg(long)]
        guest_id: i32,
        /// YYYY-MM-DD
        #[arg(long)]
        start_date: NaiveDate,
        /// YYYY-MM-DD
        #[arg(long)]
        end_date: NaiveDate,
    },

    /// Search properties (cheapest first)
    Search(SearchArgs),

    /// Add a property from a JSON document
    AddProperty {
        /// Path to the JSON file, or "-" for stdin
        #[arg(long)]
        json: PathBuf,
    },
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Substring of the city name
    #[arg(long)]
    city: Option<String>,

    #[arg(long)]
    owner_id: Option<i32>,

    /// Minimum price per night (whole currency units)
    #[arg(long)]
    min_price: Option<i64>,

    /// Maximum price per night (whole currency units)
    #[arg(long)]
    max_price: Option<i64>,

    #[arg(long)]
    min_rating: Option<f64>,

    #[arg(short, long, default_value = "10")]
    limit: i64,

    /// Abort the query after this many milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,
}

impl SearchArgs {
    fn filter(&self) -> PropertyFilter {
        PropertyFilter {
            city: self.city.clone(),
            owner_id: self.owner_id,
            minimum_price_per_night: self.min_price,
            maximum_price_per_night: self.max_price,
            minimum_rating: self.min_rating,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(logging::LogFormat::from_env(), cli.verbose)?;
    info!("LightBnB CLI v{}", VERSION);

    let mut config = DatabaseConfig::from_env()?;
    if let Some(url) = cli.database_url.clone() {
        config.url = url;
    }

    let pool = create_pool(&config)
        .await
        .context("Database pool creation failed")?;

    let accounts = AccountService::new(Arc::new(PgUserRepository::new(pool.clone())));
    let booking = BookingService::new(Arc::new(PgReservationRepository::new(pool.clone())));
    let listings = ListingService::new(Arc::new(PgPropertyRepository::new(pool.clone())));

    let json = cli.json_output;

    match cli.command {
        Commands::UserByEmail { email } => {
            let user = accounts.find_by_email(&email).await?;
            print_optional(json, user.as_ref(), output::UserRow::from, "No user with that email")?;
        }

        Commands::User { id } => {
            let user = accounts.find_by_id(id).await?;
            print_optional(json, user.as_ref(), output::UserRow::from, "No user with that id")?;
        }

        Commands::AddUser {
            name,
            email,
            password,
        } => {
            let user = accounts
                .register(NewUser::new(name, email, password))
                .await?;
            print_created(json, &user, output::UserRow::from(&user), "User saved")?;
        }

        Commands::Reservations { guest_id, limit } => {
            let reservations = booking.list_for_guest(guest_id, Some(limit)).await?;
            print_list(
                json,
                &reservations,
                output::ReservationRow::from,
                "No reservations",
            )?;
        }

        Commands::AddReservation {
            property_id,
            guest_id,
            start_date,
            end_date,
        } => {
            let reservation = booking
                .book(NewReservation {
                    start_date,
                    end_date,
                    property_id,
                    guest_id,
                })
                .await?;
            print_created(
                json,
                &reservation,
                output::BookingRow::from(&reservation),
                "Reservation saved",
            )?;
        }

        Commands::Search(args) => {
            let filter = args.filter();
            let results = match args.timeout_ms {
                Some(ms) => {
                    listings
                        .search_within(&filter, Some(args.limit), Duration::from_millis(ms))
                        .await?
                }
                None => listings.search(&filter, Some(args.limit)).await?,
            };
            print_list(json, &results, output::ListingRow::from, "No matching properties")?;
        }

        Commands::AddProperty { json: path } => {
            let document = read_document(&path)?;
            let new_property: NewProperty =
                serde_json::from_str(&document).context("Invalid property JSON")?;
            let property = listings.add(new_property).await?;
            print_created(
                json,
                &property,
                output::PropertyRow::from(&property),
                "Property added",
            )?;
        }
    }

    pool.close().await;
    Ok(())
}

fn read_document(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_list<'a, T, R, F>(json: bool, items: &'a [T], to_row: F, empty: &str) -> Result<()>
where
    T: Serialize,
    R: Tabled,
    F: Fn(&'a T) -> R,
{
    if json {
        return print_json(items);
    }
    if items.is_empty() {
        println!("{}", empty.yellow());
        return Ok(());
    }
    println!("{}", Table::new(items.iter().map(to_row)));
    Ok(())
}

fn print_optional<'a, T, R, F>(
    json: bool,
    item: Option<&'a T>,
    to_row: F,
    missing: &str,
) -> Result<()>
where
    T: Serialize,
    R: Tabled,
    F: Fn(&'a T) -> R,
{
    match item {
        Some(item) if !json => {
            println!("{}", Table::new([to_row(item)]));
            Ok(())
        }
        Some(item) => print_json(item),
        None if json => print_json(&serde_json::Value::Null),
        None => {
            println!("{}", missing.yellow());
            Ok(())
        }
    }
}

fn print_created<T: Serialize, R: Tabled>(json: bool, item: &T, row: R, message: &str) -> Result<()> {
    if json {
        return print_json(item);
    }
    println!("{}", format!("✓ {}", message).green().bold());
    println!();
    println!("{}", Table::new([row]));
    Ok(())
}
