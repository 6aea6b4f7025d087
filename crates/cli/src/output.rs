// Table rendering for command results

use lightbnb_core::domain::{GuestReservation, Property, PropertyListing, Reservation, User};
use tabled::Tabled;

#[derive(Tabled)]
pub struct UserRow {
    id: i32,
    name: String,
    email: String,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

#[derive(Tabled)]
pub struct ListingRow {
    id: i32,
    title: String,
    city: String,
    #[tabled(rename = "per night")]
    price: String,
    bedrooms: i32,
    rating: String,
}

impl From<&PropertyListing> for ListingRow {
    fn from(listing: &PropertyListing) -> Self {
        let p = &listing.property;
        Self {
            id: p.id,
            title: p.title.clone(),
            city: p.city.clone(),
            price: format_price(p.cost_per_night),
            bedrooms: p.number_of_bedrooms,
            rating: format!("{:.2}", listing.average_rating),
        }
    }
}

#[derive(Tabled)]
pub struct PropertyRow {
    id: i32,
    owner: i32,
    title: String,
    city: String,
    #[tabled(rename = "per night")]
    price: String,
}

impl From<&Property> for PropertyRow {
    fn from(p: &Property) -> Self {
        Self {
            id: p.id,
            owner: p.owner_id,
            title: p.title.clone(),
            city: p.city.clone(),
            price: format_price(p.cost_per_night),
        }
    }
}

#[derive(Tabled)]
pub struct ReservationRow {
    id: i32,
    property: String,
    city: String,
    #[tabled(rename = "start")]
    start_date: String,
    #[tabled(rename = "end")]
    end_date: String,
    rating: String,
}

impl From<&GuestReservation> for ReservationRow {
    fn from(r: &GuestReservation) -> Self {
        Self {
            id: r.reservation.id,
            property: r.property.title.clone(),
            city: r.property.city.clone(),
            start_date: r.reservation.start_date.to_string(),
            end_date: r.reservation.end_date.to_string(),
            rating: format!("{:.2}", r.average_rating),
        }
    }
}

#[derive(Tabled)]
pub struct BookingRow {
    id: i32,
    property_id: i32,
    guest_id: i32,
    start: String,
    end: String,
}

impl From<&Reservation> for BookingRow {
    fn from(r: &Reservation) -> Self {
        Self {
            id: r.id,
            property_id: r.property_id,
            guest_id: r.guest_id,
            start: r.start_date.to_string(),
            end: r.end_date.to_string(),
        }
    }
}

/// Render minor units (cents) as a dollar amount
pub fn format_price(cents: i32) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = i64::from(cents).abs();
    format!("{}${}.{:02}", sign, cents / 100, cents % 100)
}
