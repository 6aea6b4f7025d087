// PostgreSQL row representations

use chrono::NaiveDate;
use lightbnb_core::domain::{
    GuestReservation, Property, PropertyListing, Reservation, User,
};

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct UserRow {
    id: i32,
    name: String,
    email: String,
    password: String,
}

impl UserRow {
    pub(crate) fn into_user(self) -> User {
        User {
            id: self.id,
            name: self.name,
            email: self.email,
            password: self.password,
        }
    }
}

/// All columns of `properties`
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct PropertyRow {
    id: i32,
    owner_id: i32,
    title: String,
    description: Option<String>,
    thumbnail_photo_url: Option<String>,
    cover_photo_url: Option<String>,
    cost_per_night: i32,
    parking_spaces: i32,
    number_of_bathrooms: i32,
    number_of_bedrooms: i32,
    country: String,
    street: Option<String>,
    city: String,
    province: Option<String>,
    post_code: Option<String>,
    active: bool,
}

impl PropertyRow {
    pub(crate) fn into_property(self) -> Property {
        Property {
            id: self.id,
            owner_id: self.owner_id,
            title: self.title,
            description: self.description,
            thumbnail_photo_url: self.thumbnail_photo_url,
            cover_photo_url: self.cover_photo_url,
            cost_per_night: self.cost_per_night,
            parking_spaces: self.parking_spaces,
            number_of_bathrooms: self.number_of_bathrooms,
            number_of_bedrooms: self.number_of_bedrooms,
            country: self.country,
            street: self.street,
            city: self.city,
            province: self.province,
            post_code: self.post_code,
            active: self.active,
        }
    }
}

/// `properties.*` plus `average_rating`
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ListingRow {
    #[sqlx(flatten)]
    property: PropertyRow,
    average_rating: f64,
}

impl ListingRow {
    pub(crate) fn into_listing(self) -> PropertyListing {
        PropertyListing {
            property: self.property.into_property(),
            average_rating: self.average_rating,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ReservationRow {
    id: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
    property_id: i32,
    guest_id: i32,
}

impl ReservationRow {
    pub(crate) fn into_reservation(self) -> Reservation {
        Reservation {
            id: self.id,
            start_date: self.start_date,
            end_date: self.end_date,
            property_id: self.property_id,
            guest_id: self.guest_id,
        }
    }
}

/// `properties.*`, the aliased reservation columns and `average_rating`
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct GuestReservationRow {
    #[sqlx(flatten)]
    property: PropertyRow,
    reservation_id: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
    guest_id: i32,
    average_rating: f64,
}

impl GuestReservationRow {
    pub(crate) fn into_guest_reservation(self) -> GuestReservation {
        let property = self.property.into_property();
        GuestReservation {
            reservation: Reservation {
                id: self.reservation_id,
                start_date: self.start_date,
                end_date: self.end_date,
                property_id: property.id,
                guest_id: self.guest_id,
            },
            property,
            average_rating: self.average_rating,
        }
    }
}
