pub mod bookings;
pub mod flights;

pub use bookings::{bookings_for_flight, create_booking, get_booking};
pub use flights::{find_flights, parse_flight_date, upsert_flight};
