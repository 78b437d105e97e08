use async_trait::async_trait;

use crate::airline_db::types::{BookingResult, FlightRecord};

/// Flight search and booking as seen by the tool dispatcher
///
/// Neither operation fails: lookup problems degrade to an empty list and
/// booking problems to a failed `BookingResult`.
#[async_trait]
pub trait FlightStore: Send + Sync {
    /// Flights matching both airports (case-insensitive) on `date` (`YYYY-MM-DD`)
    async fn find_flights(&self, departure: &str, arrival: &str, date: &str) -> Vec<FlightRecord>;

    /// Book a seat on an existing scheduled flight
    async fn create_booking(
        &self,
        flight_id: &str,
        passenger_name: &str,
        passport_number: &str,
    ) -> BookingResult;
}
