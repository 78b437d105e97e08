use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A row of the flight schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub flight_id: String,
    pub departure_airport: String,
    pub arrival_airport: String,
    /// Serialized as `YYYY-MM-DD`
    pub departure_date: NaiveDate,
    /// Free text, as seeded (e.g. "08:30")
    pub departure_time: String,
    pub price: f64,
}

/// A row of the booking table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub booking_id: String,
    pub flight_id: String,
    pub passenger_name: String,
    pub passport_number: String,
    /// Local time formatted `%Y-%m-%d %H:%M:%S`
    pub booking_date: String,
}

/// Outcome of a booking attempt as reported back to the model
///
/// Serializes to `{"success": true, "booking_id": .., "flight_details": {..}}`
/// or `{"success": false, "message": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_details: Option<FlightRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl BookingResult {
    pub fn confirmed(booking_id: impl Into<String>, flight: FlightRecord) -> Self {
        Self {
            success: true,
            booking_id: Some(booking_id.into()),
            flight_details: Some(flight),
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            booking_id: None,
            flight_details: None,
            message: Some(message.into()),
        }
    }

    pub fn flight_not_found(flight_id: &str) -> Self {
        Self::failed(format!("Flight {} not found in schedule.", flight_id))
    }
}
