//! Routes parsed tool calls to the flight store and weather service

use async_trait::async_trait;
use std::sync::Arc;

use super::catalog::ToolCall;
use super::executor::ToolExecutor;
use crate::airline_db::FlightStore;
use crate::weather::WeatherService;

/// Reply used when a flight search matches nothing
pub const NO_FLIGHTS_FOUND: &str = "No flights found.";

/// `ToolExecutor` backed by the airline's flight store and a weather service
pub struct AirlineToolDispatcher {
    store: Arc<dyn FlightStore>,
    weather: Arc<dyn WeatherService>,
}

impl AirlineToolDispatcher {
    pub fn new(store: Arc<dyn FlightStore>, weather: Arc<dyn WeatherService>) -> Self {
        Self { store, weather }
    }
}

#[async_trait]
impl ToolExecutor for AirlineToolDispatcher {
    async fn execute(&self, call: ToolCall) -> String {
        match call {
            ToolCall::GetWeather(args) => self.weather.current_weather(&args.location).await,
            ToolCall::GetFlights(args) => {
                let flights = self
                    .store
                    .find_flights(&args.departure_airport, &args.arrival_airport, &args.date)
                    .await;

                if flights.is_empty() {
                    return NO_FLIGHTS_FOUND.to_string();
                }

                serde_json::to_string(&flights).unwrap_or_else(|e| {
                    tracing::error!(error = %e, "failed to serialize flight list");
                    NO_FLIGHTS_FOUND.to_string()
                })
            }
            ToolCall::BookFlight(args) => {
                let result = self
                    .store
                    .create_booking(&args.flight_id, &args.passenger_name, &args.passport_number)
                    .await;

                if result.success {
                    tracing::info!(
                        flight_id = %args.flight_id,
                        booking_id = result.booking_id.as_deref().unwrap_or_default(),
                        "flight booked"
                    );
                }

                serde_json::to_string(&result).unwrap_or_else(|e| {
                    format!(r#"{{"success":false,"message":"Error saving booking: {}"}}"#, e)
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airline_db::{BookingResult, FlightRecord};
    use crate::llm::tools::catalog::{BookFlightArgs, GetFlightsArgs, GetWeatherArgs};
    use chrono::NaiveDate;
    use std::sync::Mutex;

    struct MockStore {
        flights: Vec<FlightRecord>,
        searches: Mutex<Vec<(String, String, String)>>,
    }

    impl MockStore {
        fn new(flights: Vec<FlightRecord>) -> Self {
            Self {
                flights,
                searches: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl FlightStore for MockStore {
        async fn find_flights(&self, departure: &str, arrival: &str, date: &str) -> Vec<FlightRecord> {
            self.searches.lock().unwrap().push((
                departure.to_string(),
                arrival.to_string(),
                date.to_string(),
            ));
            self.flights.clone()
        }

        async fn create_booking(
            &self,
            flight_id: &str,
            _passenger_name: &str,
            _passport_number: &str,
        ) -> BookingResult {
            match self.flights.iter().find(|f| f.flight_id == flight_id) {
                Some(flight) => BookingResult::confirmed("ab12cd34", flight.clone()),
                None => BookingResult::flight_not_found(flight_id),
            }
        }
    }

    struct MockWeather;

    #[async_trait]
    impl WeatherService for MockWeather {
        async fn current_weather(&self, location: &str) -> String {
            format!("The current temperature in {} is 21°C with clear sky.", location)
        }
    }

    fn fl001() -> FlightRecord {
        FlightRecord {
            flight_id: "FL001".to_string(),
            departure_airport: "LAX".to_string(),
            arrival_airport: "JFK".to_string(),
            departure_date: NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
            departure_time: "08:30".to_string(),
            price: 299.99,
        }
    }

    fn dispatcher(store: Arc<MockStore>) -> AirlineToolDispatcher {
        AirlineToolDispatcher::new(store, Arc::new(MockWeather))
    }

    #[tokio::test]
    async fn test_get_flights_passes_arguments_through() {
        let store = Arc::new(MockStore::new(vec![fl001()]));
        let result = dispatcher(store.clone())
            .execute(ToolCall::GetFlights(GetFlightsArgs {
                departure_airport: "lax".to_string(),
                arrival_airport: "jfk".to_string(),
                date: "2025-06-10".to_string(),
            }))
            .await;

        let searches = store.searches.lock().unwrap();
        assert_eq!(
            searches.as_slice(),
            &[("lax".to_string(), "jfk".to_string(), "2025-06-10".to_string())]
        );

        let parsed: Vec<FlightRecord> = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed, vec![fl001()]);
    }

    #[tokio::test]
    async fn test_get_flights_empty() {
        let store = Arc::new(MockStore::new(vec![]));
        let result = dispatcher(store)
            .execute(ToolCall::GetFlights(GetFlightsArgs {
                departure_airport: "CMB".to_string(),
                arrival_airport: "DXB".to_string(),
                date: "2025-06-10".to_string(),
            }))
            .await;

        assert_eq!(result, NO_FLIGHTS_FOUND);
    }

    #[tokio::test]
    async fn test_book_flight_serializes_result() {
        let store = Arc::new(MockStore::new(vec![fl001()]));
        let result = dispatcher(store)
            .execute(ToolCall::BookFlight(BookFlightArgs {
                flight_id: "FL001".to_string(),
                passenger_name: "Jane Doe".to_string(),
                passport_number: "X123".to_string(),
            }))
            .await;

        let value: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["booking_id"], "ab12cd34");
        assert_eq!(value["flight_details"]["flight_id"], "FL001");
        assert_eq!(value["flight_details"]["departure_date"], "2025-06-10");
    }

    #[tokio::test]
    async fn test_book_unknown_flight() {
        let store = Arc::new(MockStore::new(vec![]));
        let result = dispatcher(store)
            .execute(ToolCall::BookFlight(BookFlightArgs {
                flight_id: "FL999".to_string(),
                passenger_name: "Jane Doe".to_string(),
                passport_number: "X123".to_string(),
            }))
            .await;

        let value: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(value["success"], false);
        assert!(value["message"].as_str().unwrap().contains("FL999"));
    }

    #[tokio::test]
    async fn test_weather_text_is_returned_as_is() {
        let store = Arc::new(MockStore::new(vec![]));
        let result = dispatcher(store)
            .execute(ToolCall::GetWeather(GetWeatherArgs {
                location: "Colombo, Sri Lanka".to_string(),
            }))
            .await;

        assert_eq!(
            result,
            "The current temperature in Colombo, Sri Lanka is 21°C with clear sky."
        );
    }
}
