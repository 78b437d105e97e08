//! The airline tool set: argument shapes, declarations, and the closed
//! `ToolCall` union the dispatcher matches on.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::declaration::create_tool_declaration;
use crate::llm::core::types::ToolDeclaration;

pub const GET_WEATHER: &str = "get_weather";
pub const GET_FLIGHTS: &str = "get_flights";
pub const BOOK_FLIGHT: &str = "book_flight";

/// Arguments for `get_weather`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetWeatherArgs {
    /// City and country e.g. Bogotá, Colombia
    pub location: String,
}

/// Arguments for `get_flights`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetFlightsArgs {
    /// The IATA code of the departure airport (e.g., LAX for Los Angeles, CMB for Colombo).
    pub departure_airport: String,
    /// The IATA code of the arrival airport (e.g., JFK for New York, CMB for Colombo).
    pub arrival_airport: String,
    /// The date of the flight in YYYY-MM-DD format (e.g., 2025-06-10).
    pub date: String,
}

/// Arguments for `book_flight`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct BookFlightArgs {
    /// The unique identifier of the flight to book (e.g., FL001).
    pub flight_id: String,
    /// The full name of the passenger.
    pub passenger_name: String,
    /// The passport number of the passenger.
    pub passport_number: String,
}

/// A tool call the backend knows how to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCall {
    GetWeather(GetWeatherArgs),
    GetFlights(GetFlightsArgs),
    BookFlight(BookFlightArgs),
}

/// Reasons a model tool call cannot be turned into a `ToolCall`
#[derive(Debug, Error)]
pub enum ToolCallError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments for tool {tool}: {source}")]
    InvalidArguments {
        tool: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ToolCall {
    /// Parse a tool call from the model's tool name and raw JSON arguments
    pub fn parse(name: &str, arguments: &str) -> Result<Self, ToolCallError> {
        let invalid = |source| ToolCallError::InvalidArguments {
            tool: name.to_string(),
            source,
        };

        match name {
            GET_WEATHER => serde_json::from_str(arguments)
                .map(ToolCall::GetWeather)
                .map_err(invalid),
            GET_FLIGHTS => serde_json::from_str(arguments)
                .map(ToolCall::GetFlights)
                .map_err(invalid),
            BOOK_FLIGHT => serde_json::from_str(arguments)
                .map(ToolCall::BookFlight)
                .map_err(invalid),
            other => Err(ToolCallError::UnknownTool(other.to_string())),
        }
    }

    /// The declared tool name
    pub fn name(&self) -> &'static str {
        match self {
            ToolCall::GetWeather(_) => GET_WEATHER,
            ToolCall::GetFlights(_) => GET_FLIGHTS,
            ToolCall::BookFlight(_) => BOOK_FLIGHT,
        }
    }
}

/// Every tool offered to the model: three backend functions plus the
/// provider-native web search and policy document search.
pub fn airline_tool_declarations(vector_store_id: &str) -> Vec<ToolDeclaration> {
    vec![
        create_tool_declaration::<GetWeatherArgs>(
            GET_WEATHER,
            "Returns current weather data for a city. Trigger only if the user asks about \
             the current temperature or weather.",
        ),
        create_tool_declaration::<GetFlightsArgs>(
            GET_FLIGHTS,
            "Use only when the user wants to check available flights between two airports \
             on a specific date.",
        ),
        create_tool_declaration::<BookFlightArgs>(
            BOOK_FLIGHT,
            "Use only when the user wants to book a flight and has provided the flight ID, \
             passenger name and passport number.",
        ),
        ToolDeclaration::WebSearch,
        ToolDeclaration::FileSearch {
            vector_store_ids: vec![vector_store_id.to_string()],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_get_flights() {
        let call = ToolCall::parse(
            "get_flights",
            r#"{"departure_airport":"LAX","arrival_airport":"JFK","date":"2025-06-10"}"#,
        )
        .unwrap();

        assert_eq!(
            call,
            ToolCall::GetFlights(GetFlightsArgs {
                departure_airport: "LAX".to_string(),
                arrival_airport: "JFK".to_string(),
                date: "2025-06-10".to_string(),
            })
        );
        assert_eq!(call.name(), "get_flights");
    }

    #[test]
    fn test_parse_book_flight() {
        let call = ToolCall::parse(
            "book_flight",
            r#"{"flight_id":"FL001","passenger_name":"Jane Doe","passport_number":"X123"}"#,
        )
        .unwrap();

        match call {
            ToolCall::BookFlight(args) => {
                assert_eq!(args.flight_id, "FL001");
                assert_eq!(args.passenger_name, "Jane Doe");
                assert_eq!(args.passport_number, "X123");
            }
            other => panic!("Expected book_flight, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_get_weather() {
        let call = ToolCall::parse("get_weather", r#"{"location":"Kandy, Sri Lanka"}"#).unwrap();
        assert_eq!(call.name(), "get_weather");
    }

    #[test]
    fn test_parse_unknown_tool() {
        let err = ToolCall::parse("cancel_flight", "{}").unwrap_err();
        assert!(matches!(err, ToolCallError::UnknownTool(ref name) if name == "cancel_flight"));
        assert_eq!(err.to_string(), "Unknown tool: cancel_flight");
    }

    #[test]
    fn test_parse_malformed_arguments() {
        let err = ToolCall::parse("get_weather", "{\"location\":").unwrap_err();
        assert!(matches!(err, ToolCallError::InvalidArguments { ref tool, .. } if tool == "get_weather"));

        let err = ToolCall::parse("get_flights", r#"{"departure_airport":"LAX"}"#).unwrap_err();
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn test_airline_tool_declarations() {
        let declarations = airline_tool_declarations("vs_policies");
        assert_eq!(declarations.len(), 5);

        let names: Vec<&str> = declarations
            .iter()
            .filter_map(|decl| decl.function_name())
            .collect();
        assert_eq!(names, vec!["get_weather", "get_flights", "book_flight"]);

        assert_eq!(declarations[3], ToolDeclaration::WebSearch);
        assert_eq!(
            declarations[4],
            ToolDeclaration::FileSearch {
                vector_store_ids: vec!["vs_policies".to_string()]
            }
        );
    }

    #[test]
    fn test_flight_schema_requires_all_fields() {
        let declarations = airline_tool_declarations("vs");
        let ToolDeclaration::Function(get_flights) = &declarations[1] else {
            panic!("Expected function declaration");
        };
        let required = get_flights.parameters["required"].as_array().unwrap();
        assert_eq!(required.len(), 3);
        assert_eq!(get_flights.parameters["additionalProperties"], false);
    }
}
