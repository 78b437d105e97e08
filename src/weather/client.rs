use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::WeatherService;

/// OpenWeatherMap current-weather endpoint
pub const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Subset of the current-weather payload this client reads
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    /// Kept as sent so `29.0` is not shortened to `29`
    pub temp: serde_json::Number,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherCondition {
    pub description: String,
}

/// Error payload returned on non-success statuses
#[derive(Debug, Clone, Deserialize)]
struct ProviderError {
    #[serde(default)]
    message: Option<String>,
}

/// Client for the OpenWeatherMap current weather API
pub struct OpenWeatherClient {
    http_client: Client,
    api_key: SecretString,
    base_url: String,
}

impl OpenWeatherClient {
    /// Create a new weather client
    ///
    /// # Errors
    ///
    /// Returns the underlying error if the HTTP client cannot be built.
    pub fn new(api_key: SecretString, base_url: impl Into<String>) -> reqwest::Result<Self> {
        let http_client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .build()?;

        Ok(Self {
            http_client,
            api_key,
            base_url: base_url.into(),
        })
    }

    async fn fetch(&self, location: &str) -> reqwest::Result<(StatusCode, String)> {
        let response = self
            .http_client
            .get(&self.base_url)
            .query(&[
                ("q", location),
                ("appid", self.api_key.expose_secret()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        Ok((status, body))
    }
}

#[async_trait]
impl WeatherService for OpenWeatherClient {
    #[tracing::instrument(skip(self))]
    async fn current_weather(&self, location: &str) -> String {
        match self.fetch(location).await {
            Ok((status, body)) => {
                tracing::debug!(status = status.as_u16(), "weather provider responded");
                describe_weather(location, status, &body)
            }
            Err(e) => {
                tracing::warn!(error = %e, "weather request failed");
                apology(location, &e.to_string())
            }
        }
    }
}

/// Turn a provider response into the sentence handed back to the model
pub fn describe_weather(location: &str, status: StatusCode, body: &str) -> String {
    if status.is_success() {
        return match serde_json::from_str::<CurrentWeather>(body) {
            Ok(weather) => {
                let description = weather
                    .weather
                    .first()
                    .map(|condition| condition.description.as_str())
                    .unwrap_or("no further details");
                format!(
                    "The current temperature in {} is {}°C with {}.",
                    location, weather.main.temp, description
                )
            }
            Err(e) => apology(location, &format!("unexpected response ({})", e)),
        };
    }

    let reason = serde_json::from_str::<ProviderError>(body)
        .ok()
        .and_then(|error| error.message)
        .unwrap_or_else(|| "Unknown error".to_string());
    apology(location, &reason)
}

fn apology(location: &str, reason: &str) -> String {
    format!(
        "Sorry, I couldn't get the weather for {}. Reason: {}",
        location, reason
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_weather_success() {
        let body = r#"{
            "coord": {"lon": 79.85, "lat": 6.93},
            "weather": [{"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d"}],
            "main": {"temp": 29.4, "feels_like": 33.1, "humidity": 74},
            "name": "Colombo",
            "cod": 200
        }"#;

        let text = describe_weather("Colombo, Sri Lanka", StatusCode::OK, body);
        assert_eq!(
            text,
            "The current temperature in Colombo, Sri Lanka is 29.4°C with broken clouds."
        );
    }

    #[test]
    fn test_describe_weather_keeps_temperature_as_sent() {
        let whole_float = r#"{"weather":[{"description":"clear sky"}],"main":{"temp":29.0}}"#;
        assert_eq!(
            describe_weather("Colombo", StatusCode::OK, whole_float),
            "The current temperature in Colombo is 29.0°C with clear sky."
        );

        let integer = r#"{"weather":[{"description":"clear sky"}],"main":{"temp":-3}}"#;
        assert_eq!(
            describe_weather("Oslo", StatusCode::OK, integer),
            "The current temperature in Oslo is -3°C with clear sky."
        );
    }

    #[test]
    fn test_describe_weather_provider_error_message() {
        let body = r#"{"cod":"404","message":"city not found"}"#;
        let text = describe_weather("Atlantis", StatusCode::NOT_FOUND, body);

        assert!(text.starts_with("Sorry, I couldn't get the weather for Atlantis."));
        assert!(text.contains("city not found"));
    }

    #[test]
    fn test_describe_weather_invalid_key() {
        let body = r#"{"cod":401, "message": "Invalid API key. Please see https://openweathermap.org/faq#error401 for more info."}"#;
        let text = describe_weather("London", StatusCode::UNAUTHORIZED, body);
        assert!(text.contains("Invalid API key"));
    }

    #[test]
    fn test_describe_weather_error_without_json() {
        let text = describe_weather("London", StatusCode::BAD_GATEWAY, "<html>502</html>");
        assert_eq!(
            text,
            "Sorry, I couldn't get the weather for London. Reason: Unknown error"
        );
    }

    #[test]
    fn test_describe_weather_success_with_unexpected_body() {
        let text = describe_weather("London", StatusCode::OK, r#"{"cod":200}"#);
        assert!(text.starts_with("Sorry, I couldn't get the weather for London."));
        assert!(text.contains("unexpected response"));
    }

    #[tokio::test]
    async fn test_current_weather_unreachable_provider() {
        // Port 9 (discard) on loopback is not expected to accept HTTP
        let client = OpenWeatherClient::new(
            SecretString::from("test-key".to_string()),
            "http://127.0.0.1:9/data/2.5/weather",
        )
        .unwrap();
        let text = client.current_weather("Paris").await;

        assert!(text.starts_with("Sorry, I couldn't get the weather for Paris. Reason:"));
    }
}
