//! OpenWeatherMap current-conditions client

use std::fmt;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::state::Observation;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Lookup failure, displayed verbatim in the widget.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LookupError {
    /// Non-2xx response; `message` is the provider's own text
    #[error("{message}")]
    Provider { status: u16, message: String },
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Decode(String),
    #[error("missing OpenWeatherMap API key")]
    MissingApiKey,
}

/// Provider endpoint and credential.
#[derive(Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    /// No timeout when `None`
    pub timeout: Option<Duration>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: None,
        }
    }
}

// The key must never end up in logs or debug dumps.
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
struct CurrentConditionsResponse {
    weather: Vec<ConditionEntry>,
    main: MainReadings,
    wind: WindReadings,
    name: String,
}

#[derive(Debug, Deserialize)]
struct ConditionEntry {
    icon: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
    humidity: i64,
}

#[derive(Debug, Deserialize)]
struct WindReadings {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: Option<String>,
}

/// Decode a successful response body.
pub fn parse_current_conditions(body: &str) -> Result<Observation, LookupError> {
    let data: CurrentConditionsResponse =
        serde_json::from_str(body).map_err(|e| LookupError::Decode(e.to_string()))?;

    let condition = data
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| LookupError::Decode("response has no weather conditions".to_string()))?;

    Ok(Observation {
        icon_code: condition.icon,
        description: condition.description,
        temperature: data.main.temp,
        humidity: data.main.humidity,
        wind_speed: data.wind.speed,
        location: data.name,
    })
}

/// Build the error for a non-2xx response, preferring the provider's message.
pub fn provider_error(status: u16, body: &str) -> LookupError {
    let message = serde_json::from_str::<ProviderErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("HTTP {status}"));
    LookupError::Provider { status, message }
}

// ============================================================================
// Client
// ============================================================================

#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: reqwest::Client,
    config: ProviderConfig,
}

impl WeatherClient {
    pub fn new(config: ProviderConfig) -> Result<Self, LookupError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| LookupError::Transport(e.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Fetch current conditions for `city` in metric units.
    #[instrument(skip(self))]
    pub async fn current_conditions(&self, city: &str) -> Result<Observation, LookupError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(LookupError::MissingApiKey)?;

        let url = format!(
            "{}/weather?q={}&units=metric&appid={}",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(city),
            urlencoding::encode(api_key)
        );

        debug!("requesting current conditions");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Transport(e.without_url().to_string()))?;

        if !status.is_success() {
            let error = provider_error(status.as_u16(), &body);
            warn!(status = status.as_u16(), error = %error, "provider rejected lookup");
            return Err(error);
        }

        let observation = parse_current_conditions(&body)?;
        debug!(location = %observation.location, temp = observation.temperature, "conditions received");
        Ok(observation)
    }
}
