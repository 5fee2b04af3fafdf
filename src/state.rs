//! Session state - single source of truth for the widget

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::derived::{self, Advisory};
use crate::history::SearchHistory;
use crate::icons::IconRef;

/// City looked up once at startup.
pub const DEFAULT_CITY: &str = "Pune";

/// Shown when a lookup is submitted without a city.
pub const EMPTY_CITY_ERROR: &str = "Enter city name";

/// Shown when a failure carries no usable text.
pub const FALLBACK_ERROR: &str = "Failed to fetch weather";

/// Raw current conditions as reported by the provider (metric units).
///
/// Advisory rules run against these unrounded values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Observation {
    pub icon_code: String,
    pub description: String,
    pub temperature: f64,
    pub humidity: i64,
    pub wind_speed: f64,
    pub location: String,
}

/// The weather record shown to the user, built from one successful fetch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherReport {
    pub temperature_celsius: i32,
    pub humidity_percent: i64,
    pub wind_speed: f64,
    pub location: String,
    pub icon: IconRef,
}

impl WeatherReport {
    pub fn from_observation(observation: &Observation) -> Self {
        Self {
            temperature_celsius: derived::round_half_up(observation.temperature),
            humidity_percent: observation.humidity,
            wind_speed: observation.wind_speed,
            location: observation.location.clone(),
            icon: IconRef::from_code(&observation.icon_code),
        }
    }
}

/// Identifies one lookup so late results of a replaced lookup can be dropped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LookupTicket {
    pub id: u64,
    pub city: String,
}

/// Temperature unit preference
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum TempUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TempUnit {
    pub fn toggle(&self) -> Self {
        match self {
            TempUnit::Celsius => TempUnit::Fahrenheit,
            TempUnit::Fahrenheit => TempUnit::Celsius,
        }
    }

    /// Convert a stored whole-degree Celsius reading for display.
    pub fn display(&self, celsius: i32) -> i32 {
        match self {
            TempUnit::Celsius => celsius,
            TempUnit::Fahrenheit => derived::celsius_to_fahrenheit(celsius),
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TempUnit::Celsius => "C",
            TempUnit::Fahrenheit => "F",
        }
    }

    /// e.g. `28° C`
    pub fn format(&self, celsius: i32) -> String {
        format!("{}° {}", self.display(celsius), self.symbol())
    }
}

/// Animation timing for the header gradient while a lookup is in flight.
pub const LOADING_ANIM_TICK_MS: u64 = 15;
pub const LOADING_ANIM_CYCLE_TICKS: u32 = 60;

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// Last successfully or currently queried city
    #[debug(section = "Lookup", label = "City", debug_fmt)]
    pub current_city: Option<String>,

    /// Lookup in flight, if any
    #[debug(section = "Lookup", label = "Pending", debug_fmt)]
    pub pending: Option<LookupTicket>,

    /// True from dispatch until the pending lookup resolves
    #[debug(section = "Lookup", label = "Loading")]
    pub loading: bool,

    #[debug(section = "Lookup", label = "Error", debug_fmt)]
    pub error_message: Option<String>,

    /// Only ever replaced by a successful fetch
    #[debug(section = "Weather", label = "Report", debug_fmt)]
    pub weather: Option<WeatherReport>,

    #[debug(section = "Weather", label = "Advisory", debug_fmt)]
    pub advisory: Option<Advisory>,

    /// Synthetic graph points, not historical data
    #[debug(section = "Weather", label = "Trend", debug_fmt)]
    pub trend: Vec<i32>,

    #[debug(section = "Weather", label = "Unit", debug_fmt)]
    pub unit: TempUnit,

    #[debug(section = "History", label = "Cities", debug_fmt)]
    pub search_history: SearchHistory,

    /// Sequence for lookup tickets
    #[debug(skip)]
    pub next_lookup_id: u64,

    // --- Animation internals (skipped) ---
    #[debug(skip)]
    pub tick_count: u32,

    // --- City input overlay (skipped) ---
    #[debug(skip)]
    pub search_mode: bool,

    #[debug(skip)]
    pub search_query: String,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            current_city: None,
            pending: None,
            loading: false,
            error_message: None,
            weather: None,
            advisory: None,
            trend: Vec::new(),
            unit: TempUnit::default(),
            search_history: SearchHistory::default(),
            next_lookup_id: 0,
            tick_count: 0,
            search_mode: false,
            search_query: String::new(),
        }
    }

    /// Temperature of the current report in the selected unit.
    pub fn display_temperature(&self) -> Option<i32> {
        self.weather
            .as_ref()
            .map(|w| self.unit.display(w.temperature_celsius))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
