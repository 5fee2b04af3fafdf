//! Actions - every state transition of the widget

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::{LookupTicket, Observation};

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Weather category =====
    /// Intent: look up current conditions for a city (empty = validation error)
    WeatherSearch(String),

    /// Result: provider returned current conditions
    WeatherDidLoad(LookupTicket, Observation),

    /// Result: lookup failed (provider, transport or decode error text)
    WeatherDidError(LookupTicket, String),

    // ===== History category =====
    /// Replay the history entry at the given index
    HistoryReplay(usize),

    // ===== Search category =====
    /// Open city input overlay
    SearchOpen,

    /// Close input overlay (cancel)
    SearchClose,

    /// Input text changed
    SearchQueryChange(String),

    /// Submit the typed city
    SearchQuerySubmit(String),

    // ===== UI category =====
    /// Toggle between Celsius and Fahrenheit
    UiToggleUnits,

    /// Force a re-render (for cursor movement, etc.)
    Render,

    // ===== Uncategorized (global) =====
    /// Periodic tick for loading animation
    Tick,

    /// Exit the application
    Quit,
}
