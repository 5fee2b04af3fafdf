//! Reducer - pure function: (state, action) -> DispatchResult
//!
//! Lookup transitions:
//!
//! | action | when | effect on state |
//! |---|---|---|
//! | `WeatherSearch("")` | always | `error_message = "Enter city name"`, no request |
//! | `WeatherSearch(city)` | always | `loading`, error cleared, new pending ticket, `FetchWeather` |
//! | `WeatherDidLoad` | ticket is pending | report, trend, advisory, history updated |
//! | `WeatherDidError` | ticket is pending | `error_message` set, everything else kept |
//! | `WeatherDid*` | stale ticket | ignored |

use tracing::{debug, info};
use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::derived::{advisory_for, trend_points};
use crate::effect::Effect;
use crate::state::{
    AppState, LookupTicket, WeatherReport, EMPTY_CITY_ERROR, FALLBACK_ERROR,
    LOADING_ANIM_CYCLE_TICKS,
};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Weather actions =====
        Action::WeatherSearch(city) => begin_lookup(state, city),

        Action::WeatherDidLoad(ticket, observation) => {
            if !is_pending(state, &ticket) {
                debug!(id = ticket.id, "dropping stale lookup result");
                return DispatchResult::unchanged();
            }
            state.pending = None;
            state.loading = false;

            let report = WeatherReport::from_observation(&observation);
            state.trend = trend_points(report.temperature_celsius);
            state.advisory = Some(advisory_for(&observation));
            state.weather = Some(report);
            state.search_history.remember(&ticket.city);

            info!(city = %ticket.city, location = %observation.location, "lookup succeeded");
            DispatchResult::changed()
        }

        Action::WeatherDidError(ticket, message) => {
            if !is_pending(state, &ticket) {
                debug!(id = ticket.id, "dropping stale lookup failure");
                return DispatchResult::unchanged();
            }
            state.pending = None;
            state.loading = false;
            state.error_message = Some(if message.is_empty() {
                FALLBACK_ERROR.to_string()
            } else {
                message
            });

            info!(city = %ticket.city, "lookup failed");
            DispatchResult::changed()
        }

        // ===== History actions =====
        Action::HistoryReplay(index) => {
            let Some(city) = state.search_history.get(index).map(str::to_string) else {
                return DispatchResult::unchanged();
            };
            begin_lookup(state, city)
        }

        // ===== Search actions =====
        Action::SearchOpen => {
            state.search_mode = true;
            state.search_query.clear();
            DispatchResult::changed()
        }

        Action::SearchClose => {
            state.search_mode = false;
            state.search_query.clear();
            DispatchResult::changed()
        }

        Action::SearchQueryChange(query) => {
            state.search_query = query;
            DispatchResult::changed()
        }

        Action::SearchQuerySubmit(query) => {
            state.search_mode = false;
            state.search_query.clear();
            begin_lookup(state, query)
        }

        // ===== UI actions =====
        Action::UiToggleUnits => {
            state.unit = state.unit.toggle();
            DispatchResult::changed()
        }

        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Tick => {
            if state.loading {
                state.tick_count = state.tick_count.wrapping_add(1) % LOADING_ANIM_CYCLE_TICKS;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Start a lookup, replacing any lookup still in flight.
fn begin_lookup(state: &mut AppState, city: String) -> DispatchResult<Effect> {
    if city.is_empty() {
        state.error_message = Some(EMPTY_CITY_ERROR.to_string());
        return DispatchResult::changed();
    }

    state.next_lookup_id = state.next_lookup_id.wrapping_add(1);
    let ticket = LookupTicket {
        id: state.next_lookup_id,
        city: city.clone(),
    };
    if let Some(previous) = state.pending.replace(ticket.clone()) {
        debug!(id = previous.id, "replacing in-flight lookup");
    }
    state.loading = true;
    state.error_message = None;
    state.current_city = Some(city);
    state.tick_count = 0;

    DispatchResult::changed_with(Effect::FetchWeather(ticket))
}

fn is_pending(state: &AppState, ticket: &LookupTicket) -> bool {
    state.pending.as_ref() == Some(ticket)
}
