//! Effects - side effects declared by the reducer

use crate::state::LookupTicket;

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch current conditions for the ticket's city
    FetchWeather(LookupTicket),
}
