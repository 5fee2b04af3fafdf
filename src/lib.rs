//! Weather lookup widget
//!
//! A terminal weather widget built on tui-dispatch: look up a city, see its
//! current conditions, an advisory, a small trend graph and recent searches.
//! This library exposes the modules for testing.

pub mod action;
pub mod api;
pub mod components;
pub mod derived;
pub mod effect;
pub mod history;
pub mod icons;
pub mod reducer;
pub mod state;
