//! Core library for the `cityweather` CLI.
//!
//! This crate defines:
//! - Configuration handling
//! - The weather provider abstraction and its OpenWeather implementation
//! - Shared domain models (snapshots, request state, icons)
//! - The lookup controller and the display panel
//!
//! It is used by `cityweather-cli`, but can also be reused by other front ends.

pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod icon;
pub mod model;
pub mod provider;

pub use config::Config;
pub use controller::{Completion, InputEvent, Key, LookupController, Ticket};
pub use display::Panel;
pub use error::FetchError;
pub use icon::{IconAsset, IconMap};
pub use model::{Lookup, RequestState, WeatherSnapshot};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};
