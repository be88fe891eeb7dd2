use serde::Serialize;

use crate::icon::IconAsset;

/// Normalized weather for one successful lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherSnapshot {
    pub city: String,
    pub country: String,
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub wind_speed: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub icon: IconAsset,
    /// Raw provider icon code the asset was resolved from.
    pub icon_code: String,
}

/// Result of a lookup the provider answered.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Found(WeatherSnapshot),
    /// The provider does not know the queried city.
    NotFound,
}

/// What the lookup widget currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(WeatherSnapshot),
    NotFound,
    Failed(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        match self {
            RequestState::Success(snapshot) => Some(snapshot),
            _ => None,
        }
    }
}
