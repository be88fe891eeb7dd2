//! Display panel for a weather snapshot.

use std::fmt;

use crate::model::WeatherSnapshot;

/// Static text layout of one [`WeatherSnapshot`].
///
/// Pure field substitution; whether to show it at all is up to the caller.
#[derive(Debug, Clone, Copy)]
pub struct Panel<'a> {
    snapshot: &'a WeatherSnapshot,
}

impl<'a> Panel<'a> {
    pub fn new(snapshot: &'a WeatherSnapshot) -> Self {
        Self { snapshot }
    }
}

impl fmt::Display for Panel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.snapshot;

        writeln!(f, "  {}  ({})", s.icon.glyph(), s.icon.file_name())?;
        writeln!(f, "  {}°C", s.temperature_c)?;
        writeln!(f, "  {}", s.city)?;
        writeln!(f, "  {}", s.country)?;
        writeln!(f)?;
        writeln!(f, "  latitude   {}", s.latitude)?;
        writeln!(f, "  longitude  {}", s.longitude)?;
        writeln!(f)?;
        writeln!(f, "  {}%  Humidity", s.humidity_pct)?;
        write!(f, "  {} m/s  Wind Speed", s.wind_speed)
    }
}
