use serde::Serialize;

/// Local icon asset shown next to the temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconAsset {
    Clear,
    Clouds,
    Drizzle,
    Rain,
    Snow,
}

impl IconAsset {
    pub fn file_name(&self) -> &'static str {
        match self {
            IconAsset::Clear => "clear.png",
            IconAsset::Clouds => "clouds.png",
            IconAsset::Drizzle => "drizzle.png",
            IconAsset::Rain => "rain.png",
            IconAsset::Snow => "snowy.png",
        }
    }

    /// Single-glyph rendition for terminals.
    pub fn glyph(&self) -> &'static str {
        match self {
            IconAsset::Clear => "☀",
            IconAsset::Clouds => "☁",
            IconAsset::Drizzle => "🌦",
            IconAsset::Rain => "🌧",
            IconAsset::Snow => "❄",
        }
    }
}

impl std::fmt::Display for IconAsset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Read-only table from OpenWeather icon codes to local assets.
#[derive(Debug, Clone, Copy)]
pub struct IconMap {
    entries: &'static [(&'static str, IconAsset)],
}

const OPENWEATHER_ICONS: &[(&str, IconAsset)] = &[
    ("01d", IconAsset::Clear),
    ("01n", IconAsset::Clear),
    ("02d", IconAsset::Clouds),
    ("02n", IconAsset::Clouds),
    ("03d", IconAsset::Drizzle),
    ("03n", IconAsset::Drizzle),
    ("04d", IconAsset::Drizzle),
    ("04n", IconAsset::Drizzle),
    ("09d", IconAsset::Rain),
    ("09n", IconAsset::Rain),
    ("10d", IconAsset::Rain),
    ("10n", IconAsset::Rain),
    ("13d", IconAsset::Snow),
    ("13n", IconAsset::Snow),
];

impl IconMap {
    pub const FALLBACK: IconAsset = IconAsset::Clear;

    pub const fn openweather() -> Self {
        Self { entries: OPENWEATHER_ICONS }
    }

    pub fn get(&self, code: &str) -> Option<IconAsset> {
        self.entries.iter().find(|(c, _)| *c == code).map(|(_, asset)| *asset)
    }

    /// Mapped asset for `code`, or [`IconMap::FALLBACK`] when the code is unknown.
    pub fn resolve(&self, code: &str) -> IconAsset {
        self.get(code).unwrap_or(Self::FALLBACK)
    }
}

impl Default for IconMap {
    fn default() -> Self {
        Self::openweather()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_and_night_codes_share_assets() {
        let map = IconMap::openweather();
        assert_eq!(map.resolve("01d"), IconAsset::Clear);
        assert_eq!(map.resolve("02n"), IconAsset::Clouds);
        assert_eq!(map.resolve("04d"), IconAsset::Drizzle);
        assert_eq!(map.resolve("10n"), IconAsset::Rain);
        assert_eq!(map.resolve("13d"), IconAsset::Snow);
    }

    #[test]
    fn every_table_entry_resolves_to_itself() {
        let map = IconMap::openweather();
        for (code, asset) in OPENWEATHER_ICONS {
            assert_eq!(map.get(code), Some(*asset), "code {code}");
        }
    }

    #[test]
    fn unknown_codes_fall_back_to_clear() {
        let map = IconMap::openweather();
        // thunderstorm and mist are not in the table
        assert_eq!(map.get("11d"), None);
        assert_eq!(map.resolve("11d"), IconAsset::Clear);
        assert_eq!(map.resolve("50n"), IconAsset::Clear);
        assert_eq!(map.resolve(""), IconAsset::Clear);
    }

    #[test]
    fn asset_file_names() {
        assert_eq!(IconAsset::Snow.file_name(), "snowy.png");
        assert_eq!(IconAsset::Clouds.to_string(), "clouds.png");
    }
}
