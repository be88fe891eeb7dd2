use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    Config,
    error::{FetchError, truncate_body},
    icon::IconMap,
    model::{Lookup, WeatherSnapshot},
};

use super::WeatherProvider;

const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";
const NOT_FOUND_CODE: i64 = 404;

#[derive(Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    icons: IconMap,
    http: Client,
}

impl std::fmt::Debug for OpenWeatherProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherProvider")
            .field("base_url", &self.base_url)
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .finish()
    }
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: crate::config::DEFAULT_BASE_URL.to_string(),
            icons: IconMap::openweather(),
            http: Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(FetchError::Client)?;

        Ok(Self {
            api_key: config.api_key_or_empty().to_string(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            icons: IconMap::openweather(),
            http,
        })
    }

    fn current_url(&self) -> String {
        format!("{}{}", self.base_url, CURRENT_WEATHER_PATH)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, query: &str) -> Result<Lookup, FetchError> {
        tracing::debug!(query, "requesting current weather from OpenWeather");

        let res = self
            .http
            .get(self.current_url())
            .query(&[
                ("q", query),
                ("appid", self.api_key.as_str()),
                ("units", "Metric"),
            ])
            .send()
            .await?;

        let status = res.status();
        // Not-found answers come with a 404 status, so the body is needed either way.
        let body = res.text().await?;

        parse_current(status.as_u16(), &body, &self.icons)
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OwCod {
    Number(i64),
    Text(String),
}

impl OwCod {
    fn is_not_found(&self) -> bool {
        match self {
            OwCod::Number(n) => *n == NOT_FOUND_CODE,
            OwCod::Text(s) => s.trim().parse::<i64>().ok() == Some(NOT_FOUND_CODE),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OwEnvelope {
    cod: Option<OwCod>,
}

#[derive(Debug, Deserialize)]
struct OwCoord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    sys: OwSys,
    main: OwMain,
    wind: OwWind,
    coord: OwCoord,
    #[serde(default)]
    weather: Vec<OwWeather>,
}

/// Interpret a current-weather response body.
///
/// The `cod` field is checked before the HTTP status: OpenWeather reports an
/// unknown city as `{"cod":"404",...}`.
pub fn parse_current(status: u16, body: &str, icons: &IconMap) -> Result<Lookup, FetchError> {
    let success = (200..300).contains(&status);

    let envelope = match serde_json::from_str::<OwEnvelope>(body) {
        Ok(envelope) => envelope,
        Err(_) if !success => {
            return Err(FetchError::Status { status, body: truncate_body(body) });
        }
        Err(err) => return Err(FetchError::Parse(err)),
    };

    if envelope.cod.as_ref().is_some_and(OwCod::is_not_found) {
        tracing::debug!("OpenWeather reported city not found");
        return Ok(Lookup::NotFound);
    }

    if !success {
        return Err(FetchError::Status { status, body: truncate_body(body) });
    }

    let parsed: OwCurrentResponse = serde_json::from_str(body)?;

    let icon_code = parsed.weather.into_iter().next().map(|w| w.icon).unwrap_or_default();
    tracing::debug!(icon_code = %icon_code, "resolved OpenWeather icon");

    Ok(Lookup::Found(WeatherSnapshot {
        city: parsed.name,
        country: parsed.sys.country,
        temperature_c: parsed.main.temp,
        humidity_pct: parsed.main.humidity,
        wind_speed: parsed.wind.speed,
        latitude: parsed.coord.lat,
        longitude: parsed.coord.lon,
        icon: icons.resolve(&icon_code),
        icon_code,
    }))
}
