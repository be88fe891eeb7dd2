use crate::{Config, error::FetchError, model::Lookup, provider::openweather::OpenWeatherProvider};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod openweather;

/// Source of current weather for a free-text city query.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Issue exactly one request for `query`. No retries.
    async fn current(&self, query: &str) -> Result<Lookup, FetchError>;
}

/// Construct the provider described by `config`.
pub fn provider_from_config(config: &Config) -> Result<Arc<dyn WeatherProvider>, FetchError> {
    if config.api_key.is_none() {
        tracing::warn!(
            "No OpenWeather API key configured; requests will be rejected upstream. \
             Run `cityweather configure` or set OPENWEATHER_API_KEY."
        );
    }

    Ok(Arc::new(OpenWeatherProvider::from_config(config)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_config_accepts_missing_api_key() {
        let cfg = Config::default();
        assert!(provider_from_config(&cfg).is_ok());
    }

    #[test]
    fn provider_from_config_with_timeout() {
        let cfg = Config {
            api_key: Some("KEY".into()),
            timeout_secs: Some(2),
            ..Config::default()
        };
        let provider = provider_from_config(&cfg).unwrap();
        assert!(format!("{provider:?}").contains("OpenWeatherProvider"));
    }
}
