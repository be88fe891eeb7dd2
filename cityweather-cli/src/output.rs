use cityweather_core::{Panel, RequestState};

pub const LOADING_MESSAGE: &str = "Loading...";
pub const NOT_FOUND_MESSAGE: &str = "City not found";

/// Text for the current request state. The panel is only produced for `Success`.
pub fn render_state(state: &RequestState) -> Option<String> {
    match state {
        RequestState::Idle => None,
        RequestState::Loading => Some(LOADING_MESSAGE.to_string()),
        RequestState::Success(snapshot) => Some(Panel::new(snapshot).to_string()),
        RequestState::NotFound => Some(NOT_FOUND_MESSAGE.to_string()),
        RequestState::Failed(message) => Some(message.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cityweather_core::{IconAsset, WeatherSnapshot};

    #[test]
    fn non_success_states_have_no_panel() {
        assert_eq!(render_state(&RequestState::Idle), None);
        assert_eq!(render_state(&RequestState::Loading).as_deref(), Some("Loading..."));
        assert_eq!(render_state(&RequestState::NotFound).as_deref(), Some("City not found"));
        assert_eq!(
            render_state(&RequestState::Failed("boom".into())).as_deref(),
            Some("boom")
        );
    }

    #[test]
    fn success_renders_the_panel() {
        let snapshot = WeatherSnapshot {
            city: "Jaffna".into(),
            country: "LK".into(),
            temperature_c: 30.0,
            humidity_pct: 70,
            wind_speed: 5.0,
            latitude: 9.66,
            longitude: 80.0,
            icon: IconAsset::Clear,
            icon_code: "01d".into(),
        };

        let text = render_state(&RequestState::Success(snapshot.clone())).unwrap();
        assert_eq!(text, Panel::new(&snapshot).to_string());
    }
}
