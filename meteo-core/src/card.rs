//! Weather card view model, built from a raw backend response.

use serde_json::Value;
use tracing::warn;

use crate::fields::{self, aliases};
use crate::theme::Theme;

/// Fixed subtitle under the city name.
pub const CARD_SUBTITLE: &str = "Conditions actuelles";

/// Display-ready weather summary. Every field is already a formatted
/// string with placeholders applied; rendering surfaces only lay it out.
#[derive(Debug, Clone)]
pub struct WeatherCard {
    pub city: String,
    pub temperature: String,
    pub condition: String,
    pub icon_url: Option<String>,
    pub theme: Option<Theme>,
    pub country: String,
    pub region: String,
    pub coordinates: String,
    pub feels_like: String,
    pub humidity: String,
    pub wind: String,
    pub pressure: String,
    pub visibility: String,
    pub uv: String,
}

/// Build the card from the raw response. Pure and infallible: a response
/// missing every temperature alias produces a degenerate `NaN°C` card
/// rather than an error.
pub fn build_card(data: &Value) -> WeatherCard {
    if fields::resolve_number(data, aliases::TEMPERATURE).is_none() {
        warn!("no temperature alias resolved, rendering a degenerate card");
    }

    let condition = fields::condition_text(data);
    let theme = Theme::classify(&condition);

    WeatherCard {
        city: fields::city_name(data),
        temperature: fields::temperature_label(data),
        condition,
        icon_url: fields::icon_url(data),
        theme,
        country: fields::country_label(data),
        region: fields::region_label(data),
        coordinates: fields::coordinates_label(data),
        feels_like: fields::feels_like_label(data),
        humidity: fields::humidity_label(data),
        wind: fields::wind_label(data),
        pressure: fields::pressure_label(data),
        visibility: fields::visibility_label(data),
        uv: fields::uv_label(data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_response_builds_full_card() {
        let data = json!({
            "city": "Paris",
            "temperature": 18.6,
            "condition": "Cloudy skies",
            "condition_icon_url": "https://cdn/cloud.png",
            "country": "France",
            "region": "Ile-de-France",
            "latitude": 48.8566,
            "longitude": 2.3522,
            "feels_like": 17.2,
            "humidity": 65,
            "wind_kph": 11.2,
            "wind_dir": "NE",
            "pressure_mb": 1015,
            "visibility_km": 10,
            "uv": 4,
        });

        let card = build_card(&data);
        assert_eq!(card.city, "Paris");
        assert_eq!(card.temperature, "19°C");
        assert_eq!(card.condition, "Cloudy skies");
        assert_eq!(card.icon_url.as_deref(), Some("https://cdn/cloud.png"));
        assert_eq!(card.theme, Some(Theme::Cloudy));
        assert_eq!(card.country, "France");
        assert_eq!(card.region, "Ile-de-France");
        assert_eq!(card.coordinates, "48.86° / 2.35°");
        assert_eq!(card.feels_like, "17°C");
        assert_eq!(card.humidity, "65 %");
        assert_eq!(card.wind, "11.2 km/h (NE)");
        assert_eq!(card.pressure, "1015 hPa");
        assert_eq!(card.visibility, "10 km");
        assert_eq!(card.uv, "4");
    }

    #[test]
    fn cloudy_condition_gets_cloudy_theme_not_sunny() {
        let card = build_card(&json!({ "temperature": 18.6, "condition": "Cloudy skies" }));
        assert_eq!(card.temperature, "19°C");
        assert_eq!(card.theme, Some(Theme::Cloudy));
    }

    #[test]
    fn missing_temperature_builds_a_degenerate_card() {
        let card = build_card(&json!({ "city": "Nulle-Part", "humidity": 40 }));
        assert_eq!(card.temperature, "NaN°C");
        assert_eq!(card.city, "Nulle-Part");
        assert_eq!(card.humidity, "40 %");
    }

    #[test]
    fn empty_response_builds_all_placeholders() {
        let card = build_card(&json!({}));
        assert_eq!(card.city, "Ville");
        assert_eq!(card.temperature, "NaN°C");
        assert_eq!(card.condition, "");
        assert_eq!(card.icon_url, None);
        assert_eq!(card.theme, None);
        assert_eq!(card.coordinates, "Non disponibles");
    }
}
