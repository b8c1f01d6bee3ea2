//! Alias-tolerant field resolution over a raw backend response.
//!
//! The backend's JSON shape has drifted over time (`temperature` vs `TempC`
//! vs `temp_c`, `latitude` vs `lat`, ...). Instead of chasing aliases at
//! every render site, each logical field declares one ordered alias list
//! here, and a formatter turns the resolved value into its display string,
//! placeholder included.

use serde_json::Value;

/// Ordered alias lists, one per logical field. The first alias present
/// with a non-null value wins; `0` and `""` are valid resolved values.
pub mod aliases {
    pub const CITY_NAME: &[&str] = &["city", "name"];
    pub const TEMPERATURE: &[&str] = &["temperature", "TempC", "temp_c"];
    pub const CONDITION: &[&str] = &["condition", "Condition"];
    pub const ICON: &[&str] = &["condition_icon_url", "icon"];
    pub const COUNTRY: &[&str] = &["country"];
    pub const REGION: &[&str] = &["region"];
    // The Go backend serializes coordinates as `lat`/`lon`; older payloads
    // spelled them out. The alias list covers both shapes.
    pub const LATITUDE: &[&str] = &["latitude", "lat"];
    pub const LONGITUDE: &[&str] = &["longitude", "lon"];
    pub const FEELS_LIKE: &[&str] = &["feels_like"];
    pub const HUMIDITY: &[&str] = &["humidity"];
    pub const WIND_SPEED: &[&str] = &["wind_kph"];
    pub const WIND_DIR: &[&str] = &["wind_dir"];
    pub const PRESSURE: &[&str] = &["pressure_mb"];
    pub const VISIBILITY: &[&str] = &["visibility_km"];
    pub const UV: &[&str] = &["uv"];
}

/// First alias present in `data` with a non-null value.
pub fn resolve<'a>(data: &'a Value, aliases: &[&str]) -> Option<&'a Value> {
    aliases.iter().filter_map(|key| data.get(key)).find(|v| !v.is_null())
}

/// Resolve a field that must be a JSON number to be usable (anything else
/// would make rounding or fixed-point formatting meaningless).
pub fn resolve_number(data: &Value, aliases: &[&str]) -> Option<f64> {
    resolve(data, aliases).and_then(Value::as_f64)
}

/// Resolve a field displayed in its raw lexical form: numbers keep their
/// JSON spelling, strings pass through unchanged.
pub fn resolve_display(data: &Value, aliases: &[&str]) -> Option<String> {
    match resolve(data, aliases)? {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

pub fn city_name(data: &Value) -> String {
    resolve_display(data, aliases::CITY_NAME).unwrap_or_else(|| "Ville".to_string())
}

/// Rounded temperature with unit. An unresolvable temperature renders the
/// degenerate `NaN°C` label; the card still builds.
pub fn temperature_label(data: &Value) -> String {
    match resolve_number(data, aliases::TEMPERATURE) {
        Some(t) => format!("{}°C", t.round() as i64),
        None => "NaN°C".to_string(),
    }
}

pub fn condition_text(data: &Value) -> String {
    resolve_display(data, aliases::CONDITION).unwrap_or_default()
}

/// Icon URL, if one resolves to a non-empty string.
pub fn icon_url(data: &Value) -> Option<String> {
    resolve_display(data, aliases::ICON).filter(|url| !url.is_empty())
}

pub fn country_label(data: &Value) -> String {
    resolve_display(data, aliases::COUNTRY).unwrap_or_else(|| "Inconnu".to_string())
}

pub fn region_label(data: &Value) -> String {
    resolve_display(data, aliases::REGION).unwrap_or_else(|| "Inconnue".to_string())
}

/// Both coordinates to two decimals, or the placeholder when either one is
/// missing.
pub fn coordinates_label(data: &Value) -> String {
    let lat = resolve_number(data, aliases::LATITUDE);
    let lon = resolve_number(data, aliases::LONGITUDE);
    match (lat, lon) {
        (Some(lat), Some(lon)) => format!("{lat:.2}° / {lon:.2}°"),
        _ => "Non disponibles".to_string(),
    }
}

pub fn feels_like_label(data: &Value) -> String {
    match resolve_number(data, aliases::FEELS_LIKE) {
        Some(t) => format!("{}°C", t.round() as i64),
        None => "NC".to_string(),
    }
}

pub fn humidity_label(data: &Value) -> String {
    match resolve_display(data, aliases::HUMIDITY) {
        Some(h) => format!("{h} %"),
        None => "NC".to_string(),
    }
}

/// Wind speed in km/h, with the direction appended when a non-empty one
/// resolves.
pub fn wind_label(data: &Value) -> String {
    let Some(speed) = resolve_display(data, aliases::WIND_SPEED) else {
        return "NC".to_string();
    };
    match resolve_display(data, aliases::WIND_DIR).filter(|dir| !dir.is_empty()) {
        Some(dir) => format!("{speed} km/h ({dir})"),
        None => format!("{speed} km/h"),
    }
}

pub fn pressure_label(data: &Value) -> String {
    match resolve_display(data, aliases::PRESSURE) {
        Some(p) => format!("{p} hPa"),
        None => "NC".to_string(),
    }
}

pub fn visibility_label(data: &Value) -> String {
    match resolve_display(data, aliases::VISIBILITY) {
        Some(v) => format!("{v} km"),
        None => "NC".to_string(),
    }
}

pub fn uv_label(data: &Value) -> String {
    resolve_display(data, aliases::UV).unwrap_or_else(|| "NC".to_string())
}
