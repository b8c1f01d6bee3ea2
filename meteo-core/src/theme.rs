//! Condition-text classification into the card's visual theme.

/// Mutually-exclusive visual theme applied to a rendered card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Sunny,
    Rainy,
    Stormy,
    Cloudy,
}

const SUNNY_KEYWORDS: &[&str] = &["soleil", "sunny", "clear"];
const RAINY_KEYWORDS: &[&str] = &["pluie", "rain", "drizzle"];
const STORMY_KEYWORDS: &[&str] = &["orage", "thunder"];
const CLOUDY_KEYWORDS: &[&str] = &["nuage", "cloud"];

impl Theme {
    /// Classify free-text condition by keyword membership.
    ///
    /// Categories are checked in a fixed priority order (sunny, then rainy,
    /// then stormy, then cloudy) and the first match wins; `None` means no
    /// theme marker at all.
    pub fn classify(condition: &str) -> Option<Theme> {
        let c = condition.to_lowercase();
        let matches = |keywords: &[&str]| keywords.iter().any(|k| c.contains(k));

        if matches(SUNNY_KEYWORDS) {
            Some(Theme::Sunny)
        } else if matches(RAINY_KEYWORDS) {
            Some(Theme::Rainy)
        } else if matches(STORMY_KEYWORDS) {
            Some(Theme::Stormy)
        } else if matches(CLOUDY_KEYWORDS) {
            Some(Theme::Cloudy)
        } else {
            None
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Sunny => "sunny",
            Theme::Rainy => "rainy",
            Theme::Stormy => "stormy",
            Theme::Cloudy => "cloudy",
        }
    }
}
