//! World map views over the fixed reference cities.
//!
//! Both views share one temperature-bucket function with two presentation
//! mappings (class name for the grid, hex color for the geo markers). The
//! map never consults live weather data.

/// Temperature range mapped to one display color/class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempBucket {
    Cold,
    Fresh,
    Mild,
    Warm,
    Hot,
}

impl TempBucket {
    /// Bucket for a temperature in °C. Boundaries are inclusive at the
    /// lower comparison: exactly 0 is cold, exactly 30 is warm.
    pub fn for_temp(t: f64) -> Self {
        if t <= 0.0 {
            TempBucket::Cold
        } else if t <= 10.0 {
            TempBucket::Fresh
        } else if t <= 20.0 {
            TempBucket::Mild
        } else if t <= 30.0 {
            TempBucket::Warm
        } else {
            TempBucket::Hot
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            TempBucket::Cold => "temp-cold",
            TempBucket::Fresh => "temp-fresh",
            TempBucket::Mild => "temp-mild",
            TempBucket::Warm => "temp-warm",
            TempBucket::Hot => "temp-hot",
        }
    }

    pub fn hex_color(self) -> &'static str {
        match self {
            TempBucket::Cold => "#0ea5e9",
            TempBucket::Fresh => "#22c55e",
            TempBucket::Mild => "#eab308",
            TempBucket::Warm => "#f97316",
            TempBucket::Hot => "#ef4444",
        }
    }
}

/// A reference city baked into the map views. Defined at compile time,
/// never mutated, never fetched.
#[derive(Debug, Clone, Copy)]
pub struct SeedCity {
    pub name: &'static str,
    pub temp: f64,
    pub region: &'static str,
    pub lat: f64,
    pub lon: f64,
}

/// The five seed cities, shared by the grid and geo views.
pub const SEED_CITIES: [SeedCity; 5] = [
    SeedCity { name: "Paris", temp: 18.0, region: "europe", lat: 48.8566, lon: 2.3522 },
    SeedCity { name: "New York", temp: 22.0, region: "americas", lat: 40.7128, lon: -74.006 },
    SeedCity { name: "Tokyo", temp: 25.0, region: "asia", lat: 35.6895, lon: 139.6917 },
    SeedCity { name: "Sydney", temp: 20.0, region: "oceania", lat: -33.8688, lon: 151.2093 },
    SeedCity { name: "Le Caire", temp: 30.0, region: "africa", lat: 30.0444, lon: 31.2357 },
];

/// One static block of the grid view.
#[derive(Debug, Clone)]
pub struct GridCell {
    pub name: &'static str,
    pub temp_label: String,
    pub region: &'static str,
    pub bucket: TempBucket,
}

/// Grid view over the seed cities. No interactivity.
pub fn grid_cells() -> Vec<GridCell> {
    SEED_CITIES
        .iter()
        .map(|city| GridCell {
            name: city.name,
            temp_label: format!("{}°C", city.temp),
            region: city.region,
            bucket: TempBucket::for_temp(city.temp),
        })
        .collect()
}

pub const MAP_CENTER: (f64, f64) = (20.0, 0.0);
pub const MAP_ZOOM: u8 = 2;
pub const TILE_URL_TEMPLATE: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors";
pub const TILE_MAX_ZOOM: u8 = 19;

/// Circle-marker styling for the geo view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub radius: u8,
    pub fill_color: &'static str,
    pub stroke_color: &'static str,
    pub weight: u8,
    pub opacity: f32,
    pub fill_opacity: f32,
}

/// Mapping/tiling collaborator for the geo view. The CLI implements this
/// as a projected terminal canvas; tests implement it as a recorder.
pub trait MapSurface {
    fn init(&mut self, center: (f64, f64), zoom: u8);
    fn tile_layer(&mut self, url_template: &str, attribution: &str, max_zoom: u8);
    fn circle_marker(&mut self, lat: f64, lon: f64, style: MarkerStyle, popup: &str);
}

/// Drive the geo view onto a surface: world-scale init, one base tile
/// layer, then one colored marker per seed city with its popup.
pub fn render_geo(surface: &mut dyn MapSurface) {
    surface.init(MAP_CENTER, MAP_ZOOM);
    surface.tile_layer(TILE_URL_TEMPLATE, TILE_ATTRIBUTION, TILE_MAX_ZOOM);

    for city in &SEED_CITIES {
        let style = MarkerStyle {
            radius: 8,
            fill_color: TempBucket::for_temp(city.temp).hex_color(),
            stroke_color: "#0b1120",
            weight: 1,
            opacity: 1.0,
            fill_opacity: 0.9,
        };
        let popup = format!("{}\nTempérature approx. : {}°C", city.name, city.temp);
        surface.circle_marker(city.lat, city.lon, style, &popup);
    }
}
