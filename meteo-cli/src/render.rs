//! Terminal rendering: status lines, the weather card, and the two map
//! views. Side effects only; every decision worth testing lives in
//! `meteo-core` view models.

use crossterm::style::{Color, Stylize};
use std::f64::consts::PI;

use meteo_core::{CARD_SUBTITLE, LookupState, MapSurface, MarkerStyle, Theme, WeatherCard};

/// Render one lookup state to stdout. Passed as the render callback of
/// `WeatherFetcher::submit`, so it runs once per state change.
pub fn render_state(state: &LookupState) {
    match state {
        LookupState::Idle => {}
        LookupState::Loading { city } => {
            println!("Chargement de la météo pour {city}...");
        }
        LookupState::Error(message) => {
            println!("{}", message.clone().with(Color::Red));
        }
        LookupState::Success(card) => print_card(card),
    }
}

fn theme_color(theme: Theme) -> Color {
    match theme {
        Theme::Sunny => Color::Yellow,
        Theme::Rainy => Color::Blue,
        Theme::Stormy => Color::Magenta,
        Theme::Cloudy => Color::Grey,
    }
}

/// Parse a `#rrggbb` palette entry. Malformed input falls back to white
/// rather than aborting a render.
fn hex_to_color(hex: &str) -> Color {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return Color::White;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
    Color::Rgb { r: channel(0), g: channel(2), b: channel(4) }
}

/// Print lines inside a box, padding to the widest line. A line may carry
/// a whole-line color.
fn print_boxed(lines: &[(String, Option<Color>)]) {
    let width = lines.iter().map(|(text, _)| text.chars().count()).max().unwrap_or(0);

    println!("┌{}┐", "─".repeat(width + 2));
    for (text, color) in lines {
        let pad = " ".repeat(width - text.chars().count());
        match color {
            Some(color) => println!("│ {}{pad} │", text.clone().with(*color)),
            None => println!("│ {text}{pad} │"),
        }
    }
    println!("└{}┘", "─".repeat(width + 2));
}

fn print_card(card: &WeatherCard) {
    let mut lines: Vec<(String, Option<Color>)> = Vec::new();

    lines.push((card.city.clone(), None));
    if let Some(theme) = card.theme {
        lines.push((format!("[{}]", theme.class_name()), Some(theme_color(theme))));
    }
    lines.push((CARD_SUBTITLE.to_string(), None));
    lines.push((String::new(), None));

    let primary = if card.condition.is_empty() {
        card.temperature.clone()
    } else {
        format!("{}  {}", card.temperature, card.condition)
    };
    lines.push((primary, None));
    if let Some(icon_url) = &card.icon_url {
        lines.push((format!("Icône : {icon_url}"), None));
    }
    lines.push((String::new(), None));

    lines.push((format!("Pays : {}", card.country), None));
    lines.push((format!("Région : {}", card.region), None));
    lines.push((format!("Coordonnées : {}", card.coordinates), None));
    lines.push((String::new(), None));

    lines.push((format!("Température ressentie : {}", card.feels_like), None));
    lines.push((format!("Humidité : {}", card.humidity), None));
    lines.push((format!("Vent : {}", card.wind), None));
    lines.push((format!("Pression : {}", card.pressure), None));
    lines.push((format!("Visibilité : {}", card.visibility), None));
    lines.push((format!("Indice UV : {}", card.uv), None));

    print_boxed(&lines);
}

/// Static grid view: one block per reference city, chip colored by its
/// temperature bucket.
pub fn print_grid() {
    println!("Villes de référence :");
    for cell in meteo_core::grid_cells() {
        let chip = "■".with(hex_to_color(cell.bucket.hex_color()));
        println!(
            "  {chip} {name:<10} {temp:>5}  {region:<9} {class}",
            name = cell.name,
            temp = cell.temp_label,
            region = cell.region,
            class = cell.bucket.class_name(),
        );
    }
}

const MAP_WIDTH: usize = 72;
const MAP_HEIGHT: usize = 24;
const MAX_MERCATOR_LAT: f64 = 85.0511;

/// Web Mercator projection of a coordinate onto the character canvas.
fn project(lat: f64, lon: f64) -> (usize, usize) {
    let x = (lon + 180.0) / 360.0;

    let lat_rad = lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT).to_radians();
    let y = (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0;

    let col = ((x * MAP_WIDTH as f64) as usize).min(MAP_WIDTH - 1);
    let row = ((y * MAP_HEIGHT as f64) as usize).min(MAP_HEIGHT - 1);
    (col, row)
}

#[derive(Clone, Copy)]
struct Cell {
    glyph: char,
    color: Option<Color>,
}

/// Terminal implementation of the mapping collaborator: a Mercator
/// character canvas with a 30° graticule, colored markers, and the tile
/// attribution and popups printed below. Tiles themselves are not fetched;
/// a character grid has nowhere to put them.
pub struct TerminalMapSurface {
    cells: Vec<Vec<Cell>>,
    view: Option<((f64, f64), u8)>,
    attribution: Option<String>,
    legend: Vec<(Color, String)>,
}

impl TerminalMapSurface {
    pub fn new() -> Self {
        Self {
            cells: vec![vec![Cell { glyph: ' ', color: None }; MAP_WIDTH]; MAP_HEIGHT],
            view: None,
            attribution: None,
            legend: Vec::new(),
        }
    }

    fn draw_graticule(&mut self) {
        for lon in (-180..=180).step_by(30) {
            let (col, _) = project(0.0, f64::from(lon));
            for row in 0..MAP_HEIGHT {
                self.cells[row][col] = Cell { glyph: '·', color: None };
            }
        }
        for lat in [-60, -30, 0, 30, 60] {
            let (_, row) = project(f64::from(lat), 0.0);
            for col in 0..MAP_WIDTH {
                self.cells[row][col] = Cell { glyph: '·', color: None };
            }
        }
    }

    /// Print the finished view to stdout.
    pub fn print(self) {
        if let Some(((lat, lon), zoom)) = self.view {
            println!("Carte du monde — centre {lat:.0}°/{lon:.0}°, zoom {zoom}");
        }

        for row in &self.cells {
            for cell in row {
                match cell.color {
                    Some(color) => print!("{}", cell.glyph.to_string().with(color)),
                    None => print!("{}", cell.glyph),
                }
            }
            println!();
        }

        if let Some(attribution) = &self.attribution {
            println!("{attribution}");
        }
        for (color, text) in &self.legend {
            println!("{} {}", "●".with(*color), text);
        }
    }
}

impl Default for TerminalMapSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl MapSurface for TerminalMapSurface {
    fn init(&mut self, center: (f64, f64), zoom: u8) {
        self.view = Some((center, zoom));
        self.draw_graticule();
    }

    fn tile_layer(&mut self, _url_template: &str, attribution: &str, _max_zoom: u8) {
        self.attribution = Some(attribution.to_string());
    }

    fn circle_marker(&mut self, lat: f64, lon: f64, style: MarkerStyle, popup: &str) {
        let color = hex_to_color(style.fill_color);
        let (col, row) = project(lat, lon);
        self.cells[row][col] = Cell { glyph: '●', color: Some(color) };
        self.legend.push((color, popup.replace('\n', " — ")));
    }
}
