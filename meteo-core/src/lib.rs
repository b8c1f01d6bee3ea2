//! Core library for the `meteo` terminal front-end.
//!
//! This crate defines:
//! - The lookup pipeline: input validation, request dispatch, failure
//!   classification, and the alias-tolerant card renderer
//! - The world-map views over the fixed reference cities
//! - Configuration handling
//!
//! It is used by `meteo-cli`, but can also be reused by other binaries or
//! services. Rendering stays out of this crate: every view model here is a
//! plain value, and side effects happen behind the render callbacks and
//! the [`map::MapSurface`] seam.

pub mod card;
pub mod config;
pub mod error;
pub mod fetch;
pub mod fields;
pub mod map;
pub mod theme;

pub use card::{CARD_SUBTITLE, WeatherCard, build_card};
pub use config::{Config, DEFAULT_BACKEND_URL};
pub use error::{ErrorBody, ErrorBodyParse, FetchFailure, classify};
pub use fetch::{
    BackendClient, EMPTY_INPUT_MESSAGE, LookupEvent, LookupState, WeatherFetcher, WeatherSource,
    transition,
};
pub use map::{
    GridCell, MapSurface, MarkerStyle, SEED_CITIES, SeedCity, TempBucket, grid_cells, render_geo,
};
pub use theme::Theme;
