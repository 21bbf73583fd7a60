pub mod cancel;
pub mod card;
pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod favorites;
pub mod fs;
pub mod logging;
pub mod paths;
pub mod search;
pub mod text;
pub mod tmdb;
pub mod tui;

#[cfg(test)]
pub(crate) mod test_guards;

pub use cancel::{CancelHandle, CancelSignal, cancel_pair};
pub use card::{MovieCard, map_movie_to_card, map_movies_to_cards};
pub use config::{Config, Credentials};
pub use error::{MovieSeekError, Result};
pub use favorites::{Favorites, FavoritesStore, JsonFileStore, MemoryStore};
pub use search::{
    SearchController, SearchEvent, SearchHandle, SearchPhase, SearchSession, SearchSnapshot,
    SearchState, ScrollSentinel,
};
pub use tmdb::{MovieResult, MovieSource, SearchPage, SearchRequest, TmdbClient};
