use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::error::Result;
use crate::favorites::{Favorites, JsonFileStore};

/// List favorite movie ids in the order they were added
pub fn cmd_favorites_list(json: bool) -> Result<()> {
    let store = JsonFileStore::default_location();
    let path = store.path().to_path_buf();
    let favorites = Favorites::try_open(store)?;

    let ids = favorites.get();
    let text = if ids.is_empty() {
        "No favorites yet.".dimmed().to_string()
    } else {
        ids.iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    };

    CommandOutput::new(json!({
        "favorites": ids,
        "file": path.to_string_lossy(),
    }))
    .with_text(text)
    .print(json)
}

/// Add or remove a movie id
pub fn cmd_favorites_toggle(id: i64, json: bool) -> Result<()> {
    let mut favorites = Favorites::try_open(JsonFileStore::default_location())?;
    let now_favorite = favorites.toggle(id)?;

    let text = if now_favorite {
        format!("Added {} to favorites", id.to_string().cyan())
    } else {
        format!("Removed {} from favorites", id.to_string().cyan())
    };

    CommandOutput::new(json!({
        "action": "favorites_toggle",
        "id": id,
        "favorite": now_favorite,
    }))
    .with_text(text)
    .print(json)
}
