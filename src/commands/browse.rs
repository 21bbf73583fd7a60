use std::sync::Arc;

use iocraft::prelude::*;
use parking_lot::Mutex;

use crate::config::Config;
use crate::error::{MovieSeekError, Result};
use crate::favorites::{Favorites, JsonFileStore};
use crate::search::SearchSession;
use crate::tmdb::TmdbClient;
use crate::tui::{BrowserContext, MovieBrowser};

/// Open the interactive browser, optionally searching for `query` right away
pub async fn cmd_browse(query: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let client = TmdbClient::from_config(&config)?;
    client.ensure_credentials()?;

    let defaults = client.request_for("");
    let session = SearchSession::spawn(client, defaults);
    let handle = session.handle();

    let initial_query = query.unwrap_or_default();
    if !initial_query.trim().is_empty() {
        handle.set_query(initial_query.clone());
        handle.submit();
    }

    let context = BrowserContext {
        handle,
        snapshots: session.subscribe(),
        sentinel: Arc::new(Mutex::new(session.sentinel())),
        favorites: Arc::new(Mutex::new(Favorites::open(JsonFileStore::default_location()))),
        initial_query,
    };

    let result = element!(MovieBrowser(context: Some(context)))
        .fullscreen()
        .await
        .map_err(|e| MovieSeekError::Other(format!("TUI error: {e}")));

    session.shutdown().await;
    result
}
