//! One-shot search command
//!
//! Fetches a single page of results and prints it as a table or as JSON cards.

use serde_json::json;

use crate::cancel::CancelSignal;
use crate::card::map_movies_to_cards;
use crate::commands::print_json;
use crate::config::Config;
use crate::display::{movie_table, page_summary};
use crate::error::Result;
use crate::favorites::{Favorites, JsonFileStore};
use crate::tmdb::{MovieSource, TmdbClient};

pub struct SearchOptions {
    pub page: u32,
    pub language: Option<String>,
    pub include_adult: bool,
    pub json: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            page: 1,
            language: None,
            include_adult: false,
            json: false,
        }
    }
}

pub async fn cmd_search(title: &str, options: SearchOptions) -> Result<()> {
    let config = Config::load()?;
    let client = TmdbClient::from_config(&config)?;

    let mut request = client.request_for(title).with_page(options.page.max(1));
    if let Some(language) = options.language {
        request = request.with_language(language);
    }
    if options.include_adult {
        request = request.with_include_adult(true);
    }

    let page = client
        .search_movies(&request, &CancelSignal::never())
        .await?;
    let cards = map_movies_to_cards(&page.results);
    let favorites = Favorites::open(JsonFileStore::default_location());

    let current_page = page.page.unwrap_or(request.page);
    let total_pages = page.total_pages.unwrap_or(current_page);
    let total_results = page.total_results.unwrap_or(cards.len() as u64);

    if options.json {
        let movies: Vec<serde_json::Value> = cards
            .iter()
            .map(|card| {
                json!({
                    "id": card.id,
                    "title": card.title,
                    "year": card.year,
                    "rating": card.rating,
                    "plot": card.plot,
                    "poster_url": card.poster_url,
                    "favorite": favorites.contains(card.id),
                })
            })
            .collect();
        return print_json(&json!({
            "query": request.title.trim(),
            "page": current_page,
            "total_pages": total_pages,
            "total_results": total_results,
            "movies": movies,
        }));
    }

    if request.title.trim().is_empty() {
        println!("Search for a movie to see results.");
        return Ok(());
    }

    println!("Search results for: \"{}\"\n", request.title.trim());
    if cards.is_empty() {
        println!("No results found. Try a different title.");
    } else {
        println!("{}", movie_table(&cards, |id| favorites.contains(id)));
    }
    println!("\n{}", page_summary(current_page, total_pages, total_results));

    Ok(())
}
