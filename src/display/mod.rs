use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::card::MovieCard;
use crate::text::truncate;

const TITLE_WIDTH: usize = 40;
const PLOT_WIDTH: usize = 60;

/// A row in the search results table
#[derive(Tabled)]
struct MovieRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Year")]
    year: String,
    #[tabled(rename = "Rating")]
    rating: String,
    #[tabled(rename = "Fav")]
    favorite: String,
    #[tabled(rename = "Plot")]
    plot: String,
}

pub fn favorite_marker(favorite: bool) -> &'static str {
    if favorite { "★" } else { "" }
}

/// Render cards as a rounded table. `is_favorite` decides the marker column.
pub fn movie_table(cards: &[MovieCard], is_favorite: impl Fn(i64) -> bool) -> String {
    let rows: Vec<MovieRow> = cards
        .iter()
        .map(|card| MovieRow {
            id: card.id,
            title: truncate(&card.title, TITLE_WIDTH),
            year: card.year.clone(),
            rating: card.rating.clone(),
            favorite: favorite_marker(is_favorite(card.id)).to_string(),
            plot: truncate(&card.plot, PLOT_WIDTH),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// "Page 1 of 3 (55 results)"
pub fn page_summary(page: u32, total_pages: u32, total_results: u64) -> String {
    let noun = if total_results == 1 { "result" } else { "results" };
    format!("Page {page} of {total_pages} ({total_results} {noun})")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: i64, title: &str) -> MovieCard {
        MovieCard {
            id,
            title: title.to_string(),
            year: "1999".to_string(),
            rating: "8.2 / 10".to_string(),
            plot: "A hacker learns the truth.".to_string(),
            poster_url: String::new(),
        }
    }

    #[test]
    fn test_table_contains_rows_and_marker() {
        let cards = vec![card(603, "The Matrix"), card(604, "The Matrix Reloaded")];
        let table = movie_table(&cards, |id| id == 604);
        assert!(table.contains("The Matrix Reloaded"));
        assert!(table.contains("603"));
        assert!(table.contains("★"));
        assert_eq!(table.matches('★').count(), 1);
    }

    #[test]
    fn test_page_summary() {
        assert_eq!(page_summary(1, 3, 55), "Page 1 of 3 (55 results)");
        assert_eq!(page_summary(1, 1, 1), "Page 1 of 1 (1 result)");
    }

    #[test]
    fn test_favorite_marker() {
        assert_eq!(favorite_marker(true), "★");
        assert_eq!(favorite_marker(false), "");
    }
}
