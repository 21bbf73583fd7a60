//! Mapping raw TMDB results into display-ready movie cards.

use serde::{Deserialize, Serialize};

use crate::tmdb::MovieResult;

pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
pub const POSTER_PLACEHOLDER: &str = "https://placehold.co/400x600?text=No+Poster";
pub const UNKNOWN_YEAR: &str = "Unknown";
pub const NOT_RATED: &str = "Not Rated";
pub const NO_SYNOPSIS: &str = "No synopsis available.";

/// A movie ready for rendering. Every field has already had its fallback applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieCard {
    pub id: i64,
    pub title: String,
    pub year: String,
    pub rating: String,
    pub plot: String,
    pub poster_url: String,
}

pub fn map_movie_to_card(movie: &MovieResult) -> MovieCard {
    let year = match movie.release_date.as_deref() {
        Some(date) if !date.is_empty() => date.chars().take(4).collect(),
        _ => UNKNOWN_YEAR.to_string(),
    };

    let rating = match movie.vote_average {
        Some(score) if score != 0.0 && !score.is_nan() => format!("{score:.1} / 10"),
        _ => NOT_RATED.to_string(),
    };

    let poster_url = match movie.poster_path.as_deref() {
        Some(path) if !path.is_empty() => format!("{IMAGE_BASE_URL}{path}"),
        _ => POSTER_PLACEHOLDER.to_string(),
    };

    let plot = match movie.overview.as_deref() {
        Some(overview) if !overview.is_empty() => overview.to_string(),
        _ => NO_SYNOPSIS.to_string(),
    };

    MovieCard {
        id: movie.id,
        title: movie.title.clone().unwrap_or_default(),
        year,
        rating,
        plot,
        poster_url,
    }
}

pub fn map_movies_to_cards(movies: &[MovieResult]) -> Vec<MovieCard> {
    movies.iter().map(map_movie_to_card).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie() -> MovieResult {
        MovieResult {
            id: 603,
            title: Some("The Matrix".to_string()),
            release_date: Some("1999-03-30".to_string()),
            overview: Some("A hacker learns the truth.".to_string()),
            vote_average: Some(8.217),
            poster_path: Some("/matrix.jpg".to_string()),
        }
    }

    #[test]
    fn test_full_record() {
        let card = map_movie_to_card(&movie());
        assert_eq!(
            card,
            MovieCard {
                id: 603,
                title: "The Matrix".to_string(),
                year: "1999".to_string(),
                rating: "8.2 / 10".to_string(),
                plot: "A hacker learns the truth.".to_string(),
                poster_url: "https://image.tmdb.org/t/p/w500/matrix.jpg".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_release_date() {
        let mut m = movie();
        m.release_date = None;
        assert_eq!(map_movie_to_card(&m).year, "Unknown");

        m.release_date = Some(String::new());
        assert_eq!(map_movie_to_card(&m).year, "Unknown");
    }

    #[test]
    fn test_iso_dates_yield_first_four_chars() {
        for date in ["2001-01-01", "1895-12-28", "2024-07-19"] {
            let mut m = movie();
            m.release_date = Some(date.to_string());
            assert_eq!(map_movie_to_card(&m).year, &date[..4]);
        }
    }

    #[test]
    fn test_zero_or_absent_rating() {
        let mut m = movie();
        m.vote_average = Some(0.0);
        assert_eq!(map_movie_to_card(&m).rating, "Not Rated");

        m.vote_average = None;
        assert_eq!(map_movie_to_card(&m).rating, "Not Rated");
    }

    #[test]
    fn test_rating_rounds_to_one_decimal() {
        let mut m = movie();
        m.vote_average = Some(7.0);
        assert_eq!(map_movie_to_card(&m).rating, "7.0 / 10");

        m.vote_average = Some(6.66);
        assert_eq!(map_movie_to_card(&m).rating, "6.7 / 10");
    }

    #[test]
    fn test_poster_placeholder() {
        let mut m = movie();
        m.poster_path = None;
        assert_eq!(map_movie_to_card(&m).poster_url, POSTER_PLACEHOLDER);
    }

    #[test]
    fn test_missing_overview() {
        let mut m = movie();
        m.overview = Some(String::new());
        assert_eq!(map_movie_to_card(&m).plot, "No synopsis available.");
    }
}
