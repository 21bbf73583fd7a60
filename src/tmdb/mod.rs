//! TMDB movie search.
//!
//! This module defines the wire shapes of the `/search/movie` endpoint and the
//! [`MovieSource`] trait the search controller fetches pages through.

pub mod client;
#[doc(hidden)]
pub mod scripted;

use serde::{Deserialize, Serialize};

use crate::cancel::CancelSignal;
use crate::config::DEFAULT_LANGUAGE;
use crate::error::Result;

pub use client::TmdbClient;
#[doc(hidden)]
pub use scripted::{ScriptedReply, ScriptedSource};

/// A single raw search result as returned by TMDB
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieResult {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

/// One page of search results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub results: Vec<MovieResult>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub total_results: Option<u64>,
}

impl SearchPage {
    /// The page returned for a blank title, without touching the network.
    pub fn empty() -> Self {
        Self {
            page: Some(1),
            results: Vec::new(),
            total_pages: Some(0),
            total_results: Some(0),
        }
    }
}

/// Parameters for a single search call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub title: String,
    pub page: u32,
    pub language: String,
    pub include_adult: bool,
}

impl SearchRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            page: 1,
            language: DEFAULT_LANGUAGE.to_string(),
            include_adult: false,
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_include_adult(mut self, include_adult: bool) -> Self {
        self.include_adult = include_adult;
        self
    }
}

/// Common interface for anything that can answer a movie search
pub trait MovieSource: Send + Sync {
    /// Fetch one page of results. Implementations must return
    /// [`MovieSeekError::Cancelled`](crate::error::MovieSeekError::Cancelled)
    /// rather than data once `cancel` has fired.
    fn search_movies(
        &self,
        request: &SearchRequest,
        cancel: &CancelSignal,
    ) -> impl std::future::Future<Output = Result<SearchPage>> + Send;
}
