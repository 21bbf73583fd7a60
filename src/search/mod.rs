//! Incremental search state.
//!
//! [`SearchState`] is a plain value: the query text, the accumulated cards,
//! the page cursor and the two loading flags. Transitions that need a network
//! call return a [`FetchPlan`]; the owner runs the fetch and feeds the outcome
//! back through [`SearchState::apply`]. Keeping the state free of I/O lets the
//! sequential [`SearchController`] and the event-driven [`SearchSession`]
//! share exactly the same rules.

pub mod controller;
pub mod sentinel;
pub mod session;

use serde::Serialize;

use crate::card::{MovieCard, map_movies_to_cards};
use crate::error::{MovieSeekError, Result};
use crate::tmdb::{SearchPage, SearchRequest};

pub use controller::SearchController;
pub use sentinel::ScrollSentinel;
pub use session::{SearchEvent, SearchHandle, SearchSession};

pub const SUBMIT_FAILED: &str = "Unable to fetch movies right now.";
pub const LOAD_MORE_FAILED: &str = "Unable to load more movies right now.";

/// Where the search currently is, derived from flags and cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchPhase {
    Idle,
    SubmittingFirstPage,
    LoadingMore,
    Loaded,
    Errored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    Submit,
    LoadMore,
}

/// A fetch the state wants performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchPlan {
    pub generation: u64,
    pub kind: FetchKind,
    pub query: String,
    pub page: u32,
}

impl FetchPlan {
    /// The request for this plan, with locale and adult flag taken from `defaults`.
    pub fn to_request(&self, defaults: &SearchRequest) -> SearchRequest {
        SearchRequest {
            title: self.query.clone(),
            page: self.page,
            language: defaults.language.clone(),
            include_adult: defaults.include_adult,
        }
    }
}

/// What happened to an outcome handed to [`SearchState::apply`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyResult {
    Applied,
    /// A newer fetch has started since this one; the outcome was dropped.
    Stale,
    /// The fetch was cancelled; flags were settled but nothing else changed.
    Cancelled,
}

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub query: String,
    pub movies: Vec<MovieCard>,
    pub error: Option<String>,
    pub is_initial_loading: bool,
    pub is_fetching_more: bool,
    /// Last page loaded, 0 when none
    pub current_page: u32,
    /// Total pages reported for the active query, 0 when unknown
    pub total_pages: u32,
    /// Trimmed query the current results belong to
    submitted_query: String,
    generation: u64,
}

/// Read-only copy of the state published to renderers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchSnapshot {
    pub query: String,
    pub movies: Vec<MovieCard>,
    pub error: Option<String>,
    pub is_initial_loading: bool,
    pub is_fetching_more: bool,
    pub current_page: u32,
    pub total_pages: u32,
    pub submitted_query: String,
}

impl SearchState {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn phase(&self) -> SearchPhase {
        if self.is_initial_loading {
            SearchPhase::SubmittingFirstPage
        } else if self.is_fetching_more {
            SearchPhase::LoadingMore
        } else if self.error.is_some() {
            SearchPhase::Errored
        } else if self.current_page > 0 {
            SearchPhase::Loaded
        } else {
            SearchPhase::Idle
        }
    }

    pub fn is_loading(&self) -> bool {
        self.is_initial_loading || self.is_fetching_more
    }

    /// True when a page has been loaded and the cursor has not reached the end.
    /// An unknown total (0) does not stop continuation.
    pub fn has_more_pages(&self) -> bool {
        self.current_page > 0 && (self.total_pages == 0 || self.current_page < self.total_pages)
    }

    /// Whether the scroll sentinel should be armed for the current state.
    pub fn should_observe_sentinel(&self) -> bool {
        !self.query.trim().is_empty() && !self.movies.is_empty() && self.has_more_pages()
    }

    /// Start a new search for the current query.
    ///
    /// Always supersedes whatever is in flight. Returns `None` when the
    /// trimmed query is empty, in which case the state is reset to idle.
    pub fn begin_submit(&mut self) -> Option<FetchPlan> {
        self.generation += 1;
        self.error = None;
        self.is_fetching_more = false;
        self.current_page = 0;
        self.total_pages = 0;

        let query = self.query.trim().to_string();
        if query.is_empty() {
            self.movies.clear();
            self.submitted_query.clear();
            self.is_initial_loading = false;
            return None;
        }

        self.is_initial_loading = true;
        self.submitted_query = query.clone();
        Some(FetchPlan {
            generation: self.generation,
            kind: FetchKind::Submit,
            query,
            page: 1,
        })
    }

    /// Start fetching the next page, or `None` when continuation is not allowed.
    pub fn begin_load_more(&mut self) -> Option<FetchPlan> {
        if self.is_loading() {
            return None;
        }
        if self.query.trim().is_empty() || self.submitted_query.is_empty() {
            return None;
        }

        let next_page = self.current_page + 1;
        if self.current_page == 0 || (self.total_pages > 0 && next_page > self.total_pages) {
            return None;
        }

        self.generation += 1;
        self.is_fetching_more = true;
        Some(FetchPlan {
            generation: self.generation,
            kind: FetchKind::LoadMore,
            query: self.submitted_query.clone(),
            page: next_page,
        })
    }

    /// Fold a fetch outcome back into the state.
    pub fn apply(&mut self, plan: &FetchPlan, outcome: Result<SearchPage>) -> ApplyResult {
        if plan.generation != self.generation {
            return ApplyResult::Stale;
        }

        match (plan.kind, outcome) {
            (kind, Err(MovieSeekError::Cancelled)) => {
                match kind {
                    FetchKind::Submit => self.is_initial_loading = false,
                    FetchKind::LoadMore => self.is_fetching_more = false,
                }
                ApplyResult::Cancelled
            }
            (FetchKind::Submit, Ok(page)) => {
                self.movies = map_movies_to_cards(&page.results);
                self.advance_cursor(plan.page, &page);
                self.is_initial_loading = false;
                ApplyResult::Applied
            }
            (FetchKind::Submit, Err(err)) => {
                self.error = Some(err.detail().unwrap_or_else(|| SUBMIT_FAILED.to_string()));
                self.movies.clear();
                self.current_page = 0;
                self.total_pages = 0;
                self.is_initial_loading = false;
                ApplyResult::Applied
            }
            (FetchKind::LoadMore, Ok(page)) => {
                self.movies.extend(map_movies_to_cards(&page.results));
                self.advance_cursor(plan.page, &page);
                self.is_fetching_more = false;
                ApplyResult::Applied
            }
            (FetchKind::LoadMore, Err(err)) => {
                self.error = Some(err.detail().unwrap_or_else(|| LOAD_MORE_FAILED.to_string()));
                self.is_fetching_more = false;
                ApplyResult::Applied
            }
        }
    }

    fn advance_cursor(&mut self, requested: u32, page: &SearchPage) {
        self.current_page = page.page.unwrap_or(requested);
        self.total_pages = page.total_pages.unwrap_or(self.current_page);
    }

    pub fn snapshot(&self) -> SearchSnapshot {
        SearchSnapshot {
            query: self.query.clone(),
            movies: self.movies.clone(),
            error: self.error.clone(),
            is_initial_loading: self.is_initial_loading,
            is_fetching_more: self.is_fetching_more,
            current_page: self.current_page,
            total_pages: self.total_pages,
            submitted_query: self.submitted_query.clone(),
        }
    }
}

impl SearchSnapshot {
    pub fn is_loading(&self) -> bool {
        self.is_initial_loading || self.is_fetching_more
    }

    pub fn has_more_pages(&self) -> bool {
        self.current_page > 0 && (self.total_pages == 0 || self.current_page < self.total_pages)
    }
}
