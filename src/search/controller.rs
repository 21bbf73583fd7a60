//! Sequential search controller.
//!
//! Owns a [`SearchState`] and a [`MovieSource`] and performs each fetch inline.
//! Callers await one action at a time, so there is never more than one request
//! in flight. The interactive browser uses [`SearchSession`](super::SearchSession)
//! instead, which runs the same state machine on a background task.

use crate::cancel::CancelSignal;
use crate::tmdb::{MovieSource, SearchRequest};

use super::{ApplyResult, FetchPlan, SearchPhase, SearchState};

pub struct SearchController<S: MovieSource> {
    source: S,
    defaults: SearchRequest,
    state: SearchState,
}

impl<S: MovieSource> SearchController<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            defaults: SearchRequest::new(""),
            state: SearchState::default(),
        }
    }

    /// Use `defaults` for the locale and adult flag of every request.
    pub fn with_defaults(mut self, defaults: SearchRequest) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.state.set_query(query);
        self
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn phase(&self) -> SearchPhase {
        self.state.phase()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.set_query(query);
    }

    /// Replace the results with page 1 of the current query.
    pub async fn submit(&mut self) {
        if let Some(plan) = self.state.begin_submit() {
            self.run(plan).await;
        }
    }

    /// Append the next page if continuation is allowed. Returns whether a fetch ran.
    pub async fn load_more(&mut self) -> bool {
        match self.state.begin_load_more() {
            Some(plan) => {
                self.run(plan).await;
                true
            }
            None => false,
        }
    }

    async fn run(&mut self, plan: FetchPlan) {
        let request = plan.to_request(&self.defaults);
        tracing::debug!(
            generation = plan.generation,
            page = plan.page,
            "fetching page"
        );
        let outcome = self
            .source
            .search_movies(&request, &CancelSignal::never())
            .await;
        if self.state.apply(&plan, outcome) == ApplyResult::Stale {
            tracing::warn!(generation = plan.generation, "dropped stale search outcome");
        }
    }
}
