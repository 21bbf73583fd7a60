//! In-memory [`MovieSource`] that replays queued replies.
//!
//! Used by tests to drive the search controller and session without a
//! network. Every call is recorded so tests can assert on what was requested.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::cancel::CancelSignal;
use crate::error::{MovieSeekError, Result};

use super::{MovieSource, SearchPage, SearchRequest};

#[derive(Debug, Clone)]
pub enum ScriptedReply {
    Page(SearchPage),
    Transport(String),
    Status(u16),
}

#[derive(Debug, Clone)]
struct Step {
    reply: ScriptedReply,
    delay: Option<Duration>,
}

#[derive(Debug, Default)]
struct Inner {
    steps: VecDeque<Step>,
    calls: Vec<SearchRequest>,
}

/// Cloneable handle; clones share the same script and call log.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    inner: Arc<Mutex<Inner>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, reply: ScriptedReply) -> &Self {
        self.inner.lock().steps.push_back(Step { reply, delay: None });
        self
    }

    /// Queue a reply that is only delivered after `delay`.
    pub fn push_delayed(&self, reply: ScriptedReply, delay: Duration) -> &Self {
        self.inner.lock().steps.push_back(Step {
            reply,
            delay: Some(delay),
        });
        self
    }

    pub fn push_page(&self, page: SearchPage) -> &Self {
        self.push(ScriptedReply::Page(page))
    }

    pub fn calls(&self) -> Vec<SearchRequest> {
        self.inner.lock().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.inner.lock().calls.len()
    }
}

impl MovieSource for ScriptedSource {
    async fn search_movies(
        &self,
        request: &SearchRequest,
        cancel: &CancelSignal,
    ) -> Result<SearchPage> {
        let step = {
            let mut inner = self.inner.lock();
            inner.calls.push(request.clone());
            inner.steps.pop_front()
        };

        let Some(step) = step else {
            return Err(MovieSeekError::Other(format!(
                "no scripted reply for page {} of '{}'",
                request.page, request.title
            )));
        };

        if let Some(delay) = step.delay {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(MovieSeekError::Cancelled),
                _ = tokio::time::sleep(delay) => {}
            }
        }
        if cancel.is_cancelled() {
            return Err(MovieSeekError::Cancelled);
        }

        match step.reply {
            ScriptedReply::Page(page) => Ok(page),
            ScriptedReply::Transport(message) => Err(MovieSeekError::Transport(message)),
            ScriptedReply::Status(code) => Err(MovieSeekError::Status(code)),
        }
    }
}

/// Build a page whose results are titled `titles`, with ids derived from the page number.
pub fn page_of(titles: &[&str], page: u32, total_pages: u32) -> SearchPage {
    SearchPage {
        page: Some(page),
        results: titles
            .iter()
            .enumerate()
            .map(|(i, title)| super::MovieResult {
                id: i64::from(page) * 1000 + i as i64,
                title: Some((*title).to_string()),
                release_date: Some("2024-05-17".to_string()),
                overview: Some("Synopsis".to_string()),
                vote_average: Some(7.4),
                poster_path: Some("/poster.jpg".to_string()),
            })
            .collect(),
        total_pages: Some(total_pages),
        total_results: Some(titles.len() as u64),
    }
}
