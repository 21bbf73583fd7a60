//! Event-driven search session.
//!
//! A session is a single tokio task that owns a [`SearchState`]. Callers talk
//! to it through a cloneable [`SearchHandle`] and observe it through a
//! `watch` channel of [`SearchSnapshot`]s. Fetches run on their own tasks and
//! report back to the session loop, so every state mutation happens on one
//! task. Starting a submit cancels whatever fetch is still running.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::cancel::{CancelHandle, cancel_pair};
use crate::error::Result;
use crate::tmdb::{MovieSource, SearchPage, SearchRequest};

use super::{ApplyResult, FetchPlan, ScrollSentinel, SearchSnapshot, SearchState};

/// Input accepted by a running session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    SetQuery(String),
    Submit,
    LoadMore,
    /// The scroll sentinel became visible; handled like [`SearchEvent::LoadMore`].
    SentinelVisible,
    Shutdown,
}

/// Cloneable sender side of a session.
#[derive(Debug, Clone)]
pub struct SearchHandle {
    tx: mpsc::UnboundedSender<SearchEvent>,
}

impl SearchHandle {
    /// Deliver `event`; returns false once the session has stopped.
    pub fn send(&self, event: SearchEvent) -> bool {
        self.tx.send(event).is_ok()
    }

    pub fn set_query(&self, query: impl Into<String>) -> bool {
        self.send(SearchEvent::SetQuery(query.into()))
    }

    pub fn submit(&self) -> bool {
        self.send(SearchEvent::Submit)
    }

    pub fn load_more(&self) -> bool {
        self.send(SearchEvent::LoadMore)
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }

    /// A handle with no session behind it; events land in the returned receiver.
    #[cfg(test)]
    pub(crate) fn detached() -> (Self, mpsc::UnboundedReceiver<SearchEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

pub struct SearchSession {
    handle: SearchHandle,
    snapshots: watch::Receiver<SearchSnapshot>,
    task: Option<JoinHandle<()>>,
}

impl SearchSession {
    /// Spawn a session on the current tokio runtime.
    ///
    /// `defaults` supplies the locale and adult flag for every request.
    pub fn spawn<S>(source: S, defaults: SearchRequest) -> Self
    where
        S: MovieSource + 'static,
    {
        let (tx, events) = mpsc::unbounded_channel();
        let (completions_tx, completions) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshots) = watch::channel(SearchSnapshot::default());

        let runner = Runner {
            source: Arc::new(source),
            defaults,
            state: SearchState::default(),
            in_flight: None,
            completions_tx,
            snapshot_tx,
        };
        let task = tokio::spawn(runner.run(events, completions));
        tracing::info!("search session started");

        Self {
            handle: SearchHandle { tx },
            snapshots,
            task: Some(task),
        }
    }

    pub fn handle(&self) -> SearchHandle {
        self.handle.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchSnapshot> {
        self.snapshots.clone()
    }

    pub fn snapshot(&self) -> SearchSnapshot {
        self.snapshots.borrow().clone()
    }

    /// A sentinel wired to this session's event channel.
    pub fn sentinel(&self) -> ScrollSentinel {
        ScrollSentinel::new(self.handle())
    }

    /// Stop the session, cancelling any in-flight fetch and waiting for it to settle.
    pub async fn shutdown(mut self) {
        self.handle.send(SearchEvent::Shutdown);
        if let Some(task) = self.task.take()
            && let Err(e) = task.await
        {
            tracing::warn!("search session task failed: {e}");
        }
    }
}

impl Drop for SearchSession {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

struct InFlight {
    generation: u64,
    cancel: CancelHandle,
    task: JoinHandle<()>,
}

struct Completion {
    plan: FetchPlan,
    outcome: Result<SearchPage>,
}

struct Runner<S: MovieSource + 'static> {
    source: Arc<S>,
    defaults: SearchRequest,
    state: SearchState,
    in_flight: Option<InFlight>,
    completions_tx: mpsc::UnboundedSender<Completion>,
    snapshot_tx: watch::Sender<SearchSnapshot>,
}

impl<S: MovieSource + 'static> Runner<S> {
    async fn run(
        mut self,
        mut events: mpsc::UnboundedReceiver<SearchEvent>,
        mut completions: mpsc::UnboundedReceiver<Completion>,
    ) {
        loop {
            tokio::select! {
                event = events.recv() => match event {
                    Some(SearchEvent::Shutdown) | None => break,
                    Some(event) => self.handle_event(event),
                },
                Some(done) = completions.recv() => self.handle_completion(done),
            }
            self.publish();
        }

        if let Some(in_flight) = self.in_flight.take() {
            in_flight.cancel.cancel();
            let _ = in_flight.task.await;
        }
        tracing::info!("search session stopped");
    }

    fn handle_event(&mut self, event: SearchEvent) {
        match event {
            SearchEvent::SetQuery(query) => self.state.set_query(query),
            SearchEvent::Submit => {
                if let Some(in_flight) = self.in_flight.take() {
                    tracing::debug!(
                        generation = in_flight.generation,
                        "superseding in-flight fetch"
                    );
                    in_flight.cancel.cancel();
                }
                if let Some(plan) = self.state.begin_submit() {
                    self.start(plan);
                }
            }
            SearchEvent::LoadMore | SearchEvent::SentinelVisible => {
                if let Some(plan) = self.state.begin_load_more() {
                    self.start(plan);
                }
            }
            SearchEvent::Shutdown => {}
        }
    }

    fn start(&mut self, plan: FetchPlan) {
        let (cancel, signal) = cancel_pair();
        let request = plan.to_request(&self.defaults);
        let source = Arc::clone(&self.source);
        let tx = self.completions_tx.clone();
        let generation = plan.generation;

        tracing::debug!(generation, page = plan.page, "fetching page");
        let task = tokio::spawn(async move {
            let outcome = source.search_movies(&request, &signal).await;
            let _ = tx.send(Completion { plan, outcome });
        });

        self.in_flight = Some(InFlight {
            generation,
            cancel,
            task,
        });
    }

    fn handle_completion(&mut self, done: Completion) {
        let generation = done.plan.generation;
        let cancelled = matches!(&done.outcome, Err(e) if e.is_cancelled());

        match self.state.apply(&done.plan, done.outcome) {
            ApplyResult::Stale if cancelled => {
                tracing::debug!(generation, "superseded fetch settled");
            }
            ApplyResult::Stale => {
                tracing::warn!(generation, "dropped stale search outcome");
            }
            ApplyResult::Applied | ApplyResult::Cancelled => {
                tracing::debug!(
                    generation,
                    page = self.state.current_page,
                    total_pages = self.state.total_pages,
                    "applied search outcome"
                );
                if self
                    .in_flight
                    .as_ref()
                    .is_some_and(|f| f.generation == generation)
                {
                    self.in_flight = None;
                }
            }
        }
    }

    fn publish(&self) {
        let next = self.state.snapshot();
        self.snapshot_tx.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }
}

impl<S: MovieSource + 'static> Drop for Runner<S> {
    fn drop(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.cancel.cancel();
            in_flight.task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::cancel::CancelSignal;
    use crate::tmdb::scripted::page_of;
    use crate::tmdb::{ScriptedReply, ScriptedSource};

    const WAIT: Duration = Duration::from_secs(2);

    async fn settled(
        rx: &mut watch::Receiver<SearchSnapshot>,
        pred: impl FnMut(&SearchSnapshot) -> bool,
    ) -> SearchSnapshot {
        tokio::time::timeout(WAIT, rx.wait_for(pred))
            .await
            .expect("snapshot did not settle")
            .expect("session closed")
            .clone()
    }

    fn titles(snapshot: &SearchSnapshot) -> Vec<&str> {
        snapshot.movies.iter().map(|m| m.title.as_str()).collect()
    }

    #[tokio::test]
    async fn test_submit_then_load_more() {
        let source = ScriptedSource::new();
        source
            .push_page(page_of(&["Inception"], 1, 2))
            .push_page(page_of(&["Oppenheimer"], 2, 2));

        let session = SearchSession::spawn(source.clone(), SearchRequest::new(""));
        let handle = session.handle();
        let mut rx = session.subscribe();

        handle.set_query("Nolan");
        handle.submit();
        settled(&mut rx, |s| s.current_page == 1 && !s.is_loading()).await;

        handle.load_more();
        let snapshot = settled(&mut rx, |s| s.current_page == 2 && !s.is_loading()).await;
        assert_eq!(titles(&snapshot), vec!["Inception", "Oppenheimer"]);

        handle.load_more();
        handle.submit();
        // The extra load-more was a no-op; the re-submit needs a reply we did not script.
        settled(&mut rx, |s| s.error.is_some()).await;
        assert_eq!(source.call_count(), 3);

        session.shutdown().await;
    }

    #[tokio::test]
    async fn test_newer_submit_wins() {
        let source = ScriptedSource::new();
        source
            .push_delayed(
                ScriptedReply::Page(page_of(&["Alien"], 1, 1)),
                Duration::from_millis(300),
            )
            .push_page(page_of(&["Heat"], 1, 1));

        let session = SearchSession::spawn(source.clone(), SearchRequest::new(""));
        let handle = session.handle();
        let mut rx = session.subscribe();

        handle.set_query("Alien");
        handle.submit();
        tokio::time::sleep(Duration::from_millis(20)).await;
        handle.set_query("Heat");
        handle.submit();

        let snapshot = settled(&mut rx, |s| s.current_page == 1 && !s.is_loading()).await;
        assert_eq!(titles(&snapshot), vec!["Heat"]);

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(titles(&session.snapshot()), vec!["Heat"]);
        assert!(session.snapshot().error.is_none());

        session.shutdown().await;
    }

    /// Ignores cancellation entirely, so only the generation check protects the state.
    struct StubbornSource {
        inner: ScriptedSource,
    }

    impl MovieSource for StubbornSource {
        async fn search_movies(
            &self,
            request: &SearchRequest,
            _cancel: &CancelSignal,
        ) -> Result<SearchPage> {
            let outcome = self
                .inner
                .search_movies(request, &CancelSignal::never())
                .await;
            if request.title == "Alien" {
                tokio::time::sleep(Duration::from_millis(200)).await;
            }
            outcome
        }
    }

    #[tokio::test]
    async fn test_late_response_from_ignored_cancel_is_dropped() {
        let inner = ScriptedSource::new();
        inner
            .push_page(page_of(&["Alien"], 1, 1))
            .push_page(page_of(&["Heat"], 1, 1));

        let session = SearchSession::spawn(StubbornSource { inner }, SearchRequest::new(""));
        let handle = session.handle();
        let mut rx = session.subscribe();

        handle.set_query("Alien");
        handle.submit();
        tokio::time::sleep(Duration::from_millis(20)).await;
        handle.set_query("Heat");
        handle.submit();

        tokio::time::sleep(Duration::from_millis(400)).await;
        let snapshot = settled(&mut rx, |s| !s.is_loading()).await;
        assert_eq!(snapshot.submitted_query, "Heat");
        assert_eq!(titles(&snapshot), vec!["Heat"]);

        session.shutdown().await;
    }

    #[tokio::test]
    async fn test_empty_submit_does_not_fetch() {
        let source = ScriptedSource::new();
        let session = SearchSession::spawn(source.clone(), SearchRequest::new(""));
        let handle = session.handle();

        handle.set_query("   ");
        handle.submit();
        session.shutdown().await;

        assert_eq!(source.call_count(), 0);
    }

    #[tokio::test]
    async fn test_shutdown_cancels_in_flight_fetch() {
        let source = ScriptedSource::new();
        source.push_delayed(
            ScriptedReply::Page(page_of(&["Alien"], 1, 1)),
            Duration::from_secs(30),
        );

        let session = SearchSession::spawn(source.clone(), SearchRequest::new(""));
        let handle = session.handle();
        let mut rx = session.subscribe();
        handle.set_query("Alien");
        handle.submit();
        settled(&mut rx, |s| s.is_initial_loading).await;

        tokio::time::timeout(WAIT, session.shutdown())
            .await
            .expect("shutdown should not wait for the fetch");
        assert!(handle.is_closed());
        assert!(!handle.submit());
    }
}
