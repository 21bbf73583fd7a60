//! Scroll sentinel for infinite scroll.
//!
//! The sentinel is a marker after the last row of the result grid. The
//! renderer reports on every frame whether that marker is inside the viewport;
//! on the hidden-to-visible edge of an armed sentinel a
//! [`SearchEvent::SentinelVisible`] is sent to the session.

use super::session::{SearchEvent, SearchHandle};
use super::SearchSnapshot;

/// Inputs that re-arm the sentinel when any of them change
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct ArmKey {
    query: String,
    movie_count: usize,
    current_page: u32,
    total_pages: u32,
}

#[derive(Debug)]
pub struct ScrollSentinel {
    handle: Option<SearchHandle>,
    key: Option<ArmKey>,
    armed: bool,
    visible: bool,
}

impl ScrollSentinel {
    pub fn new(handle: SearchHandle) -> Self {
        Self {
            handle: Some(handle),
            key: None,
            armed: false,
            visible: false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed && self.handle.is_some()
    }

    pub fn is_connected(&self) -> bool {
        self.handle.is_some()
    }

    /// Re-evaluate arming against the latest snapshot.
    ///
    /// Only a change in query, result count or page cursor re-arms; a
    /// re-armed sentinel forgets its last visibility so a marker that is
    /// still on screen fires again.
    pub fn sync(&mut self, snapshot: &SearchSnapshot) {
        let key = ArmKey {
            query: snapshot.query.clone(),
            movie_count: snapshot.movies.len(),
            current_page: snapshot.current_page,
            total_pages: snapshot.total_pages,
        };
        if self.key.as_ref() == Some(&key) {
            return;
        }

        self.armed = !snapshot.query.trim().is_empty()
            && !snapshot.movies.is_empty()
            && snapshot.has_more_pages();
        self.visible = false;
        self.key = Some(key);
    }

    /// Record whether the marker is in the viewport. Returns true when an
    /// event was delivered.
    pub fn report_viewport(&mut self, visible: bool) -> bool {
        let rising = visible && !self.visible;
        self.visible = visible;

        if !rising || !self.armed {
            return false;
        }
        match &self.handle {
            Some(handle) => handle.send(SearchEvent::SentinelVisible),
            None => false,
        }
    }

    /// Stop observing; no event is delivered afterwards.
    pub fn disconnect(&mut self) {
        self.handle = None;
        self.armed = false;
    }
}

impl Drop for ScrollSentinel {
    fn drop(&mut self) {
        self.disconnect();
    }
}
