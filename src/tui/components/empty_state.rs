//! Message shown in place of the grid when there are no cards

use iocraft::prelude::*;

use crate::search::SearchSnapshot;
use crate::tui::theme::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyStateKind {
    /// Nothing submitted yet
    #[default]
    Prompt,
    /// A search came back with zero results
    NoResults,
    /// First page in flight
    Loading,
}

impl EmptyStateKind {
    /// Pick the message for a snapshot, or None when cards (or an error) are on screen.
    pub fn for_snapshot(snapshot: &SearchSnapshot) -> Option<Self> {
        if !snapshot.movies.is_empty() || snapshot.error.is_some() {
            return None;
        }
        if snapshot.is_initial_loading {
            return Some(Self::Loading);
        }
        if snapshot.submitted_query.is_empty() || snapshot.current_page == 0 {
            return Some(Self::Prompt);
        }
        Some(Self::NoResults)
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Prompt => "Search for a movie to see results.",
            Self::NoResults => "No results found. Try a different title.",
            Self::Loading => "Searching...",
        }
    }
}

#[derive(Default, Props)]
pub struct EmptyStateProps {
    pub kind: EmptyStateKind,
}

#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let color = match props.kind {
        EmptyStateKind::Loading => theme.text_dimmed,
        _ => theme.text,
    };

    element! {
        View(
            width: 100pct,
            flex_grow: 1.0,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: 2,
        ) {
            Text(content: props.kind.message(), color: color)
        }
    }
}
