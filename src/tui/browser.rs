//! Interactive movie browser (`movieseek browse`)
//!
//! Renders the search session's snapshots as a card grid. Moving the
//! selection onto the last row brings the scroll marker into view, which asks
//! the session for the next page.

use std::sync::Arc;

use iocraft::prelude::*;
use parking_lot::Mutex;
use tokio::sync::watch;

use crate::favorites::{Favorites, JsonFileStore};
use crate::search::{ScrollSentinel, SearchHandle, SearchSnapshot};
use crate::tui::components::movie_grid::GridItem;
use crate::tui::components::{
    EmptyState, EmptyStateKind, ErrorBanner, Footer, Header, MovieGrid, SearchBar,
    grid_shortcuts, search_shortcuts,
};
use crate::tui::model::{BrowserAction, GridCursor, GridLayout, action_for_key};
use crate::tui::theme::theme;

/// Everything the browser needs from the running session
#[derive(Clone)]
pub struct BrowserContext {
    pub handle: SearchHandle,
    pub snapshots: watch::Receiver<SearchSnapshot>,
    pub sentinel: Arc<Mutex<ScrollSentinel>>,
    pub favorites: Arc<Mutex<Favorites<JsonFileStore>>>,
    pub initial_query: String,
}

#[derive(Default, Props)]
pub struct MovieBrowserProps {
    pub context: Option<BrowserContext>,
}

fn page_label(snapshot: &SearchSnapshot) -> Option<String> {
    (snapshot.current_page > 0).then(|| {
        format!(
            "Page {} of {}",
            snapshot.current_page,
            snapshot.total_pages.max(snapshot.current_page)
        )
    })
}

/// Main browser component
///
/// Layout:
/// ```text
/// +------------------------------------------+
/// | MovieSeek              Page 1 of 3  20 m |
/// | / Enter movie name here...    [Search]   |
/// | ! error                                  |
/// | [card] [card] [card]                     |
/// | [card] [card] [card]                     |
/// | Loading more results...                  |
/// | Footer with shortcuts                    |
/// +------------------------------------------+
/// ```
#[component]
pub fn MovieBrowser(props: &MovieBrowserProps, mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();
    let theme = theme();

    let ctx = props.context.clone();
    let initial_query = ctx
        .as_ref()
        .map(|c| c.initial_query.clone())
        .unwrap_or_default();

    let snapshot: State<SearchSnapshot> = hooks.use_state(SearchSnapshot::default);
    let query = hooks.use_state({
        let initial_query = initial_query.clone();
        move || initial_query
    });
    let mut search_focused = hooks.use_state(|| initial_query.trim().is_empty());
    let mut cursor = hooks.use_state(GridCursor::default);
    let mut favorite_ids: State<Vec<i64>> = hooks.use_state({
        let favorites = ctx.as_ref().map(|c| c.favorites.clone());
        move || {
            favorites
                .map(|f| f.lock().get().to_vec())
                .unwrap_or_default()
        }
    });
    let mut notice: State<Option<String>> = hooks.use_state(|| None);
    let mut should_exit = hooks.use_state(|| false);

    // Mirror session snapshots into component state
    let snapshot_pump: Handler<()> = hooks.use_async_handler({
        let receiver = ctx.as_ref().map(|c| c.snapshots.clone());
        move |()| {
            let receiver = receiver.clone();
            let mut snapshot = snapshot;
            Box::pin(async move {
                let Some(mut receiver) = receiver else {
                    return;
                };
                loop {
                    let latest = receiver.borrow_and_update().clone();
                    snapshot.set(latest);
                    if receiver.changed().await.is_err() {
                        break;
                    }
                }
            })
        }
    });

    let mut pump_started = hooks.use_state(|| false);
    if !pump_started.get() {
        pump_started.set(true);
        snapshot_pump.clone()(());
    }

    let current: SearchSnapshot = snapshot.read().clone();
    let layout = GridLayout::for_terminal(width, height);
    let item_count = current.movies.len();

    let mut view_cursor = cursor.get();
    view_cursor.follow_selection(&layout, item_count);
    if view_cursor != cursor.get() {
        cursor.set(view_cursor);
    }

    let sentinel_visible = view_cursor.sentinel_visible(&layout, item_count);
    if let Some(ctx) = &ctx {
        let mut sentinel = ctx.sentinel.lock();
        sentinel.sync(&current);
        if sentinel.report_viewport(sentinel_visible) {
            tracing::debug!(movies = item_count, "scroll marker reached");
        }
    }

    hooks.use_terminal_events({
        let handle = ctx.as_ref().map(|c| c.handle.clone());
        let favorites = ctx.as_ref().map(|c| c.favorites.clone());
        let movie_ids: Vec<i64> = current.movies.iter().map(|m| m.id).collect();
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let Some(action) = action_for_key(code, modifiers, search_focused.get()) else {
                    return;
                };
                match action {
                    BrowserAction::Quit => should_exit.set(true),
                    BrowserAction::FocusSearch => search_focused.set(true),
                    BrowserAction::LeaveSearch => search_focused.set(false),
                    BrowserAction::Submit => {
                        let title = query.to_string();
                        if let Some(handle) = &handle {
                            handle.set_query(title.clone());
                            handle.submit();
                        }
                        cursor.set(GridCursor::default());
                        notice.set(None);
                        search_focused.set(title.trim().is_empty());
                    }
                    BrowserAction::LoadMore => {
                        if let Some(handle) = &handle {
                            handle.load_more();
                        }
                    }
                    BrowserAction::Navigate(nav) => {
                        let mut next = cursor.get();
                        next.navigate(nav, &layout, movie_ids.len());
                        cursor.set(next);
                    }
                    BrowserAction::ToggleFavorite => {
                        let (Some(favorites), Some(&id)) =
                            (&favorites, movie_ids.get(cursor.get().selected))
                        else {
                            return;
                        };
                        let mut favorites = favorites.lock();
                        let result = favorites.toggle(id);
                        favorite_ids.set(favorites.get().to_vec());
                        match result {
                            Ok(_) => notice.set(None),
                            Err(e) => {
                                notice.set(Some(format!("Could not save favorites: {e}")));
                            }
                        }
                    }
                }
            }
            _ => {}
        }
    });

    if should_exit.get() {
        if let Some(ctx) = &ctx {
            ctx.sentinel.lock().disconnect();
        }
        system.exit();
    }

    let error_message = current.error.clone().or_else(|| notice.read().clone());
    let empty_kind = EmptyStateKind::for_snapshot(&current);
    let shortcuts = if search_focused.get() {
        search_shortcuts()
    } else {
        grid_shortcuts()
    };

    let favorites_now = favorite_ids.read().clone();
    let items: Vec<GridItem> = current.movies[view_cursor.visible_range(&layout, item_count)]
        .iter()
        .enumerate()
        .map(|(offset, card)| GridItem {
            card: card.clone(),
            is_selected: !search_focused.get()
                && view_cursor.scroll_row * layout.columns + offset == view_cursor.selected,
            is_favorite: favorites_now.contains(&card.id),
        })
        .collect();

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Header(movie_count: item_count, page_label: page_label(&current))
            View(width: 100pct, padding_left: 1, padding_right: 1, flex_shrink: 0.0) {
                SearchBar(
                    value: Some(query),
                    has_focus: search_focused.get(),
                    has_error: current.error.is_some(),
                    is_loading: current.is_initial_loading,
                    handle: ctx.as_ref().map(|c| c.handle.clone()),
                )
            }
            ErrorBanner(message: error_message)
            #(match empty_kind {
                Some(kind) => element! { EmptyState(kind) }.into_any(),
                None => element! {
                    MovieGrid(
                        items,
                        columns: layout.columns,
                        card_width: layout.card_width,
                        is_fetching_more: current.is_fetching_more,
                        sentinel_visible,
                        has_more_pages: current.has_more_pages(),
                    )
                }.into_any(),
            })
            Footer(shortcuts)
        }
    }
}
