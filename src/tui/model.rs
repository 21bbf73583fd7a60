//! Browser model types for testable state management
//!
//! Key mapping, grid layout and cursor movement live here as plain values so
//! they can be unit tested without the iocraft framework.

use iocraft::prelude::{KeyCode, KeyModifiers};

/// Rows taken by one card: border (2) + title + year + rating + three plot lines
pub const CARD_HEIGHT: u16 = 8;
/// Narrowest a card is allowed to get before a column is dropped
pub const CARD_MIN_WIDTH: u16 = 32;
/// Lines used by everything except the grid: header, search bar, footer, loading line
pub const CHROME_HEIGHT: u16 = 1 + 3 + 1 + 1;
pub const PLOT_LINES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Top,
    Bottom,
}

/// All possible actions in the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserAction {
    FocusSearch,
    LeaveSearch,
    Submit,
    LoadMore,
    Navigate(Nav),
    ToggleFavorite,
    Quit,
}

/// Map a key press to an action. Keys not listed here fall through to the
/// search input while it has focus.
pub fn action_for_key(
    code: KeyCode,
    modifiers: KeyModifiers,
    search_focused: bool,
) -> Option<BrowserAction> {
    if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
        return Some(BrowserAction::Quit);
    }

    if search_focused {
        return match code {
            KeyCode::Enter => Some(BrowserAction::Submit),
            KeyCode::Esc | KeyCode::Tab => Some(BrowserAction::LeaveSearch),
            _ => None,
        };
    }

    let action = match code {
        KeyCode::Char('/') => BrowserAction::FocusSearch,
        KeyCode::Enter => BrowserAction::Submit,
        KeyCode::Char('q') => BrowserAction::Quit,
        KeyCode::Char('f') => BrowserAction::ToggleFavorite,
        KeyCode::Char('m') => BrowserAction::LoadMore,
        KeyCode::Char('j') | KeyCode::Down => BrowserAction::Navigate(Nav::Down),
        KeyCode::Char('k') | KeyCode::Up => BrowserAction::Navigate(Nav::Up),
        KeyCode::Char('h') | KeyCode::Left => BrowserAction::Navigate(Nav::Left),
        KeyCode::Char('l') | KeyCode::Right => BrowserAction::Navigate(Nav::Right),
        KeyCode::Char('g') | KeyCode::Home => BrowserAction::Navigate(Nav::Top),
        KeyCode::Char('G') | KeyCode::End => BrowserAction::Navigate(Nav::Bottom),
        KeyCode::PageUp => BrowserAction::Navigate(Nav::PageUp),
        KeyCode::PageDown => BrowserAction::Navigate(Nav::PageDown),
        _ => return None,
    };
    Some(action)
}

/// How cards are arranged for a given terminal size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: usize,
    pub visible_rows: usize,
    pub card_width: u16,
}

impl GridLayout {
    pub fn for_terminal(width: u16, height: u16) -> Self {
        let inner_width = width.saturating_sub(2).max(1);
        let columns = (inner_width / CARD_MIN_WIDTH).max(1);
        let grid_height = height.saturating_sub(CHROME_HEIGHT);
        Self {
            columns: columns as usize,
            visible_rows: (grid_height / CARD_HEIGHT).max(1) as usize,
            card_width: inner_width / columns,
        }
    }

    pub fn row_count(&self, items: usize) -> usize {
        items.div_ceil(self.columns)
    }

    pub fn row_of(&self, index: usize) -> usize {
        index / self.columns
    }
}

/// Selected card and first visible row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridCursor {
    pub selected: usize,
    pub scroll_row: usize,
}

impl GridCursor {
    pub fn navigate(&mut self, nav: Nav, layout: &GridLayout, items: usize) {
        if items == 0 {
            *self = Self::default();
            return;
        }
        let last = items - 1;
        let columns = layout.columns;
        let page = columns * layout.visible_rows;

        self.selected = match nav {
            Nav::Up => self.selected.saturating_sub(columns),
            Nav::Down => (self.selected + columns).min(last),
            Nav::Left => self.selected.saturating_sub(1),
            Nav::Right => (self.selected + 1).min(last),
            Nav::PageUp => self.selected.saturating_sub(page),
            Nav::PageDown => (self.selected + page).min(last),
            Nav::Top => 0,
            Nav::Bottom => last,
        };
        self.follow_selection(layout, items);
    }

    /// Clamp into range and scroll so the selected card's row is on screen.
    pub fn follow_selection(&mut self, layout: &GridLayout, items: usize) {
        if items == 0 {
            *self = Self::default();
            return;
        }
        self.selected = self.selected.min(items - 1);

        let row = layout.row_of(self.selected);
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + layout.visible_rows {
            self.scroll_row = row + 1 - layout.visible_rows;
        }
        let max_scroll = layout.row_count(items).saturating_sub(layout.visible_rows);
        self.scroll_row = self.scroll_row.min(max_scroll);
    }

    /// Index range of the cards currently on screen
    pub fn visible_range(&self, layout: &GridLayout, items: usize) -> std::ops::Range<usize> {
        let start = (self.scroll_row * layout.columns).min(items);
        let end = ((self.scroll_row + layout.visible_rows) * layout.columns).min(items);
        start..end
    }

    /// True when the last row of cards, and so the marker after it, is on screen.
    pub fn sentinel_visible(&self, layout: &GridLayout, items: usize) -> bool {
        items > 0 && self.scroll_row + layout.visible_rows >= layout.row_count(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(columns: usize, visible_rows: usize) -> GridLayout {
        GridLayout {
            columns,
            visible_rows,
            card_width: 32,
        }
    }

    #[test]
    fn test_keys_while_searching() {
        let none = KeyModifiers::NONE;
        assert_eq!(
            action_for_key(KeyCode::Enter, none, true),
            Some(BrowserAction::Submit)
        );
        assert_eq!(
            action_for_key(KeyCode::Esc, none, true),
            Some(BrowserAction::LeaveSearch)
        );
        // Letters belong to the input
        assert_eq!(action_for_key(KeyCode::Char('q'), none, true), None);
        assert_eq!(action_for_key(KeyCode::Char('j'), none, true), None);
    }

    #[test]
    fn test_keys_in_grid() {
        let none = KeyModifiers::NONE;
        assert_eq!(
            action_for_key(KeyCode::Char('/'), none, false),
            Some(BrowserAction::FocusSearch)
        );
        assert_eq!(
            action_for_key(KeyCode::Char('j'), none, false),
            Some(BrowserAction::Navigate(Nav::Down))
        );
        assert_eq!(
            action_for_key(KeyCode::Up, none, false),
            Some(BrowserAction::Navigate(Nav::Up))
        );
        assert_eq!(
            action_for_key(KeyCode::Char('f'), none, false),
            Some(BrowserAction::ToggleFavorite)
        );
        assert_eq!(
            action_for_key(KeyCode::Char('q'), none, false),
            Some(BrowserAction::Quit)
        );
        assert_eq!(action_for_key(KeyCode::Char('x'), none, false), None);
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        for focused in [true, false] {
            assert_eq!(
                action_for_key(KeyCode::Char('c'), KeyModifiers::CONTROL, focused),
                Some(BrowserAction::Quit)
            );
        }
    }

    #[test]
    fn test_layout_for_terminal() {
        let l = GridLayout::for_terminal(100, 40);
        assert_eq!(l.columns, 3);
        assert_eq!(l.card_width, 32);
        assert_eq!(l.visible_rows, 4);

        let narrow = GridLayout::for_terminal(20, 5);
        assert_eq!(narrow.columns, 1);
        assert_eq!(narrow.visible_rows, 1);
    }

    #[test]
    fn test_navigation_moves_by_rows_and_clamps() {
        let l = layout(3, 2);
        let mut cursor = GridCursor::default();

        cursor.navigate(Nav::Down, &l, 8);
        assert_eq!(cursor.selected, 3);
        cursor.navigate(Nav::Right, &l, 8);
        assert_eq!(cursor.selected, 4);
        cursor.navigate(Nav::Down, &l, 8);
        assert_eq!(cursor.selected, 7);
        cursor.navigate(Nav::Down, &l, 8);
        assert_eq!(cursor.selected, 7);
        cursor.navigate(Nav::Top, &l, 8);
        assert_eq!(cursor, GridCursor::default());
    }

    #[test]
    fn test_scroll_follows_selection() {
        let l = layout(2, 2);
        let mut cursor = GridCursor::default();
        cursor.navigate(Nav::Bottom, &l, 10);
        assert_eq!(cursor.selected, 9);
        assert_eq!(cursor.scroll_row, 3);
        assert_eq!(cursor.visible_range(&l, 10), 6..10);

        cursor.navigate(Nav::Up, &l, 10);
        cursor.navigate(Nav::Up, &l, 10);
        assert_eq!(cursor.selected, 5);
        assert_eq!(cursor.scroll_row, 2);
    }

    #[test]
    fn test_sentinel_visible_only_at_end() {
        let l = layout(2, 2);
        let mut cursor = GridCursor::default();
        assert!(!cursor.sentinel_visible(&l, 10));
        assert!(!cursor.sentinel_visible(&l, 0));

        cursor.navigate(Nav::Bottom, &l, 10);
        assert!(cursor.sentinel_visible(&l, 10));

        // Fewer cards than fit on screen: the marker is visible straight away
        assert!(GridCursor::default().sentinel_visible(&l, 3));
    }

    #[test]
    fn test_follow_selection_after_list_shrinks() {
        let l = layout(2, 2);
        let mut cursor = GridCursor {
            selected: 9,
            scroll_row: 3,
        };
        cursor.follow_selection(&l, 3);
        assert_eq!(cursor.selected, 2);
        assert_eq!(cursor.scroll_row, 0);
    }
}
