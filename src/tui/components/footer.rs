//! Keyboard shortcuts bar component

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// A single keyboard shortcut entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    pub key: String,
    pub action: String,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

#[derive(Default, Props)]
pub struct FooterProps {
    pub shortcuts: Vec<Shortcut>,
}

/// Keyboard shortcuts bar at the bottom of the screen
#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            column_gap: 2,
            background_color: theme.border,
        ) {
            #(props.shortcuts.iter().map(|shortcut| {
                let key = shortcut.key.clone();
                let action = shortcut.action.clone();
                element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(content: format!("[{key}]"), color: theme.highlight, weight: Weight::Bold)
                        Text(content: format!(" {action}"), color: theme.text)
                    }
                }
            }))
        }
    }
}

/// Shortcuts while the result grid has focus
pub fn grid_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("/", "Search"),
        Shortcut::new("h/j/k/l", "Move"),
        Shortcut::new("g/G", "Top/Bottom"),
        Shortcut::new("f", "Favorite"),
        Shortcut::new("m", "More"),
        Shortcut::new("q", "Quit"),
    ]
}

/// Shortcuts while typing a title
pub fn search_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("Enter", "Search"),
        Shortcut::new("Esc", "Results"),
        Shortcut::new("C-c", "Quit"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_lists() {
        let grid = grid_shortcuts();
        assert!(grid.contains(&Shortcut::new("f", "Favorite")));
        assert!(grid.iter().any(|s| s.key == "q"));

        let search = search_shortcuts();
        assert_eq!(search[0], Shortcut::new("Enter", "Search"));
    }
}
