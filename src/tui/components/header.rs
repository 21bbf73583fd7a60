//! App header bar component

use iocraft::prelude::*;

use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct HeaderProps {
    /// Number of cards currently loaded
    pub movie_count: usize,
    /// "Page 2 of 7" style cursor, shown once a page has arrived
    pub page_label: Option<String>,
}

/// Title bar with the result count on the right
#[component]
pub fn Header(props: &HeaderProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let count = match props.movie_count {
        1 => "1 movie".to_string(),
        n => format!("{n} movies"),
    };

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.highlight,
        ) {
            Text(content: "MovieSeek", color: theme.highlight_text, weight: Weight::Bold)
            View(flex_direction: FlexDirection::Row, gap: 2) {
                #(props.page_label.clone().map(|label| element! {
                    Text(content: label, color: theme.highlight_text)
                }))
                Text(content: count, color: theme.highlight_text)
            }
        }
    }
}
