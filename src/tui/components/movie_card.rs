//! Movie card component for the result grid
//!
//! ```text
//! ╭──────────────────────────────╮
//! │ ★ Alien                      │
//! │ Year: 1979                   │
//! │ Rating: 8.1/10               │
//! │ Plot: During its return to   │
//! │       the earth, commercial  │
//! │       spaceship Nostromo...  │
//! ╰──────────────────────────────╯
//! ```

use iocraft::prelude::*;

use crate::card::{MovieCard, NOT_RATED};
use crate::display::favorite_marker;
use crate::text::{clamp_lines, truncate};
use crate::tui::model::{CARD_HEIGHT, PLOT_LINES};
use crate::tui::theme::theme;

const PLOT_LABEL: &str = "Plot: ";

#[derive(Default, Props)]
pub struct MovieCardViewProps {
    pub card: Option<MovieCard>,
    pub is_selected: bool,
    pub is_favorite: bool,
    /// Outer width including the border
    pub width: u16,
}

/// Plot text laid out under its label: the first line carries the label,
/// the rest are indented to line up with it.
fn plot_lines(plot: &str, inner_width: usize) -> Vec<String> {
    let indent = PLOT_LABEL.len();
    clamp_lines(plot, inner_width.saturating_sub(indent).max(1), PLOT_LINES)
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                line
            } else {
                format!("{:indent$}{line}", "")
            }
        })
        .collect()
}

#[component]
pub fn MovieCardView(props: &MovieCardViewProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(card) = props.card.as_ref() else {
        return element!(View).into_any();
    };

    // Border plus one column of padding on each side
    let inner_width = props.width.saturating_sub(4).max(8) as usize;

    let marker = favorite_marker(props.is_favorite);
    let title_width = if marker.is_empty() {
        inner_width
    } else {
        inner_width.saturating_sub(2)
    };
    let title = truncate(&card.title, title_width);
    let rating_color = if card.rating == NOT_RATED {
        theme.not_rated
    } else {
        theme.rating
    };
    let plot = plot_lines(&card.plot, inner_width);

    let (border_color, background) = if props.is_selected {
        (theme.border_focused, Some(theme.highlight))
    } else {
        (theme.border, None)
    };
    let text_color = if props.is_selected {
        theme.highlight_text
    } else {
        theme.text
    };

    element! {
        View(
            width: props.width,
            height: CARD_HEIGHT,
            flex_direction: FlexDirection::Column,
            flex_shrink: 0.0,
            border_style: BorderStyle::Round,
            border_color: border_color,
            background_color: background,
            padding_left: 1,
            padding_right: 1,
        ) {
            View(flex_direction: FlexDirection::Row) {
                #((!marker.is_empty()).then(|| element! {
                    Text(content: format!("{marker} "), color: theme.favorite, weight: Weight::Bold)
                }))
                Text(content: title, color: theme.title, weight: Weight::Bold)
            }
            View(flex_direction: FlexDirection::Row) {
                Text(content: "Year: ", color: theme.label)
                Text(content: card.year.clone(), color: text_color)
            }
            View(flex_direction: FlexDirection::Row) {
                Text(content: "Rating: ", color: theme.label)
                Text(content: card.rating.clone(), color: rating_color)
            }
            #(plot.into_iter().enumerate().map(|(i, line)| element! {
                View(flex_direction: FlexDirection::Row) {
                    #((i == 0).then(|| element! {
                        Text(content: PLOT_LABEL, color: theme.label)
                    }))
                    Text(content: line, color: text_color)
                }
            }))
        }
    }
    .into_any()
}
