//! Result grid with the infinite-scroll marker after the last row

use iocraft::prelude::*;

use super::movie_card::MovieCardView;
use crate::card::MovieCard;
use crate::tui::theme::theme;

/// One visible card with its per-frame flags
#[derive(Debug, Clone)]
pub struct GridItem {
    pub card: MovieCard,
    pub is_selected: bool,
    pub is_favorite: bool,
}

#[derive(Default, Props)]
pub struct MovieGridProps {
    /// Cards in the viewport, row-major
    pub items: Vec<GridItem>,
    pub columns: usize,
    pub card_width: u16,
    pub is_fetching_more: bool,
    /// The marker row is inside the viewport
    pub sentinel_visible: bool,
    pub has_more_pages: bool,
}

#[component]
pub fn MovieGrid(props: &MovieGridProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let columns = props.columns.max(1);
    let card_width = props.card_width;

    let rows: Vec<Vec<GridItem>> = props
        .items
        .chunks(columns)
        .map(|row| row.to_vec())
        .collect();

    let footer = if props.is_fetching_more {
        Some(("Loading more results...", theme.text_dimmed))
    } else if props.sentinel_visible && props.has_more_pages {
        Some(("More results below (m to load)", theme.text_dimmed))
    } else {
        None
    };

    element! {
        View(
            width: 100pct,
            flex_grow: 1.0,
            flex_direction: FlexDirection::Column,
            overflow: Overflow::Hidden,
            padding_left: 1,
        ) {
            #(rows.into_iter().map(|row| element! {
                View(flex_direction: FlexDirection::Row, flex_shrink: 0.0) {
                    #(row.into_iter().map(|item| element! {
                        MovieCardView(
                            card: Some(item.card),
                            is_selected: item.is_selected,
                            is_favorite: item.is_favorite,
                            width: card_width,
                        )
                    }))
                }
            }))
            #(footer.map(|(message, color)| element! {
                View(width: 100pct, height: 1, flex_shrink: 0.0, justify_content: JustifyContent::Center) {
                    Text(content: message, color: color)
                }
            }))
        }
    }
}
