//! Title input with a search button
//!
//! Typing is forwarded to the search session as it happens; submitting is left
//! to the browser's key handler.

use iocraft::prelude::*;

use crate::search::SearchHandle;
use crate::tui::theme::theme;

pub const PLACEHOLDER: &str = "Enter movie name here...";

#[derive(Default, Props)]
pub struct SearchBarProps {
    /// State for the typed title
    pub value: Option<State<String>>,
    pub has_focus: bool,
    /// Paints the border in the error color
    pub has_error: bool,
    /// First page in flight: the button reads "Searching" and is dimmed
    pub is_loading: bool,
    /// Session to notify on every keystroke
    pub handle: Option<SearchHandle>,
}

#[component]
pub fn SearchBar(props: &SearchBarProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let border_color = if props.has_error {
        theme.border_error
    } else if props.has_focus {
        theme.border_focused
    } else {
        theme.border
    };
    let (button_label, button_color) = if props.is_loading {
        ("Searching", theme.button_disabled)
    } else {
        ("Search", theme.button)
    };

    let Some(mut value) = props.value else {
        return element! {
            View(height: 3, border_style: BorderStyle::Round, border_color: border_color) {
                Text(content: "No value state provided", color: theme.text_dimmed)
            }
        };
    };

    let handle = props.handle.clone();
    let show_placeholder = value.read().is_empty() && !props.has_focus;

    element! {
        View(
            width: 100pct,
            height: 3,
            flex_shrink: 0.0,
            flex_direction: FlexDirection::Row,
            gap: 1,
        ) {
            View(
                flex_grow: 1.0,
                flex_direction: FlexDirection::Row,
                border_style: BorderStyle::Round,
                border_color: border_color,
                padding_left: 1,
                padding_right: 1,
            ) {
                View(margin_right: 1) {
                    Text(content: "/", color: theme.text_dimmed)
                }
                View(flex_grow: 1.0) {
                    #(if show_placeholder {
                        element! {
                            Text(content: PLACEHOLDER, color: theme.text_dimmed)
                        }.into_any()
                    } else {
                        element! {
                            TextInput(
                                value: value.to_string(),
                                has_focus: props.has_focus,
                                on_change: move |new_value: String| {
                                    if let Some(handle) = &handle {
                                        handle.set_query(new_value.clone());
                                    }
                                    value.set(new_value);
                                },
                                color: theme.text,
                            )
                        }.into_any()
                    })
                }
            }
            View(
                border_style: BorderStyle::Round,
                border_color: button_color,
                padding_left: 1,
                padding_right: 1,
            ) {
                Text(content: button_label, color: button_color, weight: Weight::Bold)
            }
        }
    }
}
