use iocraft::prelude::*;

use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct ErrorBannerProps {
    pub message: Option<String>,
}

/// Single line error message shown under the search bar
#[component]
pub fn ErrorBanner(props: &ErrorBannerProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(message) = props.message.clone() else {
        return element!(View(height: 0)).into_any();
    };

    element! {
        View(width: 100pct, height: 1, flex_shrink: 0.0, padding_left: 1) {
            Text(content: format!("! {message}"), color: theme.error, weight: Weight::Bold)
        }
    }
    .into_any()
}
