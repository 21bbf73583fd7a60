//! Movie browser components

pub mod empty_state;
pub mod error_banner;
pub mod footer;
pub mod header;
pub mod movie_card;
pub mod movie_grid;
pub mod search_bar;

pub use empty_state::{EmptyState, EmptyStateKind, EmptyStateProps};
pub use error_banner::{ErrorBanner, ErrorBannerProps};
pub use footer::{Footer, FooterProps, Shortcut, grid_shortcuts, search_shortcuts};
pub use header::{Header, HeaderProps};
pub use movie_card::{MovieCardView, MovieCardViewProps};
pub use movie_grid::{MovieGrid, MovieGridProps};
pub use search_bar::{SearchBar, SearchBarProps};
