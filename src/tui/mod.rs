//! Terminal user interface for browsing search results

pub mod browser;
pub mod components;
pub mod model;
pub mod theme;

pub use browser::{BrowserContext, MovieBrowser, MovieBrowserProps};
