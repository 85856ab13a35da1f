//! UI layer: app shell, theme, and table/pagination widgets.

pub mod app;
pub mod theme;
pub mod widgets;

pub use app::TagsExplorerApp;
pub use theme::ThemeSettings;
