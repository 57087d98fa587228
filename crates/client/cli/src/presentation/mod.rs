//! Terminal presentation: setup, styling, layout and widgets.
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use theme::Theme;
