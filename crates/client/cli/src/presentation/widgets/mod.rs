//! Widgets composing the hexcrawl screen. Each is a plain render function.
pub mod footer;
pub mod legend;
pub mod map;
pub mod messages;
