//! Terminal hex-crawl map viewer built on `hex-core`.
pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod message;
pub mod presentation;
pub mod session;
pub mod terrain;

pub use app::CliApp;
pub use config::CliConfig;
pub use session::{Command, Outcome, Session, SessionError};
