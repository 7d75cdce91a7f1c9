//! Terminal front end: wires the pure core state machine to the engine and
//! draws the bars as text.
mod app;
mod cli;
mod effects;
mod logging;
mod settings;
mod ui;

pub use app::run_app;
pub use cli::Cli;
