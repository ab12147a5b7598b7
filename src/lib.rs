//! SmartFin: a terminal navigation shell for a financial dashboard.
//!
//! The core is the menu model ([`menu`]), key resolution and dispatch
//! ([`core`]), and the layout state derived from the current route. The
//! [`ui`] and [`modules`] layers only render what the core exposes.

pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod logging;
pub mod menu;
pub mod modules;
pub mod ui;

pub use app::{App, ShellView};
pub use error::{ConfigError, MenuError, ResolveError};
