// src/lib.rs

#[macro_use]
pub mod macros;

pub mod actions;
pub mod app;
pub mod app_state;
pub mod assets;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod event;
pub mod event_log;
pub mod event_names;
pub mod gpu;
pub mod input;
pub mod joystick;
pub mod logging;
pub mod pacing;
pub mod scroll_log;
pub mod ui;
pub mod utils;

pub use app::App;
pub use config::Config;
pub use errors::{HarnessError, HarnessResult};
