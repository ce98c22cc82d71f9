//! Window registry, workspaces and event handling of the ferrowm window manager.
// We deny clippy pedantic lints, primarily to keep code as correct as possible
// Remember, the goal of ferrowm is to do one thing and to do that one thing
// well: Be a window manager.
#![warn(clippy::pedantic)]
// Each of these lints are globally allowed because they otherwise make a lot
// of noise.
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
mod action;
pub mod config;
mod display_action;
mod display_event;
pub mod display_servers;
pub mod errors;
mod event_loop;
mod handlers;
pub mod models;
pub mod state;
pub mod utils;

pub use action::Action;
pub use config::{Config, Keybind, ResolvedKeybind};
pub use display_action::DisplayAction;
pub use display_event::DisplayEvent;
pub use display_servers::DisplayServer;
pub use errors::{Result, WmError};
pub use models::Manager;
pub use state::State;
pub use utils::child_process;
