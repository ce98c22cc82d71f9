#[cfg(test)]
mod mock_display_server;

use crate::config::Config;
use crate::display_action::DisplayAction;
use crate::errors::Result;
use crate::models::{Handle, WindowHandle, Xyhw};
use crate::DisplayEvent;
use std::time::Duration;

#[cfg(test)]
pub use self::mock_display_server::{MockDisplayServer, MOCK_WINDOW_GEOMETRY};

pub trait DisplayServer<H: Handle>: Sized {
    /// Connect to the display server and take over window management.
    ///
    /// # Errors
    ///
    /// Fails when the connection cannot be established or another window manager owns the
    /// root window.
    fn new(config: &impl Config) -> Result<Self>;

    /// Every event that is ready, without blocking.
    fn get_next_events(&mut self) -> Vec<DisplayEvent<H>>;

    /// Block until events are ready or `timeout` elapsed.
    ///
    /// # Errors
    ///
    /// Fails when polling the connection failed for another reason than a signal.
    fn wait_readable(&mut self, timeout: Duration) -> Result<()>;

    fn execute_action(&mut self, act: DisplayAction<H>);

    /// Current geometry of a window, `None` when it is gone.
    fn query_geometry(&self, handle: WindowHandle<H>) -> Option<Xyhw>;

    /// Area a fullscreen window covers.
    fn display_area(&self) -> Xyhw;

    fn flush(&self);
}
