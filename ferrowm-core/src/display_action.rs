use crate::models::{Handle, WindowChanges, WindowHandle, Xyhw};
use serde::{Deserialize, Serialize};

/// These are responses from the Window manager.
/// The display server should act on these actions, in order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum DisplayAction<H: Handle> {
    /// We started managing this window, select the events we need from it.
    #[serde(bound = "")]
    AddedWindow(WindowHandle<H>),

    #[serde(bound = "")]
    MapWindow(WindowHandle<H>),

    #[serde(bound = "")]
    UnmapWindow(WindowHandle<H>),

    #[serde(bound = "")]
    MoveResizeWindow(WindowHandle<H>, Xyhw),

    /// Raises a given window.
    #[serde(bound = "")]
    MoveToTop(WindowHandle<H>),

    /// Give keyboard focus to a window and mark its border as focused.
    #[serde(bound = "")]
    SetInputFocus(WindowHandle<H>),

    #[serde(bound = "")]
    SetBorderWidth(WindowHandle<H>, i32),

    /// Nicely ask a window if it would please close at its convenience.
    #[serde(bound = "")]
    CloseWindow(WindowHandle<H>),

    /// Apply a configure request as the client asked for it.
    #[serde(bound = "")]
    ConfigureWindow(WindowChanges<H>),
}
