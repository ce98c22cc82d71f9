use crate::models::{Handle, WindowChanges, WindowHandle};
use crate::utils::modmask_lookup::{Button, ModMask};
use crate::utils::xkeysym_lookup::XKeysym;

/// Notifications from the display server the manager reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayEvent<H: Handle> {
    KeyCombo(ModMask, XKeysym),
    ButtonPress {
        /// Child of the root window under the pointer, if any.
        subwindow: Option<WindowHandle<H>>,
        button: Button,
        modmask: ModMask,
        x_root: i32,
        y_root: i32,
    },
    ButtonRelease,
    /// Pointer moved, in root coordinates.
    Motion(i32, i32),
    MapRequest(WindowHandle<H>),
    WindowDestroy(WindowHandle<H>),
    ConfigureRequest(WindowChanges<H>),
    EnterWindow(WindowHandle<H>),
}
