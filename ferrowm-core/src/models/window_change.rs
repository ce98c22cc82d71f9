use super::{Handle, WindowHandle};
use serde::{Deserialize, Serialize};

/// Geometry and stacking a client asked for in a configure request.
///
/// Only the fields the client flagged in its request are `Some`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowChanges<H: Handle> {
    #[serde(bound = "")]
    pub handle: WindowHandle<H>,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub border_width: Option<i32>,
    #[serde(bound = "")]
    pub sibling: Option<WindowHandle<H>>,
    pub stack_mode: Option<i32>,
}

impl<H: Handle> WindowChanges<H> {
    #[must_use]
    pub const fn new(handle: WindowHandle<H>) -> Self {
        Self {
            handle,
            x: None,
            y: None,
            width: None,
            height: None,
            border_width: None,
            sibling: None,
            stack_mode: None,
        }
    }
}
