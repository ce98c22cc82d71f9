use super::{Handle, WindowHandle, Xyhw};
use crate::utils::modmask_lookup::Button;
use serde::{Deserialize, Serialize};

/// A move or resize gesture that is in progress.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gesture<H: Handle> {
    #[serde(bound = "")]
    pub target: WindowHandle<H>,
    /// Geometry of `target` when the button went down.
    pub anchor_geometry: Xyhw,
    /// Root pointer position when the button went down.
    pub anchor_pointer: (i32, i32),
    pub button: Button,
}

impl<H: Handle> Gesture<H> {
    #[must_use]
    pub const fn delta(&self, x_root: i32, y_root: i32) -> (i32, i32) {
        (x_root - self.anchor_pointer.0, y_root - self.anchor_pointer.1)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionState<H: Handle> {
    Idle,
    #[serde(bound = "")]
    Dragging(Gesture<H>),
}

impl<H: Handle> Default for InteractionState<H> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<H: Handle> InteractionState<H> {
    #[must_use]
    pub const fn gesture(&self) -> Option<&Gesture<H>> {
        match self {
            Self::Dragging(gesture) => Some(gesture),
            Self::Idle => None,
        }
    }

    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
