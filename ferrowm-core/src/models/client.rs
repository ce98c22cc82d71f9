//! A managed top-level window and its bookkeeping record.
use super::{Handle, WindowHandle, Xyhw};
use serde::{Deserialize, Serialize};

/// Stable index of a client slot inside the registry arena.
///
/// Ids are recycled once a client is removed, so they must not be held across a removal.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientId(pub(crate) usize);

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Client<H: Handle> {
    #[serde(bound = "")]
    pub handle: WindowHandle<H>,
    pub(crate) prev: Option<ClientId>,
    pub(crate) next: Option<ClientId>,
    /// Geometry recorded when entering fullscreen.
    pub saved_geometry: Option<Xyhw>,
    pub is_fullscreen: bool,
}

impl<H: Handle> Client<H> {
    #[must_use]
    pub const fn new(handle: WindowHandle<H>) -> Self {
        Self {
            handle,
            prev: None,
            next: None,
            saved_geometry: None,
            is_fullscreen: false,
        }
    }

    #[must_use]
    pub const fn prev(&self) -> Option<ClientId> {
        self.prev
    }

    #[must_use]
    pub const fn next(&self) -> Option<ClientId> {
        self.next
    }

    /// Flip the fullscreen flag.
    ///
    /// Entering stores `current` so that leaving can hand it back. Returns the geometry the
    /// window should take, `None` when leaving fullscreen without a stored geometry.
    pub fn toggle_fullscreen(&mut self, current: Xyhw, display: Xyhw) -> Option<Xyhw> {
        self.is_fullscreen = !self.is_fullscreen;
        if self.is_fullscreen {
            self.saved_geometry = Some(current);
            Some(display)
        } else {
            self.saved_geometry.take()
        }
    }

    /// Forget about fullscreen without restoring anything, used once the user took over the
    /// geometry by dragging the window.
    pub fn clear_fullscreen(&mut self) {
        self.is_fullscreen = false;
        self.saved_geometry = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MockHandle;

    #[test]
    fn toggling_fullscreen_twice_restores_the_geometry() {
        let mut client: Client<MockHandle> = Client::new(WindowHandle(1));
        let original = Xyhw::new(13, 37, 640, 480);
        let display = Xyhw::new(0, 0, 1920, 1080);

        assert_eq!(client.toggle_fullscreen(original, display), Some(display));
        assert!(client.is_fullscreen);
        assert_eq!(client.toggle_fullscreen(display, display), Some(original));
        assert!(!client.is_fullscreen);
        assert_eq!(client.saved_geometry, None);
    }

    #[test]
    fn clearing_fullscreen_drops_the_saved_geometry() {
        let mut client: Client<MockHandle> = Client::new(WindowHandle(1));
        let display = Xyhw::new(0, 0, 1920, 1080);
        client.toggle_fullscreen(Xyhw::new(1, 1, 10, 10), display);
        client.clear_fullscreen();
        assert!(!client.is_fullscreen);
        assert_eq!(client.saved_geometry, None);
    }
}
