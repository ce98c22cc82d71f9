//! Xlib calls related to a window.
use super::CLIENT_EVENT_MASK;
use crate::XWrap;
use std::os::raw::c_long;
use x11_dl::xlib;

impl XWrap {
    /// Starts listening to the events we need from a window we now manage.
    pub fn setup_managed_window(&self, window: xlib::Window) {
        self.subscribe_to_event(window, CLIENT_EVENT_MASK);
        self.set_window_border_color(window, self.colors.normal);
    }

    // `XMapWindow`: https://tronche.com/gui/x/xlib/window/XMapWindow.html
    pub fn map_window(&self, window: xlib::Window) {
        unsafe { (self.xlib.XMapWindow)(self.display, window) };
    }

    // `XUnmapWindow`: https://tronche.com/gui/x/xlib/window/XUnmapWindow.html
    pub fn unmap_window(&self, window: xlib::Window) {
        unsafe { (self.xlib.XUnmapWindow)(self.display, window) };
    }

    // `XMoveResizeWindow`: https://tronche.com/gui/x/xlib/window/XMoveResizeWindow.html
    pub fn move_resize_window(&self, window: xlib::Window, x: i32, y: i32, w: u32, h: u32) {
        unsafe {
            (self.xlib.XMoveResizeWindow)(self.display, window, x, y, w, h);
        }
    }

    /// Raise a window.
    // `XRaiseWindow`: https://tronche.com/gui/x/xlib/window/XRaiseWindow.html
    pub fn move_to_top(&self, window: xlib::Window) {
        unsafe {
            (self.xlib.XRaiseWindow)(self.display, window);
        }
    }

    /// Makes a window take focus, repainting the borders of it and of the one losing focus.
    pub fn window_take_focus(&mut self, window: xlib::Window) {
        let previous = self.focused_window;
        if previous != window && previous != self.root {
            self.set_window_border_color(previous, self.colors.normal);
        }
        self.focused_window = window;
        self.set_window_border_color(window, self.colors.active);
        self.focus(window);
    }

    /// Focuses a window.
    // `XSetInputFocus`: https://tronche.com/gui/x/xlib/input/XSetInputFocus.html
    pub fn focus(&self, window: xlib::Window) {
        unsafe {
            (self.xlib.XSetInputFocus)(
                self.display,
                window,
                xlib::RevertToParent,
                xlib::CurrentTime,
            );
        }
    }

    /// Forget a window that is gone, so focus changes don't paint it.
    pub fn forget_window(&mut self, window: xlib::Window) {
        if self.focused_window == window {
            self.focused_window = self.root;
        }
    }

    /// Asks a window to close through `WM_DELETE_WINDOW`.
    ///
    /// Windows that do not take part in the protocol are left alone; whether to go away is
    /// the application's decision.
    pub fn request_close(&self, window: xlib::Window) {
        if !self.send_xevent_atom(window, self.atoms.WMDelete) {
            tracing::trace!("{} does not support WM_DELETE_WINDOW, leaving it open", window);
        }
    }

    /// Subscribe to an event of a window.
    // `XSelectInput`: https://tronche.com/gui/x/xlib/event-handling/XSelectInput.html
    pub fn subscribe_to_event(&self, window: xlib::Window, mask: c_long) {
        unsafe { (self.xlib.XSelectInput)(self.display, window, mask) };
    }
}
