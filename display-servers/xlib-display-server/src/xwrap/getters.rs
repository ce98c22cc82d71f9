//! `XWrap` getters.
use super::XlibError;
use crate::XWrap;
use ferrowm_core::models::Xyhw;
use std::ffi::CString;
use std::os::raw::{c_int, c_uint, c_ulong};
use std::slice;
use x11_dl::xlib;

impl XWrap {
    // Public functions.

    /// Returns the child windows of the root.
    /// # Errors
    ///
    /// Will error if the window tree of the root cannot be queried.
    // `XQueryTree`: https://tronche.com/gui/x/xlib/window-information/XQueryTree.html
    pub fn get_all_windows(&self) -> Result<Vec<xlib::Window>, XlibError> {
        unsafe {
            let mut root_return: xlib::Window = std::mem::zeroed();
            let mut parent_return: xlib::Window = std::mem::zeroed();
            let mut array: *mut xlib::Window = std::mem::zeroed();
            let mut length: c_uint = std::mem::zeroed();
            let status: xlib::Status = (self.xlib.XQueryTree)(
                self.display,
                self.root,
                &mut root_return,
                &mut parent_return,
                &mut array,
                &mut length,
            );
            if status == 0 {
                return Err(XlibError::FailedStatus);
            }
            if array.is_null() {
                return Ok(vec![]);
            }
            let windows = slice::from_raw_parts(array, length as usize).to_vec();
            (self.xlib.XFree)(array.cast());
            Ok(windows)
        }
    }

    /// Returns a `XColor` for a color.
    // `XDefaultScreen`: https://tronche.com/gui/x/xlib/display/display-macros.html#DefaultScreen
    // `XDefaultColormap`: https://tronche.com/gui/x/xlib/display/display-macros.html#DefaultColormap
    // `XAllocNamedColor`: https://tronche.com/gui/x/xlib/color/XAllocNamedColor.html
    #[must_use]
    pub fn get_color(&self, color: String) -> c_ulong {
        let name = CString::new(color).unwrap_or_default();
        unsafe {
            let screen = (self.xlib.XDefaultScreen)(self.display);
            let cmap: xlib::Colormap = (self.xlib.XDefaultColormap)(self.display, screen);
            let mut color: xlib::XColor = std::mem::zeroed();
            let mut exact: xlib::XColor = std::mem::zeroed();
            if (self.xlib.XAllocNamedColor)(self.display, cmap, name.as_ptr(), &mut color, &mut exact)
                == 0
            {
                tracing::warn!("Unknown color {:?}, falling back to black", name);
            }
            color.pixel
        }
    }

    /// Returns the default root.
    #[must_use]
    pub const fn get_default_root(&self) -> xlib::Window {
        self.root
    }

    /// Returns the size of the default screen.
    // `XDisplayWidth`: https://tronche.com/gui/x/xlib/display/display-macros.html#DisplayWidth
    #[must_use]
    pub fn get_display_area(&self) -> Xyhw {
        unsafe {
            let screen = (self.xlib.XDefaultScreen)(self.display);
            let width = (self.xlib.XDisplayWidth)(self.display, screen);
            let height = (self.xlib.XDisplayHeight)(self.display, screen);
            Xyhw::new(0, 0, width, height)
        }
    }

    /// Returns the next `Xevent` of the xserver.
    // `XNextEvent`: https://tronche.com/gui/x/xlib/event-handling/manipulating-event-queue/XNextEvent.html
    #[must_use]
    pub fn get_next_event(&self) -> xlib::XEvent {
        unsafe {
            let mut event: xlib::XEvent = std::mem::zeroed();
            (self.xlib.XNextEvent)(self.display, &mut event);
            event
        }
    }

    /// Pops the newest queued event of `event_type`, dropping the older ones.
    // `XCheckTypedEvent`: https://tronche.com/gui/x/xlib/event-handling/manipulating-event-queue/XCheckTypedEvent.html
    #[must_use]
    pub fn drain_typed_events(&self, event_type: c_int) -> Option<xlib::XEvent> {
        let mut newest = None;
        unsafe {
            let mut event: xlib::XEvent = std::mem::zeroed();
            while (self.xlib.XCheckTypedEvent)(self.display, event_type, &mut event) != 0 {
                newest = Some(event);
            }
        }
        newest
    }

    /// Returns the attributes of a window.
    /// # Errors
    ///
    /// Will error if window status is 0 (no attributes).
    // `XGetWindowAttributes`: https://tronche.com/gui/x/xlib/window-information/XGetWindowAttributes.html
    pub fn get_window_attrs(
        &self,
        window: xlib::Window,
    ) -> Result<xlib::XWindowAttributes, XlibError> {
        let mut attrs: xlib::XWindowAttributes = unsafe { std::mem::zeroed() };
        let status = unsafe { (self.xlib.XGetWindowAttributes)(self.display, window, &mut attrs) };
        if status == 0 {
            return Err(XlibError::FailedStatus);
        }
        Ok(attrs)
    }

    /// Returns the geometry of a window, without its border.
    /// # Errors
    ///
    /// Errors if Xlib returns a status of 0.
    pub fn get_window_geometry(&self, window: xlib::Window) -> Result<Xyhw, XlibError> {
        let attrs = self.get_window_attrs(window)?;
        Ok(Xyhw::new(attrs.x, attrs.y, attrs.width, attrs.height))
    }
}
