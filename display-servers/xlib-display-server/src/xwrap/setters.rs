//! `XWrap` setters.
use crate::{XWrap, XlibWindowHandle};
use ferrowm_core::models::{WindowChanges, WindowHandle};
use std::os::raw::c_ulong;
use x11_dl::xlib;

impl XWrap {
    // `XSetWindowBorder`: https://tronche.com/gui/x/xlib/window/XSetWindowBorder.html
    pub fn set_window_border_color(&self, window: xlib::Window, mut color: c_ulong) {
        unsafe {
            // Force border opacity to 0xff.
            let mut bytes = color.to_le_bytes();
            bytes[3] = 0xff;
            color = c_ulong::from_le_bytes(bytes);
            (self.xlib.XSetWindowBorder)(self.display, window, color);
        }
    }

    // `XSetWindowBorderWidth`: https://tronche.com/gui/x/xlib/window/XSetWindowBorderWidth.html
    pub fn set_window_border_width(&self, window: xlib::Window, width: i32) {
        unsafe { (self.xlib.XSetWindowBorderWidth)(self.display, window, width.max(0) as u32) };
    }

    /// Passes a configure request through, with only the fields the client asked for.
    // `XConfigureWindow`: https://tronche.com/gui/x/xlib/window/XConfigureWindow.html
    pub fn set_window_config(&self, changes: &WindowChanges<XlibWindowHandle>) {
        let WindowHandle(XlibWindowHandle(window)) = changes.handle;
        let mut window_changes: xlib::XWindowChanges = unsafe { std::mem::zeroed() };
        let mut unlock: u16 = 0;
        if let Some(x) = changes.x {
            window_changes.x = x;
            unlock |= xlib::CWX;
        }
        if let Some(y) = changes.y {
            window_changes.y = y;
            unlock |= xlib::CWY;
        }
        if let Some(width) = changes.width {
            window_changes.width = width;
            unlock |= xlib::CWWidth;
        }
        if let Some(height) = changes.height {
            window_changes.height = height;
            unlock |= xlib::CWHeight;
        }
        if let Some(border_width) = changes.border_width {
            window_changes.border_width = border_width;
            unlock |= xlib::CWBorderWidth;
        }
        if let Some(WindowHandle(XlibWindowHandle(sibling))) = changes.sibling {
            window_changes.sibling = sibling;
            unlock |= xlib::CWSibling;
        }
        if let Some(stack_mode) = changes.stack_mode {
            window_changes.stack_mode = stack_mode;
            unlock |= xlib::CWStackMode;
        }
        unsafe {
            (self.xlib.XConfigureWindow)(
                self.display,
                window,
                u32::from(unlock),
                &mut window_changes,
            );
        }
    }
}
