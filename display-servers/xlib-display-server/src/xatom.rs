use std::ffi::CString;
use x11_dl::xlib;

// ICCCM atoms used to ask clients to close politely.
// https://tronche.com/gui/x/icccm/sec-4.html#s-4.2.8

#[derive(Clone, Debug)]
#[allow(non_snake_case)]
pub struct XAtom {
    pub WMProtocols: xlib::Atom,
    pub WMDelete: xlib::Atom,
}

impl XAtom {
    pub fn new(xlib: &xlib::Xlib, dpy: *mut xlib::Display) -> Self {
        Self {
            WMProtocols: from(xlib, dpy, "WM_PROTOCOLS"),
            WMDelete: from(xlib, dpy, "WM_DELETE_WINDOW"),
        }
    }

    pub fn get_name(&self, atom: xlib::Atom) -> &str {
        match atom {
            a if a == self.WMProtocols => "WM_PROTOCOLS",
            a if a == self.WMDelete => "WM_DELETE_WINDOW",
            _ => "(UNKNOWN)",
        }
    }
}

// `XInternAtom`: https://tronche.com/gui/x/xlib/window-information/XInternAtom.html
fn from(xlib: &xlib::Xlib, dpy: *mut xlib::Display, s: &str) -> xlib::Atom {
    let name = CString::new(s).unwrap_or_default();
    unsafe { (xlib.XInternAtom)(dpy, name.as_ptr(), xlib::False) }
}
