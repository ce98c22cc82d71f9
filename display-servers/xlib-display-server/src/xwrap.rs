//! A wrapper around calls to xlib and X related functions.
// We allow this so that extern "C" functions are not flagged as confusing. The current placement
// allows for easy reading.
#![allow(clippy::items_after_statements)]
use super::xatom::XAtom;
use ferrowm_core::config::{Config, Keybind, ResolvedKeybind};
use ferrowm_core::utils::modmask_lookup::{into_modmask, ModMask};
use ferrowm_core::WmError;
use std::io;
use std::os::raw::{c_int, c_long, c_ulong};
use std::ptr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use x11_dl::xlib;

mod getters;
mod keyboard;
mod mouse;
mod setters;
mod window;

pub const ROOT_EVENT_MASK: c_long = xlib::SubstructureRedirectMask
    | xlib::SubstructureNotifyMask
    | xlib::StructureNotifyMask;

// Destroy notifications already arrive through the root's substructure mask.
pub const CLIENT_EVENT_MASK: c_long =
    xlib::EnterWindowMask | xlib::FocusChangeMask | xlib::PropertyChangeMask;

const BUTTONMASK: c_long = xlib::ButtonPressMask | xlib::ButtonReleaseMask | xlib::ButtonMotionMask;
const MOUSEMASK: c_long = BUTTONMASK | xlib::PointerMotionMask;

const X_CONFIGUREWINDOW: u8 = 12;
const X_GRABBUTTON: u8 = 28;
const X_GRABKEY: u8 = 33;
const X_SETINPUTFOCUS: u8 = 42;

const SERVER: mio::Token = mio::Token(0);

/// Set by the startup error handler when selecting substructure redirect on the root failed.
static OTHER_WM_DETECTED: AtomicBool = AtomicBool::new(false);

// This is allowed for now as const extern fns
// are not yet stable (1.56.0, 16 Sept 2021)
// see issue #64926 <https://github.com/rust-lang/rust/issues/64926> for more information.
#[allow(clippy::missing_const_for_fn)]
pub extern "C" fn on_error_from_xlib(_: *mut xlib::Display, er: *mut xlib::XErrorEvent) -> c_int {
    let err = unsafe { *er };
    let ec = err.error_code;
    let rc = err.request_code;
    let ba = ec == xlib::BadAccess;
    let bm = ec == xlib::BadMatch;

    if ec == xlib::BadWindow
        || (rc == X_CONFIGUREWINDOW && bm)
        || (rc == X_GRABBUTTON && ba)
        || (rc == X_GRABKEY && ba)
        || (rc == X_SETINPUTFOCUS && bm)
    {
        return 0;
    }
    tracing::debug!(
        "Ignoring X error {} from request {}",
        err.error_code,
        err.request_code
    );
    0
}

extern "C" fn startup_check_for_other_wm(
    _: *mut xlib::Display,
    _: *mut xlib::XErrorEvent,
) -> c_int {
    OTHER_WM_DETECTED.store(true, Ordering::SeqCst);
    0
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Colors {
    normal: c_ulong,
    active: c_ulong,
}

#[derive(Debug, Clone)]
pub enum XlibError {
    FailedStatus,
}

/// Contains Xserver information and origins.
pub struct XWrap {
    xlib: xlib::Xlib,
    display: *mut xlib::Display,
    root: xlib::Window,
    pub atoms: XAtom,
    colors: Colors,
    pub focused_window: xlib::Window,
    pub mouse_key_mask: ModMask,
    keybinds: Vec<ResolvedKeybind>,
    poll: mio::Poll,
    poll_events: mio::Events,
}

impl XWrap {
    /// Opens the display and claims the root window.
    ///
    /// # Errors
    ///
    /// Errors if Xlib cannot be loaded, the display cannot be opened, or another window manager
    /// already selected substructure redirection on the root window.
    // `XOpenDisplay`: https://tronche.com/gui/x/xlib/display/opening.html
    // `XConnectionNumber`: https://tronche.com/gui/x/xlib/display/display-macros.html#ConnectionNumber
    // `XDefaultRootWindow`: https://tronche.com/gui/x/xlib/display/display-macros.html#DefaultRootWindow
    // `XSetErrorHandler`: https://tronche.com/gui/x/xlib/event-handling/protocol-errors/XSetErrorHandler.html
    // `XSelectInput`: https://tronche.com/gui/x/xlib/event-handling/XSelectInput.html
    pub fn new() -> Result<Self, WmError> {
        let xlib = xlib::Xlib::open().map_err(|err| WmError::DisplayConnection(err.to_string()))?;
        let display = unsafe { (xlib.XOpenDisplay)(ptr::null()) };
        if display.is_null() {
            return Err(WmError::DisplayConnection(
                "XOpenDisplay returned no display, is DISPLAY set?".to_owned(),
            ));
        }

        let fd = unsafe { (xlib.XConnectionNumber)(display) };
        let poll = match mio::Poll::new() {
            Ok(poll) => poll,
            Err(err) => {
                unsafe { (xlib.XCloseDisplay)(display) };
                return Err(err.into());
            }
        };

        let atoms = XAtom::new(&xlib, display);
        let root = unsafe { (xlib.XDefaultRootWindow)(display) };

        let xw = Self {
            xlib,
            display,
            root,
            atoms,
            colors: Colors::default(),
            focused_window: root,
            mouse_key_mask: ModMask::Zero,
            keybinds: vec![],
            poll,
            poll_events: mio::Events::with_capacity(1),
        };

        xw.poll.registry().register(
            &mut mio::unix::SourceFd(&fd),
            SERVER,
            mio::Interest::READABLE,
        )?;

        // Check that another WM is not running.
        OTHER_WM_DETECTED.store(false, Ordering::SeqCst);
        unsafe {
            (xw.xlib.XSetErrorHandler)(Some(startup_check_for_other_wm));
            (xw.xlib.XSelectInput)(xw.display, root, xlib::SubstructureRedirectMask);
        };
        xw.sync();
        if OTHER_WM_DETECTED.load(Ordering::SeqCst) {
            return Err(WmError::AnotherWindowManager);
        }

        unsafe { (xw.xlib.XSetErrorHandler)(Some(on_error_from_xlib)) };
        xw.sync();
        Ok(xw)
    }

    /// Initialize the xwrapper.
    // `XChangeWindowAttributes`: https://tronche.com/gui/x/xlib/window/XChangeWindowAttributes.html
    pub fn init(&mut self, config: &impl Config) {
        self.mouse_key_mask = into_modmask(&config.mousekey());
        self.colors = Colors {
            normal: self.get_color(config.default_border_color()),
            active: self.get_color(config.focused_border_color()),
        };

        let mut attrs: xlib::XSetWindowAttributes = unsafe { std::mem::zeroed() };
        attrs.event_mask = ROOT_EVENT_MASK;
        unsafe {
            (self.xlib.XChangeWindowAttributes)(
                self.display,
                self.root,
                xlib::CWEventMask,
                &mut attrs,
            );
        }
        self.subscribe_to_event(self.root, ROOT_EVENT_MASK);

        // Unknown keys are reported by the manager when it resolves the same table.
        self.keybinds = config
            .mapped_bindings()
            .iter()
            .filter_map(Keybind::resolve)
            .collect();
        self.reset_grabs();
        self.grab_mouse_combos();

        self.sync();
    }

    /// Send a xevent atom for a window to X.
    // `XSendEvent`: https://tronche.com/gui/x/xlib/event-handling/XSendEvent.html
    fn send_xevent_atom(&self, window: xlib::Window, atom: xlib::Atom) -> bool {
        if self.can_send_xevent_atom(window, atom) {
            let mut msg: xlib::XClientMessageEvent = unsafe { std::mem::zeroed() };
            msg.type_ = xlib::ClientMessage;
            msg.window = window;
            msg.message_type = self.atoms.WMProtocols;
            msg.format = 32;
            msg.data.set_long(0, atom as c_long);
            msg.data.set_long(1, xlib::CurrentTime as c_long);
            let mut ev: xlib::XEvent = msg.into();
            unsafe { (self.xlib.XSendEvent)(self.display, window, 0, xlib::NoEventMask, &mut ev) };
            tracing::trace!("Sent {} to {}", self.atoms.get_name(atom), window);
            return true;
        }
        false
    }

    /// Returns whether a window can recieve a xevent atom.
    // `XGetWMProtocols`: https://tronche.com/gui/x/xlib/ICC/client-to-window-manager/XGetWMProtocols.html
    fn can_send_xevent_atom(&self, window: xlib::Window, atom: xlib::Atom) -> bool {
        unsafe {
            let mut array: *mut xlib::Atom = std::mem::zeroed();
            let mut length: c_int = std::mem::zeroed();
            let status: xlib::Status =
                (self.xlib.XGetWMProtocols)(self.display, window, &mut array, &mut length);
            if status == 0 || array.is_null() {
                return false;
            }
            let found = std::slice::from_raw_parts(array, length as usize).contains(&atom);
            (self.xlib.XFree)(array.cast());
            found
        }
    }

    /// Block on the connection until it is readable or `timeout` elapsed.
    ///
    /// Returns straight away when Xlib already queued events. A signal arriving while blocked
    /// counts as a wakeup.
    ///
    /// # Errors
    ///
    /// Errors if polling the connection fails for another reason.
    pub fn wait_readable(&mut self, timeout: Duration) -> io::Result<()> {
        if self.queue_len() > 0 {
            return Ok(());
        }
        match self.poll.poll(&mut self.poll_events, Some(timeout)) {
            Err(err) if err.kind() == io::ErrorKind::Interrupted => Ok(()),
            Err(err) => {
                tracing::warn!("Xlib socket poll failed with {:?}", err);
                Err(err)
            }
            Ok(()) => Ok(()),
        }
    }

    /// Flush and sync the xserver.
    // `XSync`: https://tronche.com/gui/x/xlib/event-handling/XSync.html
    pub fn sync(&self) {
        unsafe { (self.xlib.XSync)(self.display, xlib::False) };
    }

    /// Flush the xserver.
    // `XFlush`: https://tronche.com/gui/x/xlib/event-handling/XFlush.html
    pub fn flush(&self) {
        unsafe { (self.xlib.XFlush)(self.display) };
    }

    /// Returns how many events are waiting.
    // `XPending`: https://tronche.com/gui/x/xlib/event-handling/XPending.html
    #[must_use]
    pub fn queue_len(&self) -> i32 {
        unsafe { (self.xlib.XPending)(self.display) }
    }
}

impl Drop for XWrap {
    // `XCloseDisplay`: https://tronche.com/gui/x/xlib/display/XCloseDisplay.html
    fn drop(&mut self) {
        unsafe { (self.xlib.XCloseDisplay)(self.display) };
    }
}
