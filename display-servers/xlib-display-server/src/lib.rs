//! The Xlib display server of ferrowm.
// allow casting types
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod event_translate;
mod xatom;
mod xwrap;

use serde::{Deserialize, Serialize};
pub use xwrap::XWrap;

use event_translate::XEvent;
use ferrowm_core::config::Config;
use ferrowm_core::models::{Handle, WindowHandle, Xyhw};
use ferrowm_core::{DisplayAction, DisplayEvent, DisplayServer, Result};
use std::collections::VecDeque;
use std::time::Duration;

use x11_dl::xlib;

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XlibWindowHandle(xlib::Window);
impl Handle for XlibWindowHandle {}

pub struct XlibDisplayServer {
    xw: XWrap,
    initial_events: VecDeque<DisplayEvent<XlibWindowHandle>>,
}

impl DisplayServer<XlibWindowHandle> for XlibDisplayServer {
    fn new(config: &impl Config) -> Result<Self> {
        let mut wrap = XWrap::new()?;

        wrap.init(config); // setup events masks and grabs

        let mut instance = Self {
            xw: wrap,
            initial_events: VecDeque::new(),
        };
        instance.initial_events = instance.initial_events();
        Ok(instance)
    }

    fn get_next_events(&mut self) -> Vec<DisplayEvent<XlibWindowHandle>> {
        let mut events: Vec<DisplayEvent<XlibWindowHandle>> = self.initial_events.drain(..).collect();

        // Translating can pull more events off the queue, so never wait on an empty one.
        let mut events_in_queue = self.xw.queue_len();
        while events_in_queue > 0 {
            let xlib_event = self.xw.get_next_event();
            let event = XEvent(&mut self.xw, xlib_event).into();
            if let Some(e) = event {
                tracing::trace!("DisplayEvent: {:?}", e);
                events.push(e);
            }
            events_in_queue = (events_in_queue - 1).min(self.xw.queue_len());
        }

        events
    }

    fn wait_readable(&mut self, timeout: Duration) -> Result<()> {
        if !self.initial_events.is_empty() {
            return Ok(());
        }
        self.xw.wait_readable(timeout)?;
        Ok(())
    }

    fn execute_action(&mut self, act: DisplayAction<XlibWindowHandle>) {
        tracing::trace!("DisplayAction: {:?}", act);
        match act {
            DisplayAction::AddedWindow(h) => from_added_window(&self.xw, h),
            DisplayAction::MapWindow(h) => self.xw.map_window(h.0 .0),
            DisplayAction::UnmapWindow(h) => self.xw.unmap_window(h.0 .0),
            DisplayAction::MoveResizeWindow(h, xyhw) => from_move_resize_window(&self.xw, h, xyhw),
            DisplayAction::MoveToTop(h) => self.xw.move_to_top(h.0 .0),
            DisplayAction::SetInputFocus(h) => self.xw.window_take_focus(h.0 .0),
            DisplayAction::SetBorderWidth(h, width) => {
                self.xw.set_window_border_width(h.0 .0, width);
            }
            DisplayAction::CloseWindow(h) => self.xw.request_close(h.0 .0),
            DisplayAction::ConfigureWindow(changes) => self.xw.set_window_config(&changes),
        }
    }

    fn query_geometry(&self, handle: WindowHandle<XlibWindowHandle>) -> Option<Xyhw> {
        self.xw.get_window_geometry(handle.0 .0).ok()
    }

    fn display_area(&self) -> Xyhw {
        self.xw.get_display_area()
    }

    fn flush(&self) {
        self.xw.flush();
    }
}

impl XlibDisplayServer {
    /// Windows that were already up before we started, reported as map requests.
    fn initial_events(&self) -> VecDeque<DisplayEvent<XlibWindowHandle>> {
        let windows = match self.xw.get_all_windows() {
            Ok(windows) => windows,
            Err(err) => {
                tracing::warn!("Unable to list the existing windows: {:?}", err);
                return VecDeque::new();
            }
        };
        windows
            .into_iter()
            .filter(|&window| {
                self.xw.get_window_attrs(window).is_ok_and(|attrs| {
                    attrs.override_redirect == 0 && attrs.map_state == xlib::IsViewable
                })
            })
            .map(|window| DisplayEvent::MapRequest(WindowHandle(XlibWindowHandle(window))))
            .collect()
    }
}

fn from_added_window(xw: &XWrap, handle: WindowHandle<XlibWindowHandle>) {
    let WindowHandle(XlibWindowHandle(window)) = handle;
    xw.setup_managed_window(window);
}

fn from_move_resize_window(xw: &XWrap, handle: WindowHandle<XlibWindowHandle>, xyhw: Xyhw) {
    let WindowHandle(XlibWindowHandle(window)) = handle;
    xw.move_resize_window(
        window,
        xyhw.x(),
        xyhw.y(),
        xyhw.w().max(1) as u32,
        xyhw.h().max(1) as u32,
    );
}
