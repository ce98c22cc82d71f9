use crate::XlibWindowHandle;

use super::{DisplayEvent, XWrap};
use ferrowm_core::{
    models::{WindowChanges, WindowHandle},
    utils::modmask_lookup::{Button, ModMask},
};
use x11_dl::xlib;

pub struct XEvent<'a>(pub &'a mut XWrap, pub xlib::XEvent);

impl<'a> From<XEvent<'a>> for Option<DisplayEvent<XlibWindowHandle>> {
    fn from(x_event: XEvent) -> Self {
        let raw_event = x_event.1;

        match raw_event.get_type() {
            // New window wants to be mapped.
            xlib::MapRequest => from_map_request(&x_event),
            // Window is destroyed.
            xlib::DestroyNotify => from_destroy_notify(x_event),
            // Window configure request.
            xlib::ConfigureRequest => Some(from_configure_request(raw_event)),
            // Mouse entered notify.
            xlib::EnterNotify => from_enter_notify(&x_event),
            // Mouse motion notify.
            xlib::MotionNotify => Some(from_motion_notify(&x_event)),
            // Mouse button pressed.
            xlib::ButtonPress => Some(from_button_press(raw_event)),
            // Mouse button released.
            xlib::ButtonRelease => Some(DisplayEvent::ButtonRelease),
            // Key combo pressed.
            xlib::KeyPress => Some(from_key_press(&x_event)),
            // Keyboard layout changed.
            xlib::MappingNotify => from_mapping_notify(x_event),
            _other => None,
        }
    }
}

fn from_map_request(x_event: &XEvent) -> Option<DisplayEvent<XlibWindowHandle>> {
    let event = xlib::XMapRequestEvent::from(x_event.1);
    let attrs = x_event.0.get_window_attrs(event.window).ok()?;
    if attrs.override_redirect != 0 {
        return None;
    }
    Some(DisplayEvent::MapRequest(WindowHandle(XlibWindowHandle(
        event.window,
    ))))
}

fn from_destroy_notify(x_event: XEvent) -> Option<DisplayEvent<XlibWindowHandle>> {
    let xw = x_event.0;
    let event = xlib::XDestroyWindowEvent::from(x_event.1);
    xw.forget_window(event.window);
    Some(DisplayEvent::WindowDestroy(WindowHandle(XlibWindowHandle(
        event.window,
    ))))
}

fn from_configure_request(raw_event: xlib::XEvent) -> DisplayEvent<XlibWindowHandle> {
    let event = xlib::XConfigureRequestEvent::from(raw_event);
    let mask = event.value_mask;
    let asked = |bit: u16| mask & u64::from(bit) != 0;

    let mut changes = WindowChanges::new(WindowHandle(XlibWindowHandle(event.window)));
    changes.x = asked(xlib::CWX).then_some(event.x);
    changes.y = asked(xlib::CWY).then_some(event.y);
    changes.width = asked(xlib::CWWidth).then_some(event.width);
    changes.height = asked(xlib::CWHeight).then_some(event.height);
    changes.border_width = asked(xlib::CWBorderWidth).then_some(event.border_width);
    changes.sibling = asked(xlib::CWSibling).then_some(WindowHandle(XlibWindowHandle(event.above)));
    changes.stack_mode = asked(xlib::CWStackMode).then_some(event.detail);
    DisplayEvent::ConfigureRequest(changes)
}

fn from_enter_notify(x_event: &XEvent) -> Option<DisplayEvent<XlibWindowHandle>> {
    let event = xlib::XCrossingEvent::from(x_event.1);
    if event.mode != xlib::NotifyNormal
        || event.detail == xlib::NotifyInferior
        || event.window == x_event.0.get_default_root()
    {
        return None;
    }

    let h = WindowHandle(XlibWindowHandle(event.window));
    Some(DisplayEvent::EnterWindow(h))
}

fn from_motion_notify(x_event: &XEvent) -> DisplayEvent<XlibWindowHandle> {
    // Only the newest position of a burst matters.
    let raw_event = x_event
        .0
        .drain_typed_events(xlib::MotionNotify)
        .unwrap_or(x_event.1);
    let event = xlib::XMotionEvent::from(raw_event);
    DisplayEvent::Motion(event.x_root, event.y_root)
}

fn from_button_press(raw_event: xlib::XEvent) -> DisplayEvent<XlibWindowHandle> {
    let event = xlib::XButtonPressedEvent::from(raw_event);
    let subwindow = (event.subwindow != 0).then_some(WindowHandle(XlibWindowHandle(event.subwindow)));
    DisplayEvent::ButtonPress {
        subwindow,
        button: Button::from(event.button),
        modmask: ModMask::from_bits_retain(event.state as u16),
        x_root: event.x_root,
        y_root: event.y_root,
    }
}

fn from_key_press(x_event: &XEvent) -> DisplayEvent<XlibWindowHandle> {
    let event = xlib::XKeyEvent::from(x_event.1);
    let keysym = x_event.0.keycode_to_keysym(event.keycode);
    DisplayEvent::KeyCombo(ModMask::from_bits_retain(event.state as u16), keysym)
}

fn from_mapping_notify(x_event: XEvent) -> Option<DisplayEvent<XlibWindowHandle>> {
    let xw = x_event.0;
    let mut event = xlib::XMappingEvent::from(x_event.1);
    if xw.refresh_keyboard(&mut event).is_err() {
        tracing::warn!("Failed to refresh the keyboard mapping");
    }
    if event.request == xlib::MappingKeyboard || event.request == xlib::MappingModifier {
        tracing::debug!("Keyboard mapping changed, grabbing keys again");
        xw.reset_grabs();
    }
    None
}
