//! Xlib calls related to a mouse.
use super::MOUSEMASK;
use crate::XWrap;
use x11_dl::xlib;

impl XWrap {
    /// Grabs the move and resize buttons on the root, together with the mouse key.
    pub fn grab_mouse_combos(&self) {
        self.ungrab_buttons(self.root);
        let modifiers = u32::from(self.mouse_key_mask.bits());
        self.grab_buttons(self.root, xlib::Button1, modifiers);
        self.grab_buttons(self.root, xlib::Button3, modifiers);
    }

    /// Grabs the button with the modifier for a window.
    // `XGrabButton`: https://tronche.com/gui/x/xlib/input/XGrabButton.html
    pub fn grab_buttons(&self, window: xlib::Window, button: u32, modifiers: u32) {
        // Grab the buttons with and without numlock (Mod2).
        let mods: Vec<u32> = vec![
            modifiers,
            modifiers | xlib::Mod2Mask,
            modifiers | xlib::LockMask,
            modifiers | xlib::Mod2Mask | xlib::LockMask,
        ];
        for m in mods {
            unsafe {
                (self.xlib.XGrabButton)(
                    self.display,
                    button,
                    m,
                    window,
                    1,
                    MOUSEMASK as u32,
                    xlib::GrabModeAsync,
                    xlib::GrabModeAsync,
                    0,
                    0,
                );
            }
        }
    }

    /// Cleans all currently grabbed buttons of a window.
    // `XUngrabButton`: https://tronche.com/gui/x/xlib/input/XUngrabButton.html
    pub fn ungrab_buttons(&self, handle: xlib::Window) {
        unsafe {
            (self.xlib.XUngrabButton)(
                self.display,
                xlib::AnyButton as u32,
                xlib::AnyModifier,
                handle,
            );
        }
    }
}
