use crate::models::{Handle, WindowHandle, Xyhw};
use crate::state::State;

impl<H: Handle> State<H> {
    pub fn window_resize_handler(
        &mut self,
        handle: WindowHandle<H>,
        anchor: Xyhw,
        offset_w: i32,
        offset_h: i32,
    ) -> bool {
        self.place_dragged(handle, anchor.grown(offset_w, offset_h));
        true
    }
}
