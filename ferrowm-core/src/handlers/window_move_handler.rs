use crate::display_action::DisplayAction;
use crate::models::{Handle, WindowHandle, Xyhw};
use crate::state::State;
use crate::utils::modmask_lookup::Button;

impl<H: Handle> State<H> {
    /// Follow the pointer with the gesture in progress, if any.
    pub fn motion_handler(&mut self, x_root: i32, y_root: i32) -> bool {
        let Some(gesture) = self.interaction.gesture().copied() else {
            return false;
        };
        let (dx, dy) = gesture.delta(x_root, y_root);
        match gesture.button {
            Button::Left => {
                self.window_move_handler(gesture.target, gesture.anchor_geometry, dx, dy)
            }
            Button::Right => {
                self.window_resize_handler(gesture.target, gesture.anchor_geometry, dx, dy)
            }
            _ => false,
        }
    }

    pub fn window_move_handler(
        &mut self,
        handle: WindowHandle<H>,
        anchor: Xyhw,
        offset_x: i32,
        offset_y: i32,
    ) -> bool {
        self.place_dragged(handle, anchor.translated(offset_x, offset_y));
        true
    }

    /// The user took over the geometry, so a fullscreen client stops being fullscreen.
    pub(crate) fn place_dragged(&mut self, handle: WindowHandle<H>, xyhw: Xyhw) {
        if let Some(client) = self
            .clients
            .find(&handle)
            .and_then(|id| self.clients.get_mut(id))
        {
            client.clear_fullscreen();
        }
        self.actions
            .push_back(DisplayAction::MoveResizeWindow(handle, xyhw));
    }
}

#[cfg(test)]
mod tests {
    use crate::config::tests::TestConfig;
    use crate::models::{WindowHandle, Xyhw};
    use crate::utils::modmask_lookup::{Button, ModMask};
    use crate::{DisplayAction, Manager};

    #[test]
    fn dragging_moves_the_window_by_the_pointer_delta() {
        let mut manager = Manager::new_test(TestConfig::default());
        let handle = WindowHandle(1);
        manager
            .display_server
            .set_geometry(handle, Xyhw::new(100, 100, 300, 200));
        manager.mouse_combo_handler(Some(handle), Button::Left, ModMask::Super, (500, 500));
        manager.state.actions.clear();

        assert!(manager.state.motion_handler(520, 490));
        assert_eq!(
            manager.state.actions.pop_front(),
            Some(DisplayAction::MoveResizeWindow(
                handle,
                Xyhw::new(120, 90, 300, 200)
            ))
        );
    }

    #[test]
    fn motion_without_a_gesture_does_nothing() {
        let mut manager = Manager::new_test(TestConfig::default());
        assert!(!manager.state.motion_handler(10, 10));
        assert!(manager.state.actions.is_empty());
    }

    #[test]
    fn dragging_a_fullscreen_client_leaves_fullscreen() {
        let mut manager = Manager::new_test(TestConfig::default());
        let handle = WindowHandle(1);
        manager.window_created_handler(handle);
        manager.toggle_fullscreen();
        manager.mouse_combo_handler(Some(handle), Button::Left, ModMask::Super, (0, 0));
        manager.state.motion_handler(5, 5);

        let client = manager.state.clients.current_client().unwrap();
        assert!(!client.is_fullscreen);
        assert_eq!(client.saved_geometry, None);
    }
}
