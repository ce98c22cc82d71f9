use crate::config::Config;
use crate::display_action::DisplayAction;
use crate::display_servers::DisplayServer;
use crate::models::{Gesture, Handle, InteractionState, Manager, WindowHandle};
use crate::utils::modmask_lookup::{Button, ModMask};

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Start moving (left button) or resizing (right button) the window under the pointer.
    pub fn mouse_combo_handler(
        &mut self,
        subwindow: Option<WindowHandle<H>>,
        button: Button,
        modmask: ModMask,
        pointer: (i32, i32),
    ) -> bool {
        if modmask.clean() != self.state.mousekey || !matches!(button, Button::Left | Button::Right)
        {
            return false;
        }
        let Some(target) = subwindow else {
            return false;
        };
        let Some(anchor_geometry) = self.display_server.query_geometry(target) else {
            return false;
        };

        self.state.actions.push_back(DisplayAction::MoveToTop(target));
        self.state.interaction = InteractionState::Dragging(Gesture {
            target,
            anchor_geometry,
            anchor_pointer: pointer,
            button,
        });
        true
    }

    /// End the gesture in progress. A release without a gesture does nothing.
    pub fn mouse_release_handler(&mut self) -> bool {
        let was_dragging = !self.state.interaction.is_idle();
        self.state.interaction = InteractionState::Idle;
        was_dragging
    }
}

#[cfg(test)]
mod tests {
    use crate::config::tests::TestConfig;
    use crate::display_servers::MOCK_WINDOW_GEOMETRY;
    use crate::models::{Gesture, InteractionState, WindowHandle};
    use crate::utils::modmask_lookup::{Button, ModMask};
    use crate::{DisplayAction, Manager};

    #[test]
    fn pressing_with_the_mousekey_starts_a_gesture() {
        let mut manager = Manager::new_test(TestConfig::default());
        let target = WindowHandle(7);
        assert!(manager.mouse_combo_handler(
            Some(target),
            Button::Left,
            ModMask::Super | ModMask::NumLock,
            (100, 200),
        ));
        assert_eq!(
            manager.state.interaction,
            InteractionState::Dragging(Gesture {
                target,
                anchor_geometry: MOCK_WINDOW_GEOMETRY,
                anchor_pointer: (100, 200),
                button: Button::Left,
            })
        );
        assert_eq!(
            manager.state.actions.pop_front(),
            Some(DisplayAction::MoveToTop(target))
        );
    }

    #[test]
    fn presses_without_mousekey_window_or_on_other_buttons_are_ignored() {
        let mut manager = Manager::new_test(TestConfig::default());
        let target = Some(WindowHandle(7));
        assert!(!manager.mouse_combo_handler(target, Button::Left, ModMask::Alt, (0, 0)));
        assert!(!manager.mouse_combo_handler(None, Button::Left, ModMask::Super, (0, 0)));
        assert!(!manager.mouse_combo_handler(target, Button::Middle, ModMask::Super, (0, 0)));
        assert!(manager.state.interaction.is_idle());
        assert!(manager.state.actions.is_empty());
    }

    #[test]
    fn a_stale_release_is_a_noop() {
        let mut manager = Manager::new_test(TestConfig::default());
        assert!(!manager.mouse_release_handler());
        assert!(manager.state.interaction.is_idle());
        assert!(manager.state.actions.is_empty());
    }

    #[test]
    fn releasing_ends_the_gesture() {
        let mut manager = Manager::new_test(TestConfig::default());
        manager.mouse_combo_handler(Some(WindowHandle(1)), Button::Right, ModMask::Super, (0, 0));
        assert!(manager.mouse_release_handler());
        assert!(manager.state.interaction.is_idle());
    }
}
