use crate::display_action::DisplayAction;
use crate::models::{Handle, WindowHandle};
use crate::state::State;

impl<H: Handle> State<H> {
    /// Create the `DisplayAction`s giving the current client input focus, optionally raising it.
    pub fn focus_current(&mut self, raise: bool) {
        let Some(handle) = self.clients.current_client().map(|c| c.handle) else {
            return;
        };
        self.actions.push_back(DisplayAction::SetInputFocus(handle));
        if raise {
            self.actions.push_back(DisplayAction::MoveToTop(handle));
        }
    }

    /// Focus and raise the client after the current one, wrapping around.
    pub fn focus_next(&mut self) -> bool {
        if self.clients.current().is_none() {
            return false;
        }
        self.clients.advance_focus();
        self.save_active();
        self.focus_current(true);
        true
    }

    /// Focus a client of the active workspace without raising it. Used when the pointer
    /// enters a window.
    pub fn focus_window(&mut self, handle: &WindowHandle<H>) -> bool {
        let Some(id) = self.clients.find(handle) else {
            return false;
        };
        if self.clients.current() == Some(id) {
            return false;
        }
        self.clients.set_current(id);
        self.save_active();
        self.focus_current(false);
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::config::tests::TestConfig;
    use crate::models::WindowHandle;
    use crate::{DisplayAction, Manager};

    #[test]
    fn focusing_next_cycles_and_wraps_around() {
        let mut manager = Manager::new_test(TestConfig::default());
        for h in 1..=3 {
            manager.window_created_handler(WindowHandle(h));
        }
        manager.state.focus_window(&WindowHandle(2));
        manager.state.actions.clear();

        assert!(manager.state.focus_next());
        assert_eq!(
            manager.state.actions.drain(..).collect::<Vec<_>>(),
            vec![
                DisplayAction::SetInputFocus(WindowHandle(3)),
                DisplayAction::MoveToTop(WindowHandle(3)),
            ]
        );
        assert!(manager.state.focus_next());
        let current = manager.state.clients.current_client().map(|c| c.handle);
        assert_eq!(current, Some(WindowHandle(1)));
    }

    #[test]
    fn focusing_next_without_clients_does_nothing() {
        let mut manager = Manager::new_test(TestConfig::default());
        assert!(!manager.state.focus_next());
        assert!(manager.state.actions.is_empty());
    }

    #[test]
    fn focusing_a_window_does_not_raise_it() {
        let mut manager = Manager::new_test(TestConfig::default());
        manager.window_created_handler(WindowHandle(1));
        manager.window_created_handler(WindowHandle(2));
        manager.state.actions.clear();

        assert!(manager.state.focus_window(&WindowHandle(1)));
        assert_eq!(
            manager.state.actions.drain(..).collect::<Vec<_>>(),
            vec![DisplayAction::SetInputFocus(WindowHandle(1))]
        );
        assert!(!manager.state.focus_window(&WindowHandle(1)));
        assert!(!manager.state.focus_window(&WindowHandle(9)));
    }
}
