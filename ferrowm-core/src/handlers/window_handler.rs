use crate::config::Config;
use crate::display_action::DisplayAction;
use crate::display_servers::DisplayServer;
use crate::models::{Handle, InteractionState, Manager, WindowChanges, WindowHandle};

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Process a map request: start managing the window, show it and focus it.
    /// Returns true if a new client was added.
    pub fn window_created_handler(&mut self, handle: WindowHandle<H>) -> bool {
        let state = &mut self.state;
        // Clients such as video players unmap and re-map themselves.
        if state.clients.find(&handle).is_some() {
            state.actions.push_back(DisplayAction::MapWindow(handle));
            return false;
        }
        if state.clients.is_managed(&handle) {
            tracing::trace!("Ignoring map request of a window on a hidden workspace");
            return false;
        }

        state.actions.push_back(DisplayAction::AddedWindow(handle));
        state
            .actions
            .push_back(DisplayAction::SetBorderWidth(handle, state.border_width));
        if state.center_new_windows {
            if let Some(xyhw) = self.display_server.query_geometry(handle) {
                let centered = xyhw.centered_in(&self.display_server.display_area());
                state
                    .actions
                    .push_back(DisplayAction::MoveResizeWindow(handle, centered));
            }
        }
        state.actions.push_back(DisplayAction::MapWindow(handle));

        state.clients.add(handle);
        state.save_active();
        state.focus_current(true);
        true
    }

    /// Process a destroy notification. Returns true if a client was dropped.
    pub fn window_destroyed_handler(&mut self, handle: &WindowHandle<H>) -> bool {
        let state = &mut self.state;
        if state
            .interaction
            .gesture()
            .is_some_and(|gesture| &gesture.target == handle)
        {
            state.interaction = InteractionState::Idle;
        }

        if state.clients.remove(handle).is_some() {
            state.save_active();
            state.focus_current(true);
            return true;
        }

        // The window may live on a workspace that is not shown right now.
        let Some(owner) = state.workspaces.hidden_owner(&state.clients, handle) else {
            return false;
        };
        let active = state.workspaces.active();
        state.save_active();
        state.workspaces.select(owner, &mut state.clients);
        state.clients.remove(handle);
        state.workspaces.save(owner, &state.clients);
        state.workspaces.select(active, &mut state.clients);
        true
    }

    /// Honour a configure request exactly as asked.
    pub fn window_configure_handler(&mut self, changes: WindowChanges<H>) -> bool {
        self.state
            .actions
            .push_back(DisplayAction::ConfigureWindow(changes));
        false
    }
}

#[cfg(test)]
mod tests {
    use crate::config::tests::TestConfig;
    use crate::models::{WindowChanges, WindowHandle, Xyhw};
    use crate::{DisplayAction, Manager};

    #[test]
    fn mapped_windows_are_added_focused_and_raised() {
        let mut manager = Manager::new_test(TestConfig::default());
        assert!(manager.window_created_handler(WindowHandle(1)));
        assert_eq!(
            manager.state.actions.drain(..).collect::<Vec<_>>(),
            vec![
                DisplayAction::AddedWindow(WindowHandle(1)),
                DisplayAction::SetBorderWidth(WindowHandle(1), 1),
                DisplayAction::MapWindow(WindowHandle(1)),
                DisplayAction::SetInputFocus(WindowHandle(1)),
                DisplayAction::MoveToTop(WindowHandle(1)),
            ]
        );
        assert_eq!(manager.state.clients.handles(), vec![WindowHandle(1)]);
    }

    #[test]
    fn new_windows_can_be_centered_before_mapping() {
        let mut manager = Manager::new_test(TestConfig {
            center_new_windows: true,
            ..TestConfig::default()
        });
        let handle = WindowHandle(1);
        manager
            .display_server
            .set_geometry(handle, Xyhw::new(0, 0, 200, 100));
        manager.window_created_handler(handle);
        assert!(manager
            .state
            .actions
            .contains(&DisplayAction::MoveResizeWindow(
                handle,
                Xyhw::new(860, 490, 200, 100)
            )));
    }

    #[test]
    fn remapping_a_managed_window_only_maps_it() {
        let mut manager = Manager::new_test(TestConfig::default());
        manager.window_created_handler(WindowHandle(1));
        manager.state.actions.clear();
        assert!(!manager.window_created_handler(WindowHandle(1)));
        assert_eq!(
            manager.state.actions.drain(..).collect::<Vec<_>>(),
            vec![DisplayAction::MapWindow(WindowHandle(1))]
        );
        assert_eq!(manager.state.clients.handles(), vec![WindowHandle(1)]);
    }

    #[test]
    fn map_requests_for_hidden_windows_are_ignored() {
        let mut manager = Manager::new_test(TestConfig::default());
        manager.window_created_handler(WindowHandle(1));
        manager.state.goto_workspace_handler(2);
        manager.state.actions.clear();
        assert!(!manager.window_created_handler(WindowHandle(1)));
        assert!(manager.state.actions.is_empty());
        assert!(manager.state.clients.is_empty());
    }

    #[test]
    fn destroying_a_window_refocuses_its_predecessor() {
        let mut manager = Manager::new_test(TestConfig::default());
        for h in 1..=3 {
            manager.window_created_handler(WindowHandle(h));
        }
        manager.state.actions.clear();
        assert!(manager.window_destroyed_handler(&WindowHandle(2)));
        assert_eq!(
            manager.state.clients.handles(),
            vec![WindowHandle(1), WindowHandle(3)]
        );
        assert_eq!(
            manager.state.actions.drain(..).collect::<Vec<_>>(),
            vec![
                DisplayAction::SetInputFocus(WindowHandle(1)),
                DisplayAction::MoveToTop(WindowHandle(1)),
            ]
        );
    }

    #[test]
    fn destroying_the_last_window_leaves_nothing_focused() {
        let mut manager = Manager::new_test(TestConfig::default());
        manager.window_created_handler(WindowHandle(1));
        manager.state.actions.clear();
        assert!(manager.window_destroyed_handler(&WindowHandle(1)));
        assert!(manager.state.clients.is_empty());
        assert_eq!(manager.state.clients.current(), None);
        assert!(manager.state.actions.is_empty());
    }

    #[test]
    fn destroying_an_unknown_window_is_ignored() {
        let mut manager = Manager::new_test(TestConfig::default());
        manager.window_created_handler(WindowHandle(1));
        manager.state.actions.clear();
        assert!(!manager.window_destroyed_handler(&WindowHandle(2)));
        assert_eq!(manager.state.clients.handles(), vec![WindowHandle(1)]);
        assert!(manager.state.actions.is_empty());
    }

    #[test]
    fn destroying_a_window_on_a_hidden_workspace_forgets_it() {
        let mut manager = Manager::new_test(TestConfig::default());
        manager.window_created_handler(WindowHandle(1));
        manager.window_created_handler(WindowHandle(2));
        manager.state.goto_workspace_handler(2);
        manager.window_created_handler(WindowHandle(3));

        assert!(manager.window_destroyed_handler(&WindowHandle(1)));
        assert_eq!(manager.state.workspaces.active(), 2);
        assert_eq!(manager.state.clients.handles(), vec![WindowHandle(3)]);
        assert!(!manager.state.clients.is_managed(&WindowHandle(1)));

        manager.state.goto_workspace_handler(1);
        assert_eq!(manager.state.clients.handles(), vec![WindowHandle(2)]);
    }

    #[test]
    fn configure_requests_are_passed_through() {
        let mut manager = Manager::new_test(TestConfig::default());
        let changes = WindowChanges {
            width: Some(300),
            height: Some(200),
            ..WindowChanges::new(WindowHandle(5))
        };
        manager.window_configure_handler(changes);
        assert_eq!(
            manager.state.actions.pop_front(),
            Some(DisplayAction::ConfigureWindow(changes))
        );
    }
}
