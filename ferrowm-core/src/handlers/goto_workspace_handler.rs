use crate::display_action::DisplayAction;
use crate::models::{Handle, WorkspaceId};
use crate::state::State;

impl<H: Handle> State<H> {
    /// Hide the active workspace and show workspace `index` instead.
    ///
    /// Unmaps are queued while the old list is live and maps once the new one is, so the
    /// display server always hides and shows the right set of windows.
    pub fn goto_workspace_handler(&mut self, index: WorkspaceId) -> bool {
        let active = self.workspaces.active();
        if index == active || !self.workspaces.contains(index) {
            return false;
        }

        for handle in self.clients.handles() {
            self.actions.push_back(DisplayAction::UnmapWindow(handle));
        }
        self.workspaces.save(active, &self.clients);
        self.workspaces.select(index, &mut self.clients);
        for handle in self.clients.handles() {
            self.actions.push_back(DisplayAction::MapWindow(handle));
        }
        self.focus_current(true);
        true
    }

    /// Send the current client to workspace `index` and hide it.
    pub fn move_client_to_workspace(&mut self, index: WorkspaceId) -> bool {
        let original = self.workspaces.active();
        if index == original || !self.workspaces.contains(index) {
            return false;
        }
        let Some(handle) = self.clients.current_client().map(|c| c.handle) else {
            return false;
        };

        self.workspaces.select(index, &mut self.clients);
        let moved = self.clients.add(handle);
        self.workspaces.save(index, &self.clients);

        self.workspaces.select(original, &mut self.clients);
        if let Some(old) = self.clients.remove(&handle) {
            // Keep the fullscreen bookkeeping with the window.
            if let Some(client) = self.clients.get_mut(moved) {
                client.saved_geometry = old.saved_geometry;
                client.is_fullscreen = old.is_fullscreen;
            }
        }
        self.actions.push_back(DisplayAction::UnmapWindow(handle));
        self.workspaces.save(original, &self.clients);

        self.focus_current(true);
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::config::tests::TestConfig;
    use crate::models::{LayoutMode, WindowHandle, WORKSPACE_COUNT};
    use crate::{DisplayAction, Manager};

    #[test]
    fn switching_to_the_active_workspace_is_a_noop() {
        let mut manager = Manager::new_test(TestConfig::default());
        manager.window_created_handler(WindowHandle(1));
        manager.state.actions.clear();
        assert!(!manager.state.goto_workspace_handler(1));
        assert!(manager.state.actions.is_empty());
    }

    #[test]
    fn switching_to_an_unknown_workspace_is_ignored() {
        let mut manager = Manager::new_test(TestConfig::default());
        assert!(!manager.state.goto_workspace_handler(WORKSPACE_COUNT));
        assert_eq!(manager.state.workspaces.active(), 1);
    }

    #[test]
    fn windows_are_unmapped_before_the_new_list_is_mapped() {
        let mut manager = Manager::new_test(TestConfig::default());
        manager.window_created_handler(WindowHandle(1));
        manager.state.goto_workspace_handler(2);
        manager.window_created_handler(WindowHandle(2));
        manager.state.actions.clear();

        assert!(manager.state.goto_workspace_handler(1));
        assert_eq!(
            manager.state.actions.drain(..).collect::<Vec<_>>(),
            vec![
                DisplayAction::UnmapWindow(WindowHandle(2)),
                DisplayAction::MapWindow(WindowHandle(1)),
                DisplayAction::SetInputFocus(WindowHandle(1)),
                DisplayAction::MoveToTop(WindowHandle(1)),
            ]
        );
    }

    #[test]
    fn workspaces_keep_their_clients_apart() {
        let mut manager = Manager::new_test(TestConfig::default());
        manager.window_created_handler(WindowHandle(1));
        manager.window_created_handler(WindowHandle(2));
        manager.state.clients.set_mode(LayoutMode(7));
        manager.state.save_active();

        manager.state.goto_workspace_handler(3);
        assert!(manager.state.clients.is_empty());
        manager.window_created_handler(WindowHandle(3));
        assert_eq!(manager.state.clients.handles(), vec![WindowHandle(3)]);

        manager.state.goto_workspace_handler(1);
        assert_eq!(
            manager.state.clients.handles(),
            vec![WindowHandle(1), WindowHandle(2)]
        );
        assert_eq!(manager.state.clients.mode(), LayoutMode(7));
        let current = manager.state.clients.current_client().map(|c| c.handle);
        assert_eq!(current, Some(WindowHandle(2)));
    }

    #[test]
    fn moving_a_client_relocates_it_and_hides_it() {
        let mut manager = Manager::new_test(TestConfig::default());
        manager.window_created_handler(WindowHandle(1));
        manager.window_created_handler(WindowHandle(2));
        manager.state.actions.clear();

        assert!(manager.state.move_client_to_workspace(4));
        assert_eq!(manager.state.workspaces.active(), 1);
        assert_eq!(manager.state.clients.handles(), vec![WindowHandle(1)]);
        assert_eq!(
            manager.state.actions.drain(..).collect::<Vec<_>>(),
            vec![
                DisplayAction::UnmapWindow(WindowHandle(2)),
                DisplayAction::SetInputFocus(WindowHandle(1)),
                DisplayAction::MoveToTop(WindowHandle(1)),
            ]
        );

        manager.state.goto_workspace_handler(4);
        assert_eq!(manager.state.clients.handles(), vec![WindowHandle(2)]);
        let current = manager.state.clients.current_client().map(|c| c.handle);
        assert_eq!(current, Some(WindowHandle(2)));
    }

    #[test]
    fn moving_without_a_focused_client_or_to_the_same_workspace_does_nothing() {
        let mut manager = Manager::new_test(TestConfig::default());
        assert!(!manager.state.move_client_to_workspace(2));
        manager.window_created_handler(WindowHandle(1));
        assert!(!manager.state.move_client_to_workspace(1));
        assert_eq!(manager.state.clients.handles(), vec![WindowHandle(1)]);
    }
}
