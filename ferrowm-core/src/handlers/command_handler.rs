use crate::action::Action;
use crate::config::Config;
use crate::display_action::DisplayAction;
use crate::display_servers::DisplayServer;
use crate::models::{Handle, Manager};
use crate::state::State;
use crate::utils::child_process;

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Processes an action and invokes the associated function.
    /// Returns true if the state of the desktop changed.
    pub fn command_handler(&mut self, action: &Action) -> bool {
        match action {
            Action::Spawn { command, args } => {
                if let Some(pid) = child_process::spawn(command, args, &mut self.children) {
                    tracing::debug!("Launched {} as {}", command, pid);
                }
                false
            }
            Action::SelectWorkspace(index) => self.state.goto_workspace_handler(*index),
            Action::MoveClientToWorkspace(index) => self.state.move_client_to_workspace(*index),
            Action::FocusNext => self.state.focus_next(),
            Action::Kill => close_window(&mut self.state),
            Action::ToggleFullscreen => self.toggle_fullscreen(),
            Action::CenterWindow => self.center_window(),
            Action::Quit => {
                tracing::info!("Quit requested");
                self.quit();
                false
            }
        }
    }

    /// Cover the display with the current client, or give it back its old geometry.
    pub fn toggle_fullscreen(&mut self) -> bool {
        let Some(id) = self.state.clients.current() else {
            return false;
        };
        let display = self.display_server.display_area();
        let Some(client) = self.state.clients.get(id) else {
            return false;
        };
        let handle = client.handle;
        let current = if client.is_fullscreen {
            display
        } else {
            match self.display_server.query_geometry(handle) {
                Some(xyhw) => xyhw,
                None => return false,
            }
        };

        let Some(client) = self.state.clients.get_mut(id) else {
            return false;
        };
        if let Some(xyhw) = client.toggle_fullscreen(current, display) {
            self.state
                .actions
                .push_back(DisplayAction::MoveResizeWindow(handle, xyhw));
        }
        self.state.actions.push_back(DisplayAction::MoveToTop(handle));
        true
    }

    /// Move the current client to the middle of the display, keeping its size.
    pub fn center_window(&mut self) -> bool {
        let Some(handle) = self.state.clients.current_client().map(|c| c.handle) else {
            return false;
        };
        let Some(xyhw) = self.display_server.query_geometry(handle) else {
            return false;
        };
        let centered = xyhw.centered_in(&self.display_server.display_area());
        self.state
            .actions
            .push_back(DisplayAction::MoveResizeWindow(handle, centered));
        true
    }
}

fn close_window<H: Handle>(state: &mut State<H>) -> bool {
    let Some(handle) = state.clients.current_client().map(|c| c.handle) else {
        return false;
    };
    state.actions.push_back(DisplayAction::CloseWindow(handle));
    false
}

#[cfg(test)]
mod tests {
    use crate::config::tests::TestConfig;
    use crate::display_servers::{DisplayServer, MOCK_WINDOW_GEOMETRY};
    use crate::models::{WindowHandle, Xyhw};
    use crate::{Action, DisplayAction, Manager};

    #[test]
    fn toggling_fullscreen_twice_restores_the_geometry() {
        let mut manager = Manager::new_test(TestConfig::default());
        let handle = WindowHandle(1);
        let original = Xyhw::new(13, 37, 640, 480);
        manager.display_server.set_geometry(handle, original);
        manager.window_created_handler(handle);
        manager.state.actions.clear();

        assert!(manager.command_handler(&Action::ToggleFullscreen));
        let display = manager.display_server.display_area();
        assert_eq!(
            manager.state.actions.pop_front(),
            Some(DisplayAction::MoveResizeWindow(handle, display))
        );
        manager.display_server.set_geometry(handle, display);
        manager.state.actions.clear();

        assert!(manager.command_handler(&Action::ToggleFullscreen));
        assert_eq!(
            manager.state.actions.pop_front(),
            Some(DisplayAction::MoveResizeWindow(handle, original))
        );
        let client = manager.state.clients.current_client().unwrap();
        assert!(!client.is_fullscreen);
    }

    #[test]
    fn fullscreen_without_a_client_does_nothing() {
        let mut manager = Manager::new_test(TestConfig::default());
        assert!(!manager.command_handler(&Action::ToggleFullscreen));
        assert!(manager.state.actions.is_empty());
    }

    #[test]
    fn centering_keeps_the_size() {
        let mut manager = Manager::new_test(TestConfig::default());
        manager.window_created_handler(WindowHandle(1));
        manager.state.actions.clear();

        assert!(manager.command_handler(&Action::CenterWindow));
        let expected = Xyhw::new(
            960 - MOCK_WINDOW_GEOMETRY.w() / 2,
            540 - MOCK_WINDOW_GEOMETRY.h() / 2,
            MOCK_WINDOW_GEOMETRY.w(),
            MOCK_WINDOW_GEOMETRY.h(),
        );
        assert_eq!(
            manager.state.actions.pop_front(),
            Some(DisplayAction::MoveResizeWindow(WindowHandle(1), expected))
        );
    }

    #[test]
    fn kill_asks_the_focused_client_to_close() {
        let mut manager = Manager::new_test(TestConfig::default());
        manager.command_handler(&Action::Kill);
        assert!(manager.state.actions.is_empty());

        manager.window_created_handler(WindowHandle(4));
        manager.state.actions.clear();
        manager.command_handler(&Action::Kill);
        assert_eq!(
            manager.state.actions.pop_front(),
            Some(DisplayAction::CloseWindow(WindowHandle(4)))
        );
        assert!(manager.state.actions.is_empty());
        // The client stays until the window is actually destroyed.
        assert_eq!(manager.state.clients.handles(), vec![WindowHandle(4)]);
    }

    #[test]
    fn spawned_programs_are_tracked() {
        let mut manager = Manager::new_test(TestConfig::default());
        let launched = Action::Spawn {
            command: "true".to_owned(),
            args: vec![],
        };
        assert!(!manager.command_handler(&launched));
        assert_eq!(manager.children.len(), 1);

        let missing = Action::Spawn {
            command: "/nonexistent/ferrowm-test-program".to_owned(),
            args: vec![],
        };
        assert!(!manager.command_handler(&missing));
        assert_eq!(manager.children.len(), 1);
    }

    #[test]
    fn quit_stops_the_manager() {
        let mut manager = Manager::new_test(TestConfig::default());
        manager.command_handler(&Action::Quit);
        assert!(manager.quit_requested);
    }
}
