use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::models::{Handle, Manager};
use crate::DisplayEvent;

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Apply one event to the manager. Returns true if the desktop state changed.
    pub fn display_event_handler(&mut self, event: DisplayEvent<H>) -> bool {
        match event {
            DisplayEvent::KeyCombo(mod_mask, xkeysym) => {
                //look through the bindings and run the first match
                let action = self.state.lookup_action(mod_mask, xkeysym).cloned();
                action.map_or(false, |action| self.command_handler(&action))
            }

            DisplayEvent::ButtonPress {
                subwindow,
                button,
                modmask,
                x_root,
                y_root,
            } => self.mouse_combo_handler(subwindow, button, modmask, (x_root, y_root)),

            DisplayEvent::ButtonRelease => self.mouse_release_handler(),

            DisplayEvent::Motion(x_root, y_root) => self.state.motion_handler(x_root, y_root),

            DisplayEvent::MapRequest(handle) => self.window_created_handler(handle),

            DisplayEvent::WindowDestroy(handle) => self.window_destroyed_handler(&handle),

            DisplayEvent::ConfigureRequest(changes) => self.window_configure_handler(changes),

            DisplayEvent::EnterWindow(handle) => {
                self.state.focus_follows_mouse && self.state.focus_window(&handle)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::tests::{keybind, TestConfig};
    use crate::models::WindowHandle;
    use crate::utils::modmask_lookup::ModMask;
    use crate::{Action, DisplayAction, DisplayEvent, Manager};
    use x11_dl::keysym;

    #[test]
    fn key_combos_run_the_bound_action() {
        let mut manager = Manager::new_test(TestConfig {
            keybinds: vec![keybind(&["Mod4"], "2", Action::SelectWorkspace(2))],
            ..TestConfig::default()
        });
        assert!(manager.display_event_handler(DisplayEvent::KeyCombo(ModMask::Super, keysym::XK_2)));
        assert_eq!(manager.state.workspaces.active(), 2);
        assert!(!manager.display_event_handler(DisplayEvent::KeyCombo(ModMask::Alt, keysym::XK_2)));
    }

    #[test]
    fn bindings_are_resolved_once_at_startup() {
        let mut manager = Manager::new_test(TestConfig {
            keybinds: vec![
                keybind(&["Mod4"], "Tab", Action::FocusNext),
                keybind(&["Mod4"], "NotAKey", Action::Quit),
            ],
            ..TestConfig::default()
        });
        assert_eq!(manager.config.binding_reads.get(), 1);
        assert_eq!(manager.state.keybinds.len(), 1);

        for _ in 0..3 {
            manager.display_event_handler(DisplayEvent::KeyCombo(ModMask::Super, keysym::XK_Tab));
        }
        assert_eq!(manager.config.binding_reads.get(), 1);
    }

    #[test]
    fn entering_a_window_focuses_it_when_enabled() {
        let mut manager = Manager::new_test(TestConfig::default());
        manager.window_created_handler(WindowHandle(1));
        manager.window_created_handler(WindowHandle(2));
        manager.state.actions.clear();

        assert!(manager.display_event_handler(DisplayEvent::EnterWindow(WindowHandle(1))));
        assert_eq!(
            manager.state.actions.pop_front(),
            Some(DisplayAction::SetInputFocus(WindowHandle(1)))
        );
    }

    #[test]
    fn entering_a_window_does_nothing_when_disabled() {
        let mut manager = Manager::new_test(TestConfig {
            focus_follows_mouse: false,
            ..TestConfig::default()
        });
        manager.window_created_handler(WindowHandle(1));
        manager.window_created_handler(WindowHandle(2));
        manager.state.actions.clear();

        assert!(!manager.display_event_handler(DisplayEvent::EnterWindow(WindowHandle(1))));
        assert!(manager.state.actions.is_empty());
    }
}
