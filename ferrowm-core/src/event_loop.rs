use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::errors::Result;
use crate::models::{Handle, Manager};
use crate::DisplayEvent;
use std::sync::atomic::Ordering;
use std::time::Duration;

/// How long to sleep on the connection before checking for exited children.
const REAP_INTERVAL: Duration = Duration::from_millis(500);

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Run until a quit action is handled.
    ///
    /// Every event is handled to completion, and its display actions flushed, before the next
    /// one is looked at.
    ///
    /// # Errors
    ///
    /// Fails when waiting on the display server connection fails.
    pub fn event_loop(mut self) -> Result<()> {
        self.register_child_hook();
        tracing::info!("Entering event loop");

        while !self.quit_requested {
            self.display_server.flush();
            self.display_server.wait_readable(REAP_INTERVAL)?;

            let events = self.display_server.get_next_events();
            self.process_events(events);

            if self.reap_requested.swap(false, Ordering::SeqCst) {
                self.children.remove_finished_children();
            }
        }
        self.display_server.flush();
        tracing::info!("Leaving event loop");
        Ok(())
    }

    /// Handle one batch of events, in order.
    pub fn process_events(&mut self, events: Vec<DisplayEvent<H>>) {
        for event in collapse_motion(events) {
            self.handle_event(event);
            if self.quit_requested {
                break;
            }
        }
    }

    fn handle_event(&mut self, event: DisplayEvent<H>) {
        tracing::trace!("Handling {:?}", event);
        self.display_event_handler(event);

        // flush what the handler asked for before looking at the next event
        while let Some(act) = self.state.actions.pop_front() {
            self.display_server.execute_action(act);
        }
    }
}

/// Drop every motion event that is directly followed by another one.
fn collapse_motion<H: Handle>(events: Vec<DisplayEvent<H>>) -> Vec<DisplayEvent<H>> {
    let mut collapsed: Vec<DisplayEvent<H>> = Vec::with_capacity(events.len());
    for event in events {
        let supersedes_last = matches!(event, DisplayEvent::Motion(..))
            && matches!(collapsed.last(), Some(DisplayEvent::Motion(..)));
        if supersedes_last {
            collapsed.pop();
        }
        collapsed.push(event);
    }
    collapsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::{keybind, TestConfig};
    use crate::models::{MockHandle, WindowHandle, Xyhw};
    use crate::utils::modmask_lookup::{Button, ModMask};
    use crate::{Action, DisplayAction};
    use x11_dl::keysym;

    #[test]
    fn consecutive_motion_events_collapse_into_the_last_one() {
        let events: Vec<DisplayEvent<MockHandle>> = vec![
            DisplayEvent::Motion(1, 1),
            DisplayEvent::Motion(2, 2),
            DisplayEvent::Motion(3, 3),
            DisplayEvent::ButtonRelease,
            DisplayEvent::Motion(4, 4),
            DisplayEvent::Motion(5, 5),
        ];
        assert_eq!(
            collapse_motion(events),
            vec![
                DisplayEvent::Motion(3, 3),
                DisplayEvent::ButtonRelease,
                DisplayEvent::Motion(5, 5),
            ]
        );
    }

    #[test]
    fn a_motion_burst_resizes_only_once() {
        let mut manager = Manager::new_test(TestConfig::default());
        let handle = WindowHandle(1);
        manager
            .display_server
            .set_geometry(handle, Xyhw::new(0, 0, 100, 100));
        manager.process_events(vec![
            DisplayEvent::ButtonPress {
                subwindow: Some(handle),
                button: Button::Right,
                modmask: ModMask::Super,
                x_root: 0,
                y_root: 0,
            },
            DisplayEvent::Motion(10, 10),
            DisplayEvent::Motion(20, 20),
            DisplayEvent::Motion(30, 40),
        ]);
        let resizes: Vec<_> = manager
            .display_server
            .executed
            .iter()
            .filter(|act| matches!(act, DisplayAction::MoveResizeWindow(..)))
            .collect();
        assert_eq!(
            resizes,
            vec![&DisplayAction::MoveResizeWindow(
                handle,
                Xyhw::new(0, 0, 130, 140)
            )]
        );
    }

    #[test]
    fn a_window_survives_a_round_trip_through_another_workspace() {
        let mut manager = Manager::new_test(TestConfig {
            keybinds: vec![
                keybind(&["Mod4"], "1", Action::SelectWorkspace(1)),
                keybind(&["Mod4"], "2", Action::SelectWorkspace(2)),
            ],
            ..TestConfig::default()
        });
        let w = WindowHandle(42);

        manager.process_events(vec![DisplayEvent::MapRequest(w)]);
        assert_eq!(manager.state.clients.handles(), vec![w]);
        assert!(manager.display_server.is_mapped(w));
        assert_eq!(manager.display_server.focused, Some(w));
        assert!(manager
            .display_server
            .take_executed()
            .contains(&DisplayAction::MoveToTop(w)));

        manager.process_events(vec![DisplayEvent::KeyCombo(ModMask::Super, keysym::XK_2)]);
        assert_eq!(manager.state.workspaces.active(), 2);
        assert!(manager.state.clients.is_empty());
        assert!(!manager.display_server.is_mapped(w));

        manager.display_server.focused = None;
        manager.process_events(vec![DisplayEvent::KeyCombo(ModMask::Super, keysym::XK_1)]);
        assert_eq!(manager.state.workspaces.active(), 1);
        assert_eq!(manager.state.clients.handles(), vec![w]);
        assert!(manager.display_server.is_mapped(w));
        assert_eq!(manager.display_server.focused, Some(w));
    }

    #[test]
    fn the_loop_runs_until_quit() {
        let mut manager = Manager::new_test(TestConfig {
            keybinds: vec![keybind(&["Mod4", "Shift"], "e", Action::Quit)],
            ..TestConfig::default()
        });
        manager
            .display_server
            .push_event(DisplayEvent::MapRequest(WindowHandle(1)));
        manager.display_server.push_event(DisplayEvent::KeyCombo(
            ModMask::Super | ModMask::Shift,
            keysym::XK_e,
        ));
        assert!(manager.event_loop().is_ok());
    }
}
