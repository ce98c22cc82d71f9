//! Everything the manager knows about the desktop.

use crate::config::{resolve_keybinds, Config, ResolvedKeybind};
use crate::display_action::DisplayAction;
use crate::models::{ClientRegistry, Handle, InteractionState, WorkspaceStore};
use crate::utils::modmask_lookup::{into_modmask, ModMask};
use crate::utils::xkeysym_lookup::XKeysym;
use crate::Action;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Serialize, Deserialize, Debug)]
pub struct State<H: Handle> {
    #[serde(bound = "")]
    pub clients: ClientRegistry<H>,
    pub workspaces: WorkspaceStore,
    #[serde(bound = "")]
    pub interaction: InteractionState<H>,
    /// Calls for the display server, flushed in order after each event.
    #[serde(bound = "")]
    pub actions: VecDeque<DisplayAction<H>>,
    /// Keybindings in config order, resolved when the manager starts.
    pub keybinds: Vec<ResolvedKeybind>,
    pub mousekey: ModMask,
    pub border_width: i32,
    pub focus_follows_mouse: bool,
    pub center_new_windows: bool,
}

impl<H: Handle> State<H> {
    pub(crate) fn new(config: &impl Config) -> Self {
        Self {
            clients: ClientRegistry::default(),
            workspaces: WorkspaceStore::default(),
            interaction: InteractionState::default(),
            actions: VecDeque::new(),
            keybinds: resolve_keybinds(&config.mapped_bindings()),
            mousekey: into_modmask(&config.mousekey()),
            border_width: config.border_width(),
            focus_follows_mouse: config.focus_follows_mouse(),
            center_new_windows: config.center_new_windows(),
        }
    }

    /// The action of the first binding matching the key press, if any.
    #[must_use]
    pub fn lookup_action(&self, mask: ModMask, keysym: XKeysym) -> Option<&Action> {
        self.keybinds
            .iter()
            .find(|keybind| keybind.matches(mask, keysym))
            .map(|keybind| &keybind.action)
    }

    /// Store the live list into the active workspace slot.
    pub fn save_active(&mut self) {
        let active = self.workspaces.active();
        self.workspaces.save(active, &self.clients);
    }
}
