use super::{ClientRegistry, Handle, WindowHandle, Workspace};
use serde::{Deserialize, Serialize};

pub const WORKSPACE_COUNT: usize = 10;
pub type WorkspaceId = usize;

/// The fixed set of virtual desktops and which one is mirrored into the live registry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceStore {
    slots: [Workspace; WORKSPACE_COUNT],
    active: WorkspaceId,
}

impl Default for WorkspaceStore {
    fn default() -> Self {
        Self {
            slots: [Workspace::default(); WORKSPACE_COUNT],
            active: 1,
        }
    }
}

impl WorkspaceStore {
    #[must_use]
    pub const fn active(&self) -> WorkspaceId {
        self.active
    }

    #[must_use]
    pub fn get(&self, index: WorkspaceId) -> Option<&Workspace> {
        self.slots.get(index)
    }

    #[must_use]
    pub fn contains(&self, index: WorkspaceId) -> bool {
        index < WORKSPACE_COUNT
    }

    /// Snapshot the live list of `registry` into slot `index`.
    pub fn save<H: Handle>(&mut self, index: WorkspaceId, registry: &ClientRegistry<H>) {
        match self.slots.get_mut(index) {
            Some(slot) => *slot = registry.snapshot(),
            None => tracing::debug!("Ignoring save of unknown workspace {}", index),
        }
    }

    /// Load slot `index` into the live list of `registry` and mark it active.
    pub fn select<H: Handle>(&mut self, index: WorkspaceId, registry: &mut ClientRegistry<H>) {
        match self.slots.get(index) {
            Some(slot) => {
                registry.restore(slot);
                self.active = index;
            }
            None => tracing::debug!("Ignoring select of unknown workspace {}", index),
        }
    }

    /// The workspace, other than the active one, whose stored chain holds `handle`.
    #[must_use]
    pub fn hidden_owner<H: Handle>(
        &self,
        registry: &ClientRegistry<H>,
        handle: &WindowHandle<H>,
    ) -> Option<WorkspaceId> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != self.active)
            .find(|(_, slot)| {
                registry
                    .iter_from(slot.head)
                    .any(|(_, client)| &client.handle == handle)
            })
            .map(|(index, _)| index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LayoutMode, MockHandle};

    #[test]
    fn workspace_one_is_active_at_startup() {
        let store = WorkspaceStore::default();
        assert_eq!(store.active(), 1);
        for index in 0..WORKSPACE_COUNT {
            assert_eq!(store.get(index), Some(&Workspace::default()));
        }
    }

    #[test]
    fn save_and_select_round_trip_the_list_and_mode() {
        let mut store = WorkspaceStore::default();
        let mut registry: ClientRegistry<MockHandle> = ClientRegistry::default();
        registry.add(WindowHandle(1));
        registry.add(WindowHandle(2));
        registry.set_mode(LayoutMode(3));
        store.save(1, &registry);

        store.select(4, &mut registry);
        assert!(registry.is_empty());
        assert_eq!(registry.mode(), LayoutMode::FLOATING);
        assert_eq!(store.active(), 4);

        store.select(1, &mut registry);
        assert_eq!(registry.handles(), vec![WindowHandle(1), WindowHandle(2)]);
        assert_eq!(registry.mode(), LayoutMode(3));
    }

    #[test]
    fn unknown_indices_are_ignored() {
        let mut store = WorkspaceStore::default();
        let mut registry: ClientRegistry<MockHandle> = ClientRegistry::default();
        registry.add(WindowHandle(1));
        store.save(WORKSPACE_COUNT, &registry);
        store.select(WORKSPACE_COUNT + 3, &mut registry);
        assert_eq!(store.active(), 1);
        assert_eq!(registry.handles(), vec![WindowHandle(1)]);
    }

    #[test]
    fn hidden_owner_skips_the_active_workspace() {
        let mut store = WorkspaceStore::default();
        let mut registry: ClientRegistry<MockHandle> = ClientRegistry::default();
        registry.add(WindowHandle(1));
        store.save(1, &registry);
        store.select(2, &mut registry);
        registry.add(WindowHandle(2));
        store.save(2, &registry);

        assert_eq!(store.hidden_owner(&registry, &WindowHandle(1)), Some(1));
        assert_eq!(store.hidden_owner(&registry, &WindowHandle(2)), None);
        assert_eq!(store.hidden_owner(&registry, &WindowHandle(3)), None);
    }
}
