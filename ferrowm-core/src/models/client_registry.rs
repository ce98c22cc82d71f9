//! Arena backed list of managed windows.
//!
//! Every client of every workspace lives in one arena. Each workspace chains its own clients
//! through `prev`/`next` ids, the registry additionally mirrors the chain of the active
//! workspace in `head`/`current`/`mode`.
use super::{Client, ClientId, Handle, LayoutMode, WindowHandle, Workspace};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ClientRegistry<H: Handle> {
    #[serde(bound = "")]
    slots: Vec<Option<Client<H>>>,
    free: Vec<usize>,
    head: Option<ClientId>,
    current: Option<ClientId>,
    mode: LayoutMode,
}

impl<H: Handle> Default for ClientRegistry<H> {
    fn default() -> Self {
        Self {
            slots: vec![],
            free: vec![],
            head: None,
            current: None,
            mode: LayoutMode::default(),
        }
    }
}

impl<H: Handle> ClientRegistry<H> {
    #[must_use]
    pub const fn head(&self) -> Option<ClientId> {
        self.head
    }

    #[must_use]
    pub const fn current(&self) -> Option<ClientId> {
        self.current
    }

    #[must_use]
    pub const fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: LayoutMode) {
        self.mode = mode;
    }

    #[must_use]
    pub fn get(&self, id: ClientId) -> Option<&Client<H>> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: ClientId) -> Option<&mut Client<H>> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    /// The focused client of the active list.
    #[must_use]
    pub fn current_client(&self) -> Option<&Client<H>> {
        self.current.and_then(|id| self.get(id))
    }

    pub fn current_client_mut(&mut self) -> Option<&mut Client<H>> {
        self.current.and_then(|id| self.get_mut(id))
    }

    /// Append a client for `handle` at the tail of the active list and make it current.
    pub fn add(&mut self, handle: WindowHandle<H>) -> ClientId {
        let id = self.alloc(Client::new(handle));
        let tail = self.iter().last().map(|(tail, _)| tail);
        match tail {
            Some(tail) => {
                if let Some(client) = self.get_mut(tail) {
                    client.next = Some(id);
                }
                if let Some(client) = self.get_mut(id) {
                    client.prev = Some(tail);
                }
            }
            None => self.head = Some(id),
        }
        self.current = Some(id);
        id
    }

    /// Unlink and release the client for `handle` from the active list.
    ///
    /// `current` moves to the predecessor of the removed client, or its successor when it was
    /// the head. Unknown handles are ignored and yield `None`.
    pub fn remove(&mut self, handle: &WindowHandle<H>) -> Option<Client<H>> {
        let id = self.find(handle)?;
        let client = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id.0);

        match client.prev {
            Some(prev) => {
                if let Some(prev) = self.get_mut(prev) {
                    prev.next = client.next;
                }
            }
            None => self.head = client.next,
        }
        if let Some(next) = client.next {
            if let Some(next) = self.get_mut(next) {
                next.prev = client.prev;
            }
        }

        self.current = client.prev.or(client.next);
        Some(Client {
            prev: None,
            next: None,
            ..client
        })
    }

    /// Move `current` one step down the chain, wrapping from the tail back to the head.
    pub fn advance_focus(&mut self) {
        let Some(current) = self.current else {
            return;
        };
        let next = self.get(current).and_then(Client::next);
        self.current = next.or(self.head);
    }

    /// Focus `id` if it is part of the active list.
    pub fn set_current(&mut self, id: ClientId) -> bool {
        let member = self.iter().any(|(other, _)| other == id);
        if member {
            self.current = Some(id);
        }
        member
    }

    /// Walk the active list from head to tail.
    pub fn iter(&self) -> ClientIter<'_, H> {
        self.iter_from(self.head)
    }

    /// Walk the chain that starts at `head`, used for lists of stored workspaces.
    pub fn iter_from(&self, head: Option<ClientId>) -> ClientIter<'_, H> {
        ClientIter {
            registry: self,
            next: head,
        }
    }

    /// Window handles of the active list, in order.
    #[must_use]
    pub fn handles(&self) -> Vec<WindowHandle<H>> {
        self.iter().map(|(_, client)| client.handle).collect()
    }

    /// Find the client of the active list that wraps `handle`.
    #[must_use]
    pub fn find(&self, handle: &WindowHandle<H>) -> Option<ClientId> {
        self.iter()
            .find(|(_, client)| &client.handle == handle)
            .map(|(id, _)| id)
    }

    /// Whether any workspace chain, stored or active, holds `handle`.
    #[must_use]
    pub fn is_managed(&self, handle: &WindowHandle<H>) -> bool {
        self.slots.iter().flatten().any(|c| &c.handle == handle)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    #[must_use]
    pub fn snapshot(&self) -> Workspace {
        Workspace {
            head: self.head,
            current: self.current,
            mode: self.mode,
        }
    }

    pub fn restore(&mut self, workspace: &Workspace) {
        self.head = workspace.head;
        self.current = workspace.current;
        self.mode = workspace.mode;
    }

    fn alloc(&mut self, client: Client<H>) -> ClientId {
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(client);
                ClientId(index)
            }
            None => {
                self.slots.push(Some(client));
                ClientId(self.slots.len() - 1)
            }
        }
    }
}

/// Restartable, non-owning walk over one chain of clients.
pub struct ClientIter<'a, H: Handle> {
    registry: &'a ClientRegistry<H>,
    next: Option<ClientId>,
}

impl<'a, H: Handle> Iterator for ClientIter<'a, H> {
    type Item = (ClientId, &'a Client<H>);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let client = self.registry.get(id)?;
        self.next = client.next;
        Some((id, client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MockHandle;

    fn registry_with(handles: &[MockHandle]) -> ClientRegistry<MockHandle> {
        let mut registry = ClientRegistry::default();
        for h in handles {
            registry.add(WindowHandle(*h));
        }
        registry
    }

    fn current_handle(registry: &ClientRegistry<MockHandle>) -> Option<MockHandle> {
        registry.current_client().map(|c| c.handle.0)
    }

    /// Walks the chain and checks that links are mutual and acyclic.
    fn assert_integrity(registry: &ClientRegistry<MockHandle>) {
        let mut seen = vec![];
        let mut prev: Option<ClientId> = None;
        let mut next = registry.head();
        while let Some(id) = next {
            assert!(!seen.contains(&id), "cycle through {id:?}");
            seen.push(id);
            let client = registry.get(id).expect("dangling link");
            assert_eq!(client.prev(), prev);
            prev = Some(id);
            next = client.next();
        }
        if let Some(current) = registry.current() {
            assert!(seen.contains(&current), "current is not reachable from head");
        }
        assert_eq!(seen.len(), registry.iter().count());
    }

    #[test]
    fn adding_appends_to_the_tail_and_focuses() {
        let registry = registry_with(&[1, 2, 3]);
        assert_eq!(
            registry.handles(),
            vec![WindowHandle(1), WindowHandle(2), WindowHandle(3)]
        );
        assert_eq!(current_handle(&registry), Some(3));
        assert_integrity(&registry);
    }

    #[test]
    fn links_stay_consistent_over_mixed_add_and_remove() {
        let mut registry = registry_with(&[1, 2, 3, 4, 5]);
        registry.remove(&WindowHandle(1));
        assert_integrity(&registry);
        registry.remove(&WindowHandle(5));
        assert_integrity(&registry);
        registry.add(WindowHandle(6));
        registry.remove(&WindowHandle(3));
        assert_integrity(&registry);
        registry.add(WindowHandle(7));
        registry.add(WindowHandle(8));
        registry.remove(&WindowHandle(7));
        assert_integrity(&registry);
        assert_eq!(
            registry.handles(),
            vec![
                WindowHandle(2),
                WindowHandle(4),
                WindowHandle(6),
                WindowHandle(8)
            ]
        );
    }

    #[test]
    fn links_stay_consistent_over_long_random_sequences() {
        // xorshift32 with a fixed seed keeps the sequence reproducible.
        let mut seed: u32 = 0x9E37_79B9;
        let mut step = || {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            seed
        };

        let mut registry = ClientRegistry::default();
        let mut expected: Vec<MockHandle> = vec![];
        let mut next_handle: MockHandle = 0;
        for _ in 0..5000 {
            let roll = step();
            if expected.is_empty() || (expected.len() < 64 && roll % 2 == 0) {
                next_handle += 1;
                registry.add(WindowHandle(next_handle));
                expected.push(next_handle);
            } else {
                let index = step() as usize % expected.len();
                let victim = expected.remove(index);
                assert!(registry.remove(&WindowHandle(victim)).is_some());
            }
            if roll % 7 == 0 {
                registry.advance_focus();
            }
            assert_integrity(&registry);
            assert_eq!(
                registry.handles(),
                expected.iter().map(|h| WindowHandle(*h)).collect::<Vec<_>>()
            );
            assert_eq!(registry.current().is_some(), !expected.is_empty());
        }
    }

    #[test]
    fn removed_slots_are_recycled() {
        let mut registry = registry_with(&[1, 2]);
        let first = registry.find(&WindowHandle(1)).unwrap();
        registry.remove(&WindowHandle(1));
        let reused = registry.add(WindowHandle(3));
        assert_eq!(first, reused);
        assert_eq!(registry.handles(), vec![WindowHandle(2), WindowHandle(3)]);
        assert_integrity(&registry);
    }

    #[test]
    fn removing_the_only_client_empties_the_list() {
        let mut registry = registry_with(&[1]);
        assert!(registry.remove(&WindowHandle(1)).is_some());
        assert!(registry.is_empty());
        assert_eq!(registry.current(), None);
    }

    #[test]
    fn removing_refocuses_the_predecessor() {
        let mut registry = registry_with(&[1, 2, 3]);
        registry.remove(&WindowHandle(2));
        assert_eq!(current_handle(&registry), Some(1));
    }

    #[test]
    fn removing_the_head_refocuses_the_successor() {
        let mut registry = registry_with(&[1, 2, 3]);
        registry.remove(&WindowHandle(1));
        assert_eq!(current_handle(&registry), Some(2));
        assert_integrity(&registry);
    }

    #[test]
    fn removing_an_unknown_window_is_a_noop() {
        let mut registry = registry_with(&[1, 2]);
        assert!(registry.remove(&WindowHandle(42)).is_none());
        assert_eq!(registry.handles(), vec![WindowHandle(1), WindowHandle(2)]);
        assert_eq!(current_handle(&registry), Some(2));
    }

    #[test]
    fn advancing_focus_cycles_and_wraps() {
        let mut registry = registry_with(&[1, 2, 3]);
        let second = registry.find(&WindowHandle(2)).unwrap();
        assert!(registry.set_current(second));
        registry.advance_focus();
        assert_eq!(current_handle(&registry), Some(3));
        registry.advance_focus();
        assert_eq!(current_handle(&registry), Some(1));
    }

    #[test]
    fn advancing_focus_on_an_empty_list_is_a_noop() {
        let mut registry: ClientRegistry<MockHandle> = ClientRegistry::default();
        registry.advance_focus();
        assert_eq!(registry.current(), None);
    }

    #[test]
    fn iteration_is_restartable() {
        let registry = registry_with(&[1, 2, 3]);
        let first: Vec<_> = registry.iter().map(|(id, _)| id).collect();
        let second: Vec<_> = registry.iter().map(|(id, _)| id).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }
}
