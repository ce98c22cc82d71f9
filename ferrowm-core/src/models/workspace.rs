use super::{ClientId, LayoutMode};
use serde::{Deserialize, Serialize};

/// Stored state of one virtual desktop.
///
/// `head` and `current` point into the shared client arena. `current` is either `None` or a
/// member of the chain starting at `head`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Workspace {
    pub head: Option<ClientId>,
    pub current: Option<ClientId>,
    pub mode: LayoutMode,
}
