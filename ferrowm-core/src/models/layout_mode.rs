use serde::{Deserialize, Serialize};

/// Per workspace layout selector.
///
/// Stored and restored with the workspace but not interpreted yet. Reserved for a layout
/// chooser; all workspaces start at `LayoutMode::FLOATING`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LayoutMode(pub u32);

impl LayoutMode {
    pub const FLOATING: Self = Self(0);
}
