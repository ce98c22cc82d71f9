//! Objects (such as clients and workspaces) the manager keeps track of.
mod client;
mod client_registry;
mod interaction;
mod layout_mode;
mod manager;
mod window;
mod window_change;
mod workspace;
mod workspace_store;
mod xyhw;

pub use client::{Client, ClientId};
pub use client_registry::{ClientIter, ClientRegistry};
pub use interaction::{Gesture, InteractionState};
pub use layout_mode::LayoutMode;
pub use manager::Manager;
pub use window::Handle;
pub use window::MockHandle;
pub use window::WindowHandle;
pub use window_change::WindowChanges;
pub use workspace::Workspace;
pub use workspace_store::{WorkspaceId, WorkspaceStore, WORKSPACE_COUNT};
pub use xyhw::Xyhw;
