use crate::utils::modmask_lookup::{into_modmask, ModMask};
use crate::utils::xkeysym_lookup::{into_keysym, XKeysym};
use crate::Action;
use serde::{Deserialize, Serialize};

/// A keybinding as configured: modifier names, a key name and what to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub modifier: Vec<String>,
    pub key: String,
    pub action: Action,
}

impl Keybind {
    /// Resolve the names into the mask and keysym a key press reports.
    ///
    /// Returns `None` when the key name is unknown.
    #[must_use]
    pub fn resolve(&self) -> Option<ResolvedKeybind> {
        Some(ResolvedKeybind {
            modmask: into_modmask(&self.modifier),
            keysym: into_keysym(&self.key)?,
            action: self.action.clone(),
        })
    }
}

/// A keybinding ready to be grabbed and matched.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ResolvedKeybind {
    pub modmask: ModMask,
    pub keysym: XKeysym,
    pub action: Action,
}

impl ResolvedKeybind {
    /// Whether this binding fires for the given modifier mask and keysym.
    #[must_use]
    pub fn matches(&self, mask: ModMask, keysym: XKeysym) -> bool {
        self.keysym == keysym && self.modmask == mask.clean()
    }
}

/// Resolve a keybinding table once, keeping its order.
#[must_use]
pub fn resolve_keybinds(bindings: &[Keybind]) -> Vec<ResolvedKeybind> {
    bindings
        .iter()
        .filter_map(|keybind| {
            let resolved = keybind.resolve();
            if resolved.is_none() {
                tracing::warn!("Ignoring binding for unknown key `{}`", keybind.key);
            }
            resolved
        })
        .collect()
}

pub trait Config {
    /// Ordered keybinding table. Earlier entries win.
    fn mapped_bindings(&self) -> Vec<Keybind>;

    /// Modifier held to move and resize windows with the mouse.
    fn mousekey(&self) -> Vec<String>;

    fn border_width(&self) -> i32;
    fn focused_border_color(&self) -> String;
    fn default_border_color(&self) -> String;
    fn focus_follows_mouse(&self) -> bool;
    fn center_new_windows(&self) -> bool;
}
