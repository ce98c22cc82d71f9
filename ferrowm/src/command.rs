use serde::{Deserialize, Serialize};

/// The command a keybinding in `config.toml` runs. Turned into a `ferrowm_core::Action` together
/// with the binding's `value`.
// We allow this clippy lint because the name reads better at the use sites.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseCommand {
    Execute,
    GotoWorkspace,
    MoveToWorkspace,
    FocusNext,
    CloseWindow,
    ToggleFullScreen,
    CenterWindow,
    Quit,
}

