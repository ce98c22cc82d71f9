use crate::models::WorkspaceId;
use serde::{Deserialize, Serialize};

/// What a keybinding does when it fires.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub enum Action {
    /// Launch a detached program.
    Spawn { command: String, args: Vec<String> },
    SelectWorkspace(WorkspaceId),
    MoveClientToWorkspace(WorkspaceId),
    FocusNext,
    /// Politely ask the focused client to close.
    Kill,
    ToggleFullscreen,
    CenterWindow,
    Quit,
}

impl Action {
    /// Spawn `line` split on whitespace, the first word being the program.
    #[must_use]
    pub fn spawn_line(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace().map(ToOwned::to_owned);
        let command = words.next()?;
        Some(Self::Spawn {
            command,
            args: words.collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_lines_split_program_and_arguments() {
        assert_eq!(
            Action::spawn_line("  amixer sset Master 5%+ "),
            Some(Action::Spawn {
                command: "amixer".to_owned(),
                args: vec!["sset".to_owned(), "Master".to_owned(), "5%+".to_owned()],
            })
        );
        assert_eq!(Action::spawn_line("   "), None);
    }
}
