use super::BaseCommand;
use anyhow::{ensure, Context, Result};
use ferrowm_core::models::{WorkspaceId, WORKSPACE_COUNT};
use ferrowm_core::Action;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub command: BaseCommand,
    #[serde(default)]
    pub value: String,
    pub modifier: Option<Modifier>,
    pub key: String,
}

impl Keybind {
    /// Checks the value against the command and resolves both into a core keybinding.
    ///
    /// # Errors
    ///
    /// Errors when a command lacks its value, or the value does not parse for the command.
    pub fn try_convert_to_core_keybind(&self, modkey: &str) -> Result<ferrowm_core::Keybind> {
        let action = match self.command {
            BaseCommand::Execute => {
                ensure!(!self.value.trim().is_empty(), "value must not be empty");
                Action::spawn_line(&self.value).context("value must name a program")?
            }
            BaseCommand::GotoWorkspace => {
                Action::SelectWorkspace(parse_workspace(&self.value, "GotoWorkspace")?)
            }
            BaseCommand::MoveToWorkspace => {
                Action::MoveClientToWorkspace(parse_workspace(&self.value, "MoveToWorkspace")?)
            }
            BaseCommand::FocusNext => Action::FocusNext,
            BaseCommand::CloseWindow => Action::Kill,
            BaseCommand::ToggleFullScreen => Action::ToggleFullscreen,
            BaseCommand::CenterWindow => Action::CenterWindow,
            BaseCommand::Quit => Action::Quit,
        };

        Ok(ferrowm_core::Keybind {
            modifier: self.resolved_modifier(modkey),
            key: self.key.clone(),
            action,
        })
    }

    /// The modifier names of this binding, with `modkey` replaced and `None` meaning no modifier.
    #[must_use]
    pub fn resolved_modifier(&self, modkey: &str) -> Vec<String> {
        self.modifier
            .iter()
            .flatten()
            .filter(|m| m != "None")
            .map(|m| if m == "modkey" { modkey.to_owned() } else { m })
            .collect()
    }
}

fn parse_workspace(value: &str, command: &str) -> Result<WorkspaceId> {
    let index = usize::from_str(value.trim())
        .with_context(|| format!("invalid workspace index for {command}"))?;
    ensure!(
        index < WORKSPACE_COUNT,
        "workspace index for {command} must be below {WORKSPACE_COUNT}"
    );
    Ok(index)
}

#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq)]
#[serde(untagged)]
pub enum Modifier {
    Single(String),
    List(Vec<String>),
}

impl IntoIterator for &Modifier {
    type Item = String;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        let ms = match self {
            Modifier::Single(m) => vec![m.clone()],
            Modifier::List(ms) => ms.clone(),
        };
        ms.into_iter()
    }
}

impl std::convert::From<Vec<String>> for Modifier {
    fn from(l: Vec<String>) -> Self {
        Self::List(l)
    }
}

impl std::convert::From<&str> for Modifier {
    fn from(m: &str) -> Self {
        Self::Single(m.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keybind(command: BaseCommand, value: &str, modifier: Option<Modifier>) -> Keybind {
        Keybind {
            command,
            value: value.to_owned(),
            modifier,
            key: "x".to_owned(),
        }
    }

    #[test]
    fn modkey_is_substituted() {
        let kb = keybind(
            BaseCommand::FocusNext,
            "",
            Some(vec!["modkey".to_owned(), "Shift".to_owned()].into()),
        );
        let core = kb.try_convert_to_core_keybind("Mod1").unwrap();
        assert_eq!(core.modifier, vec!["Mod1".to_owned(), "Shift".to_owned()]);
        assert_eq!(core.action, Action::FocusNext);
    }

    #[test]
    fn missing_or_none_modifier_is_empty() {
        let kb = keybind(BaseCommand::Quit, "", None);
        assert!(kb.resolved_modifier("Mod4").is_empty());
        let kb = keybind(BaseCommand::Quit, "", Some("None".into()));
        assert!(kb.resolved_modifier("Mod4").is_empty());
    }

    #[test]
    fn execute_needs_a_value() {
        let kb = keybind(BaseCommand::Execute, "  ", None);
        assert!(kb.try_convert_to_core_keybind("Mod4").is_err());

        let kb = keybind(BaseCommand::Execute, "st -e htop", None);
        assert_eq!(
            kb.try_convert_to_core_keybind("Mod4").unwrap().action,
            Action::Spawn {
                command: "st".to_owned(),
                args: vec!["-e".to_owned(), "htop".to_owned()],
            }
        );
    }

    #[test]
    fn workspace_indices_are_bounded() {
        let kb = keybind(BaseCommand::GotoWorkspace, "9", None);
        assert_eq!(
            kb.try_convert_to_core_keybind("Mod4").unwrap().action,
            Action::SelectWorkspace(9)
        );
        let kb = keybind(BaseCommand::MoveToWorkspace, "10", None);
        assert!(kb.try_convert_to_core_keybind("Mod4").is_err());
        let kb = keybind(BaseCommand::GotoWorkspace, "one", None);
        assert!(kb.try_convert_to_core_keybind("Mod4").is_err());
    }
}
