//! `ferrowm` general configuration

mod checks;
mod default;
mod keybind;

pub use self::keybind::{Keybind, Modifier};

use super::BaseCommand;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use xdg::BaseDirectories;

/// General configuration
///
/// # Example
///
/// In `config.toml`
///
/// ```toml
/// modkey = "Mod4"
/// border_width = 2
///
/// [[keybind]]
/// command = "GotoWorkspace"
/// value = "2"
/// modifier = ["modkey"]
/// key = "2"
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub modkey: String,
    pub mousekey: Option<Modifier>,
    pub border_width: i32,
    pub focused_border_color: String,
    pub default_border_color: String,
    pub focus_follows_mouse: bool,
    pub center_new_windows: bool,
    pub log_level: String,
    pub keybind: Vec<Keybind>,
}

/// Loads `path`, or `$XDG_CONFIG_HOME/ferrowm/config.toml` when no path is given.
///
/// # Errors
///
/// Function will throw an error if `BaseDirectories` doesn't exist, if user doesn't have
/// permissions to place config.toml, if config.toml cannot be read (access writes, malformed file,
/// etc.).
/// Function can also error from inability to save config.toml (if it is the first time running
/// `ferrowm`).
pub fn load_from_file(path: Option<&Path>) -> Result<Config> {
    let config_filename = match path {
        Some(path) => path.to_owned(),
        None => config_file_path()?,
    };
    if config_filename.exists() {
        tracing::debug!("Loading config from {}", config_filename.display());
        let contents = fs::read_to_string(config_filename)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    } else {
        tracing::info!("Writing default config to {}", config_filename.display());
        let config = Config::default();
        let toml = toml::to_string(&config)?;
        fs::write(&config_filename, toml)?;
        Ok(config)
    }
}

/// Where the config lives, creating its directory if needed.
///
/// # Errors
///
/// Errors when no home directory is known or the directory cannot be created.
pub fn config_file_path() -> Result<PathBuf> {
    let path = BaseDirectories::with_prefix("ferrowm")?;
    Ok(path.place_config_file("config.toml")?)
}

#[must_use]
pub fn is_program_in_path(program: &str) -> bool {
    if let Ok(path) = env::var("PATH") {
        for p in path.split(':') {
            let p_str = format!("{p}/{program}");
            if fs::metadata(p_str).is_ok() {
                return true;
            }
        }
    }
    false
}

/// Returns a terminal to set for the default mod+Return keybind.
fn default_terminal<'s>() -> &'s str {
    // order from least common to most common.
    // the thinking is if a machine has an uncommon terminal installed, it is intentional
    let terms = &[
        "alacritty",
        "kitty",
        "urxvt",
        "st",
        "xterm",
        "gnome-terminal",
        "xfce4-terminal",
        "konsole",
    ];

    // If no terminal found in path, default to a good one
    terms
        .iter()
        .find(|terminal| is_program_in_path(terminal))
        .unwrap_or(&"st")
}

impl Config {
    /// The mouse modifier, defaulting to `Mod4`.
    #[must_use]
    pub fn mousekey_names(&self) -> Vec<String> {
        self.mousekey
            .as_ref()
            .unwrap_or(&"Mod4".into())
            .into_iter()
            .map(|m| if m == "modkey" { self.modkey.clone() } else { m })
            .collect()
    }
}

impl ferrowm_core::Config for Config {
    fn mapped_bindings(&self) -> Vec<ferrowm_core::Keybind> {
        // copy keybinds substituting "modkey" modifier with the configured one.
        self.keybind
            .iter()
            .filter_map(
                |keybind| match keybind.try_convert_to_core_keybind(&self.modkey) {
                    Ok(internal_keybind) => Some(internal_keybind),
                    Err(err) => {
                        tracing::warn!("Invalid key binding: {}\n{:?}", err, keybind);
                        None
                    }
                },
            )
            .collect()
    }

    fn mousekey(&self) -> Vec<String> {
        self.mousekey_names()
    }

    fn border_width(&self) -> i32 {
        self.border_width
    }

    fn focused_border_color(&self) -> String {
        self.focused_border_color.clone()
    }

    fn default_border_color(&self) -> String {
        self.default_border_color.clone()
    }

    fn focus_follows_mouse(&self) -> bool {
        self.focus_follows_mouse
    }

    fn center_new_windows(&self) -> bool {
        self.center_new_windows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrowm_core::Action;
    use ferrowm_core::Config as _;

    #[test]
    fn a_missing_file_gets_the_defaults_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = load_from_file(Some(&path)).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());

        let reloaded = load_from_file(Some(&path)).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn missing_keys_take_their_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
            modkey = "Mod1"
            border_width = 3

            [[keybind]]
            command = "GotoWorkspace"
            value = "4"
            modifier = ["modkey", "Shift"]
            key = "4"
            "#,
        )
        .unwrap();

        let config = load_from_file(Some(&path)).unwrap();
        assert_eq!(config.border_width, 3);
        assert!(config.focus_follows_mouse);
        assert!(config.center_new_windows);
        assert_eq!(config.mousekey_names(), vec!["Mod4".to_owned()]);

        let bindings = config.mapped_bindings();
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].modifier, vec!["Mod1".to_owned(), "Shift".to_owned()]);
        assert_eq!(bindings[0].action, Action::SelectWorkspace(4));
    }

    #[test]
    fn a_broken_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "border_width = \"wide\"").unwrap();
        assert!(load_from_file(Some(&path)).is_err());
    }

    #[test]
    fn invalid_bindings_are_dropped() {
        let config = Config {
            keybind: vec![
                Keybind {
                    command: BaseCommand::Execute,
                    value: String::new(),
                    modifier: None,
                    key: "a".to_owned(),
                },
                Keybind {
                    command: BaseCommand::Quit,
                    value: String::new(),
                    modifier: Some("modkey".into()),
                    key: "q".to_owned(),
                },
            ],
            ..Config::default()
        };
        let bindings = config.mapped_bindings();
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].action, Action::Quit);
    }
}
