use super::Config;
use ferrowm_core::utils::modmask_lookup::is_modifier;
use ferrowm_core::utils::xkeysym_lookup::into_keysym;
use std::collections::HashMap;
use tracing_subscriber::EnvFilter;

impl Config {
    pub fn check_mousekey(&self, verbose: bool) -> bool {
        if verbose {
            println!("Checking if mousekey is set.");
        }
        let names = self.mousekey_names();
        if names.is_empty() {
            println!("Your mousekey is set to nothing, this will cause windows to move/resize with just a mouse press.");
            return false;
        }
        if let Some(invalid) = names.iter().find(|m| !is_modifier(m)) {
            println!("\x1b[1;91mERROR: Mousekey modifier `{invalid}` is not valid\x1b[0m");
            return false;
        }
        if verbose {
            println!("Mousekey is okay.");
        }
        true
    }

    pub fn check_log_level(&self, verbose: bool) -> bool {
        if verbose {
            println!("Trying to parse log_level.");
        }
        match EnvFilter::builder().parse(&self.log_level) {
            Ok(_) => {
                if verbose {
                    println!("Log level is ok.");
                }
                true
            }
            Err(err) => {
                println!("Log level is invalid: {err}");
                false
            }
        }
    }

    /// Every problem with the keybinds: bad values, unknown keys or modifiers and key
    /// combinations bound more than once.
    #[must_use]
    pub fn keybind_errors(&self) -> Vec<String> {
        let mut returns = Vec::new();
        let mut bindings = HashMap::new();
        if !is_modifier(&self.modkey) {
            returns.push(format!("Modkey `{}` is not valid", self.modkey));
        }
        for keybind in &self.keybind {
            if let Err(err) = keybind.try_convert_to_core_keybind(&self.modkey) {
                returns.push(format!("{err} for keybind {keybind:?}"));
            }
            if into_keysym(&keybind.key).is_none() {
                returns.push(format!(
                    "Key `{}` is not valid for keybind {keybind:?}",
                    keybind.key
                ));
            }

            let mut modifier = keybind.resolved_modifier(&self.modkey);
            for m in &modifier {
                if !is_modifier(m) {
                    returns.push(format!(
                        "Modifier `{m}` is not valid for keybind {keybind:?}"
                    ));
                }
            }

            modifier.sort_unstable();
            modifier.dedup();
            if let Some(conflict) =
                bindings.insert((modifier.clone(), keybind.key.clone()), keybind.command)
            {
                returns.push(format!(
                    "Multiple commands bound to key combination {} + {}:\
                    \n    -> {:?}\
                    \n    -> {:?}\
                    \nHelp: change one of the keybindings to something else.",
                    modifier.join("+"),
                    keybind.key,
                    conflict,
                    keybind.command,
                ));
            }
        }
        returns
    }

    /// Check all keybinds to ensure that required values are provided
    /// Checks to see if value is provided (if required)
    /// Checks to see if keys are valid against Xkeysym
    pub fn check_keybinds(&self, verbose: bool) -> bool {
        println!("\x1b[0;94m::\x1b[0m Checking keybinds . . .");
        if verbose {
            for keybind in &self.keybind {
                println!(
                    "Keybind: {:?} value field is empty: {}",
                    keybind,
                    keybind.value.is_empty()
                );
            }
        }
        let errors = self.keybind_errors();
        if errors.is_empty() {
            println!("\x1b[0;92m    -> All keybinds OK\x1b[0m");
            return true;
        }
        for error in errors {
            println!("\x1b[1;91mERROR: {error}\x1b[0m");
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BaseCommand, Keybind};

    fn keybind(command: BaseCommand, value: &str, modifier: &[&str], key: &str) -> Keybind {
        Keybind {
            command,
            value: value.to_owned(),
            modifier: Some(
                modifier
                    .iter()
                    .map(|m| (*m).to_owned())
                    .collect::<Vec<_>>()
                    .into(),
            ),
            key: key.to_owned(),
        }
    }

    #[test]
    fn the_default_config_is_clean() {
        let config = Config::default();
        assert_eq!(config.keybind_errors(), Vec::<String>::new());
        assert!(config.check_log_level(false));
        assert!(config.check_mousekey(false));
    }

    #[test]
    fn conflicts_and_bad_names_are_reported() {
        let config = Config {
            keybind: vec![
                keybind(BaseCommand::FocusNext, "", &["modkey", "Shift"], "j"),
                keybind(BaseCommand::Quit, "", &["Shift", "Mod4"], "j"),
                keybind(BaseCommand::FocusNext, "", &["Hyper"], "j"),
                keybind(BaseCommand::FocusNext, "", &["modkey"], "NotAKey"),
            ],
            ..Config::default()
        };
        let errors = config.keybind_errors();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].starts_with("Multiple commands bound"));
        assert!(errors[1].starts_with("Modifier `Hyper`"));
        assert!(errors[2].starts_with("Key `NotAKey`"));
    }

    #[test]
    fn a_bad_log_level_is_reported() {
        let config = Config {
            log_level: "ferrowm=loud".to_owned(),
            ..Config::default()
        };
        assert!(!config.check_log_level(false));
    }
}
