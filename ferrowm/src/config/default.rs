use super::{default_terminal, BaseCommand, Config, Keybind};
use ferrowm_core::models::WORKSPACE_COUNT;

fn bind(command: BaseCommand, value: &str, modifier: &[&str], key: &str) -> Keybind {
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

impl Default for Config {
    fn default() -> Self {
        let mut commands = vec![
            // Mod + Return => Open A Shell
            bind(BaseCommand::Execute, default_terminal(), &["modkey"], "Return"),
            // Mod + d => Open a launcher
            bind(BaseCommand::Execute, "dmenu_run", &["modkey"], "d"),
            // Mod + q => close focused window
            bind(BaseCommand::CloseWindow, "", &["modkey"], "q"),
            // Mod + c => center focused window
            bind(BaseCommand::CenterWindow, "", &["modkey"], "c"),
            // Mod + f => toggle fullscreen
            bind(BaseCommand::ToggleFullScreen, "", &["modkey"], "f"),
            // Alt + Tab => focus the next window
            bind(BaseCommand::FocusNext, "", &["Mod1"], "Tab"),
            // Mod + Shift + x => exit ferrowm
            bind(BaseCommand::Quit, "", &["modkey", "Shift"], "x"),
            // Volume and brightness keys
            bind(BaseCommand::Execute, "amixer sset Master 5%+", &[], "XF86AudioRaiseVolume"),
            bind(BaseCommand::Execute, "amixer sset Master 5%-", &[], "XF86AudioLowerVolume"),
            bind(BaseCommand::Execute, "amixer sset Master toggle", &[], "XF86AudioMute"),
            bind(BaseCommand::Execute, "brightnessctl set 5%+", &[], "XF86MonBrightnessUp"),
            bind(BaseCommand::Execute, "brightnessctl set 5%-", &[], "XF86MonBrightnessDown"),
        ];

        // Mod + n => go to workspace n, Mod + Shift + n => send the window there
        for i in 0..WORKSPACE_COUNT {
            let key = i.to_string();
            commands.push(bind(BaseCommand::GotoWorkspace, &key, &["modkey"], &key));
            commands.push(bind(
                BaseCommand::MoveToWorkspace,
                &key,
                &["modkey", "Shift"],
                &key,
            ));
        }

        Self {
            modkey: "Mod4".to_owned(),
            mousekey: Some("Mod4".into()),
            border_width: 1,
            focused_border_color: "#FFFFFF".to_owned(),
            default_border_color: "#000000".to_owned(),
            focus_follows_mouse: true,
            center_new_windows: true,
            log_level: "info".to_owned(),
            keybind: commands,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrowm_core::Config as _;

    #[test]
    fn every_default_binding_converts() {
        let config = Config::default();
        assert_eq!(config.mapped_bindings().len(), config.keybind.len());
    }
}
