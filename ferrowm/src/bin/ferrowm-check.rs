use anyhow::{bail, Result};
use clap::{arg, command};
use ferrowm::Config;
use std::path::PathBuf;

fn main() -> Result<()> {
    let matches = command!("ferrowm Check")
        .about("Checks syntax of the configuration file")
        .args(&[
            arg!(-v --verbose "Outputs received configuration file."),
            arg!([INPUT] "Sets the input file to use. Uses the XDG config file otherwise."),
        ])
        .get_matches();

    let config_file = matches.get_one::<String>("INPUT").map(PathBuf::from);
    let verbose = matches.get_flag("verbose");

    println!(
        "\x1b[0;94m::\x1b[0m ferrowm version: {}",
        env!("CARGO_PKG_VERSION")
    );

    println!("\x1b[0;94m::\x1b[0m Loading configuration . . .");
    let config = match check_config_file(config_file, verbose) {
        Ok(config) => {
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            if verbose {
                dbg!(&config);
            }
            config
        }
        Err(e) => {
            println!("Configuration failed. Reason: {e:?}");
            bail!("configuration could not be loaded");
        }
    };

    let mut ok = config.check_log_level(verbose);
    ok &= config.check_mousekey(verbose);
    ok &= config.check_keybinds(verbose);
    if !ok {
        bail!("configuration has errors");
    }
    Ok(())
}

/// Loads configuration from either specified file (preferred) or default.
/// # Errors
///
/// Errors if the file cannot be read or does not parse.
/// If a path is specified and does not exist, that is an error too.
fn check_config_file(fspath: Option<PathBuf>, verbose: bool) -> Result<Config> {
    let config_filename = match fspath {
        Some(path) if !path.exists() => bail!("{} does not exist", path.display()),
        Some(path) => path,
        None => ferrowm::config_file_path()?,
    };
    if verbose {
        dbg!(&config_filename);
    }
    ferrowm::load_from_file(Some(&config_filename))
}
