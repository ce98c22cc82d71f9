use anyhow::{Context, Result};
use ferrowm_core::Manager;
use xlib_display_server::{XlibDisplayServer, XlibWindowHandle};

fn main() -> Result<()> {
    // The log level lives in the config, so errors loading it are reported once logging is up.
    let (config, load_err) = match ferrowm::load_from_file(None) {
        Ok(config) => (config, None),
        Err(err) => (ferrowm::Config::default(), Some(err)),
    };
    let _log_guard = ferrowm::utils::log::setup_logging(&config.log_level);
    if let Some(err) = load_err {
        tracing::error!("Error loading config, using the defaults: {:?}", err);
    }
    tracing::info!("ferrowm {} booting...", env!("CARGO_PKG_VERSION"));

    let manager = match Manager::<XlibWindowHandle, ferrowm::Config, XlibDisplayServer>::new(config)
    {
        Ok(manager) => manager,
        Err(err) => {
            tracing::error!("Unable to start: {}", err);
            return Err(err).context("ferrowm failed to start");
        }
    };

    manager
        .event_loop()
        .context("ferrowm stopped on an event loop error")?;
    tracing::info!("Completed");
    Ok(())
}
