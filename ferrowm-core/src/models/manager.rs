use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::errors::Result;
use crate::models::Handle;
use crate::state::State;
use crate::utils::child_process::{self, Children};
use std::sync::{atomic::AtomicBool, Arc};

/// Maintains current program state.
#[derive(Debug)]
pub struct Manager<H: Handle, C, SERVER> {
    pub state: State<H>,
    pub config: C,

    pub(crate) children: Children,
    pub(crate) reap_requested: Arc<AtomicBool>,
    pub(crate) quit_requested: bool,
    pub display_server: SERVER,
}

impl<H, C, SERVER> Manager<H, C, SERVER>
where
    H: Handle,
    C: Config,
    SERVER: DisplayServer<H>,
{
    /// Connect to the display server.
    ///
    /// # Errors
    ///
    /// Forwards the display server's initialisation failure.
    pub fn new(config: C) -> Result<Self> {
        let display_server = SERVER::new(&config)?;

        Ok(Self {
            state: State::new(&config),
            config,
            children: Children::default(),
            reap_requested: Arc::default(),
            quit_requested: false,
            display_server,
        })
    }

    pub fn register_child_hook(&self) {
        child_process::register_child_hook(self.reap_requested.clone());
    }

    /// Stop the event loop after the current batch of events.
    pub fn quit(&mut self) {
        self.quit_requested = true;
    }
}

#[cfg(test)]
impl
    Manager<
        crate::models::MockHandle,
        crate::config::tests::TestConfig,
        crate::display_servers::MockDisplayServer<crate::models::MockHandle>,
    >
{
    pub fn new_test(config: crate::config::tests::TestConfig) -> Self {
        Self::new(config).expect("the mock display server never fails")
    }
}
