use thiserror::Error;

pub type Result<T> = std::result::Result<T, WmError>;

#[derive(Debug, Error)]
pub enum WmError {
    #[error("Unable to connect to the display server: {0}")]
    DisplayConnection(String),
    #[error("Another window manager is already running")]
    AnotherWindowManager,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
