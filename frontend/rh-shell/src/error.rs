use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Config error: {0}")]
    Config(#[from] rh_config::ConfigError),

    #[error("Session error: {0}")]
    Session(#[from] rh_session::SessionError),

    #[error("API error: {0}")]
    Client(#[from] rh_api::ClientError),

    #[error("Navigation error: {0}")]
    Nav(#[from] rh_nav::NavError),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ShellError>;
