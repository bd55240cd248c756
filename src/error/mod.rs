mod config;
mod input;
mod io;
mod rules;

pub use config::ConfigError;
pub use input::InputError;
pub use io::IoError;
pub use rules::RuleGraphError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Rules(#[from] RuleGraphError),
}

pub type Result<T> = std::result::Result<T, Error>;
