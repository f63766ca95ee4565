use std::{error::Error as StdError, fmt};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing required argument: `{0}`. Use `--help` for more information")]
    MissingRequiredArgument(String),

    #[error("Can't parse argument `{name}` as {ty}")]
    InvalidArgumentType { name: String, ty: &'static str },

    #[error("Can't parse option `--{name}` as {ty}")]
    InvalidOptionType { name: String, ty: &'static str },

    #[error("Unknown command: `{name}`. Available: {}", Names(.available))]
    UnknownCommand { name: String, available: Vec<String> },

    #[error("A subcommand is required. Available: {}", Names(.available))]
    MissingCommand { available: Vec<String> },

    #[error("Field declared more than once: `{0}`")]
    DuplicateField(String),

    #[error("Field name is reserved: `{0}`")]
    ReservedField(String),

    #[error("Command declared more than once: `{0}`")]
    DuplicateCommand(String),

    #[error("Invalid utf8 in argument: {0}")]
    NotUnicode(String),

    #[error("{0}")]
    Run(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    /// Wraps a failure raised by a command's own run routine.
    pub fn run(err: impl Into<Box<dyn StdError + Send + Sync>>) -> Error {
        Error::Run(err.into())
    }
}

struct Names<'a>(&'a [String]);

impl fmt::Display for Names<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for name in self.0 {
            write!(f, "{sep}`{name}`")?;
            sep = ", ";
        }
        Ok(())
    }
}
