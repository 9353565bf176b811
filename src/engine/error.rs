use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReverseError {
    #[error("Sentence argument is missing")]
    MissingSentence,
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Input closed before a valid sentence count was entered")]
    InputClosed,

    #[error(transparent)]
    Reverse(#[from] ReverseError),
}
