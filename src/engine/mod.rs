pub mod config;
pub mod error;
pub mod reverser;

pub use config::SessionConfig;
pub use error::{ReverseError, SessionError};
pub use reverser::{reverse_words, tokenize, SpaceSeparatedReverser, WordReverser};
