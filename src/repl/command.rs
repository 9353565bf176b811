use std::num::NonZeroUsize;

/// Outcome of parsing a sentence-count reply
#[derive(Debug, Clone, PartialEq)]
pub enum CountInput {
    /// Positive number of sentences to collect
    Count(NonZeroUsize),

    /// Rejected reply (non-numeric, zero, negative, empty)
    Invalid(String),
}
