// Word reversal - tokenization and token-order reversal

use super::error::ReverseError;

/// Reverses the order of words in a sentence.
pub trait WordReverser {
    /// `None` stands for an absent sentence and is rejected; an empty
    /// sentence is valid and yields an empty result.
    fn reverse(&self, sentence: Option<&str>) -> Result<String, ReverseError>;
}

/// Splits on whitespace and rejoins the reversed tokens with single spaces.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpaceSeparatedReverser;

impl WordReverser for SpaceSeparatedReverser {
    fn reverse(&self, sentence: Option<&str>) -> Result<String, ReverseError> {
        let sentence = sentence.ok_or(ReverseError::MissingSentence)?;
        Ok(reverse_words(sentence))
    }
}

/// Whitespace-separated tokens; runs of whitespace never produce empty tokens.
pub fn tokenize(sentence: &str) -> Vec<&str> {
    sentence.split_whitespace().collect()
}

pub fn reverse_words(sentence: &str) -> String {
    let mut tokens = tokenize(sentence);
    tokens.reverse();
    tokens.join(" ")
}
