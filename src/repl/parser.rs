use std::num::NonZeroUsize;

use super::CountInput;

/// Parse a reply to the count prompt
///
/// Surrounding whitespace is ignored. Accepts a positive 32-bit integer with
/// an optional leading `+`; anything else is `Invalid`.
pub fn parse_count(input: &str) -> CountInput {
    let trimmed = input.trim();

    trimmed
        .parse::<i32>()
        .ok()
        .and_then(|value| usize::try_from(value).ok())
        .and_then(NonZeroUsize::new)
        .map(CountInput::Count)
        .unwrap_or_else(|| CountInput::Invalid(trimmed.to_string()))
}
