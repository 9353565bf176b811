// Literal texts used by the interaction loop

/// Prompts and messages written by `InteractionLoop`
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Written before each attempt to read the sentence count
    pub count_prompt: String,

    /// Written after a rejected count (non-numeric, zero, negative, empty)
    pub invalid_count_message: String,

    /// Header line written before the case results
    pub results_header: String,
}

impl SessionConfig {
    /// Prompt for the 1-based sentence `index`
    pub fn sentence_prompt(&self, index: usize) -> String {
        format!("Enter sentence #{}: ", index)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            count_prompt: "How many sentences do you want to reverse? ".to_string(),
            invalid_count_message: "Please enter a number greater than zero.".to_string(),
            results_header: "Results:".to_string(),
        }
    }
}
