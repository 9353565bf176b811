// Interaction loop - count prompt, sentence collection, batch report

use std::fmt;

use log::{debug, info, warn};

use super::parser::parse_count;
use super::{Console, CountInput};
use crate::engine::{SessionConfig, SessionError, WordReverser};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingCount,
    Collecting,
    Reporting,
    Done,
}

/// One reversed sentence labeled with its 1-based position
#[derive(Debug, Clone, PartialEq)]
pub struct CaseResult {
    pub index: usize,
    pub reversed: String,
}

impl fmt::Display for CaseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Case {}: {}", self.index, self.reversed)
    }
}

pub struct InteractionLoop<'a, C: Console, R: WordReverser> {
    console: &'a mut C,
    reverser: R,
    config: SessionConfig,
    phase: Phase,
}

impl<'a, C: Console, R: WordReverser> InteractionLoop<'a, C, R> {
    pub fn new(console: &'a mut C, reverser: R, config: SessionConfig) -> Self {
        Self {
            console,
            reverser,
            config,
            phase: Phase::AwaitingCount,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Runs one session to completion. Results are written only after every
    /// sentence has been collected.
    pub fn execute(&mut self) -> Result<(), SessionError> {
        let count = self.prompt_for_count()?;

        self.enter(Phase::Collecting);
        let sentences = self.collect_sentences(count)?;
        info!("collected {} sentence(s)", sentences.len());

        self.enter(Phase::Reporting);
        self.report(&sentences)?;

        self.enter(Phase::Done);
        Ok(())
    }

    fn enter(&mut self, phase: Phase) {
        debug!("session phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    fn prompt_for_count(&mut self) -> Result<usize, SessionError> {
        loop {
            self.console.write(&self.config.count_prompt)?;
            let reply = self.console.read_line()?;

            match parse_count(&reply) {
                CountInput::Count(count) => return Ok(count.get()),
                CountInput::Invalid(rejected) => {
                    if self.console.is_exhausted() {
                        warn!("input closed while waiting for a sentence count");
                        return Err(SessionError::InputClosed);
                    }
                    debug!("rejected count input {:?}", rejected);
                    self.console.write_line(&self.config.invalid_count_message)?;
                }
            }
        }
    }

    fn collect_sentences(&mut self, count: usize) -> Result<Vec<String>, SessionError> {
        // Grows with input; count is user supplied and may be huge
        let mut sentences = Vec::new();
        for index in 1..=count {
            self.console.write(&self.config.sentence_prompt(index))?;
            sentences.push(self.console.read_line()?);
        }
        Ok(sentences)
    }

    fn report(&mut self, sentences: &[String]) -> Result<(), SessionError> {
        self.console.write_line("")?;
        self.console.write_line(&self.config.results_header)?;

        for (position, sentence) in sentences.iter().enumerate() {
            let case = CaseResult {
                index: position + 1,
                reversed: self.reverser.reverse(Some(sentence.as_str()))?,
            };
            self.console.write_line(&case.to_string())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{ReverseError, SpaceSeparatedReverser};
    use crate::repl::ScriptedConsole;
    use std::io;

    fn run(input: &[&str]) -> (Result<(), SessionError>, ScriptedConsole) {
        let mut console = ScriptedConsole::with_input(input.iter().copied());
        let result = InteractionLoop::new(
            &mut console,
            SpaceSeparatedReverser,
            SessionConfig::default(),
        )
        .execute();
        (result, console)
    }

    struct RejectingReverser;

    impl WordReverser for RejectingReverser {
        fn reverse(&self, _sentence: Option<&str>) -> Result<String, ReverseError> {
            Err(ReverseError::MissingSentence)
        }
    }

    /// Answers the count prompt, then fails every later read
    struct FailsAfterCount {
        inner: ScriptedConsole,
        reads: usize,
    }

    impl Console for FailsAfterCount {
        fn write(&mut self, text: &str) -> io::Result<()> {
            self.inner.write(text)
        }

        fn write_line(&mut self, text: &str) -> io::Result<()> {
            self.inner.write_line(text)
        }

        fn read_line(&mut self) -> io::Result<String> {
            self.reads += 1;
            if self.reads > 1 {
                return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stream closed"));
            }
            self.inner.read_line()
        }
    }

    #[test]
    fn test_largest_count_prompts_without_preallocating() {
        let mut console = FailsAfterCount {
            inner: ScriptedConsole::with_input(["2147483647"]),
            reads: 0,
        };
        let result =
            InteractionLoop::new(&mut console, SpaceSeparatedReverser, SessionConfig::default())
                .execute();

        assert!(matches!(result, Err(SessionError::Io(_))));
        assert_eq!(
            console.inner.output_lines(),
            vec![
                "How many sentences do you want to reverse? ",
                "Enter sentence #1: ",
            ]
        );
    }

    #[test]
    fn test_case_result_display() {
        let case = CaseResult {
            index: 4,
            reversed: "b a".to_string(),
        };
        assert_eq!(case.to_string(), "Case 4: b a");
    }

    #[test]
    fn test_full_flow() {
        let (result, console) = run(&["2", "hello world", "all your base"]);
        assert!(result.is_ok());
        assert_eq!(
            console.output_lines(),
            vec![
                "How many sentences do you want to reverse? ",
                "Enter sentence #1: ",
                "Enter sentence #2: ",
                "",
                "Results:",
                "Case 1: world hello",
                "Case 2: base your all",
            ]
        );
    }

    #[test]
    fn test_phase_reaches_done() {
        let mut console = ScriptedConsole::with_input(["1", "x"]);
        let mut session =
            InteractionLoop::new(&mut console, SpaceSeparatedReverser, SessionConfig::default());
        assert_eq!(session.phase(), Phase::AwaitingCount);
        session.execute().unwrap();
        assert_eq!(session.phase(), Phase::Done);
    }

    #[test]
    fn test_invalid_count_reprompts() {
        let (result, console) = run(&["", "-1", "1", "solo"]);
        assert!(result.is_ok());
        let lines = console.output_lines();
        assert_eq!(
            lines[..5],
            [
                "How many sentences do you want to reverse? ",
                "Please enter a number greater than zero.",
                "How many sentences do you want to reverse? ",
                "Please enter a number greater than zero.",
                "How many sentences do you want to reverse? ",
            ]
        );
        assert_eq!(lines.last(), Some(&"Case 1: solo"));
    }

    #[test]
    fn test_input_closed_before_count() {
        let (result, console) = run(&["nope"]);
        assert!(matches!(result, Err(SessionError::InputClosed)));
        // No results are written on failure
        assert!(!console.output_lines().contains(&"Results:"));
    }

    #[test]
    fn test_missing_sentences_at_end_of_input_are_empty() {
        let (result, console) = run(&["2", "only one"]);
        assert!(result.is_ok());
        let lines = console.output_lines();
        assert_eq!(lines[lines.len() - 2..], ["Case 1: one only", "Case 2: "]);
    }

    #[test]
    fn test_reverser_error_propagates() {
        let mut console = ScriptedConsole::with_input(["1", "a b"]);
        let result =
            InteractionLoop::new(&mut console, RejectingReverser, SessionConfig::default())
                .execute();
        assert!(matches!(
            result,
            Err(SessionError::Reverse(ReverseError::MissingSentence))
        ));
    }

    #[test]
    fn test_custom_config_texts() {
        let config = SessionConfig {
            count_prompt: "N? ".to_string(),
            invalid_count_message: "bad".to_string(),
            results_header: "Out:".to_string(),
        };
        let mut console = ScriptedConsole::with_input(["x", "1", "p q"]);
        InteractionLoop::new(&mut console, SpaceSeparatedReverser, config)
            .execute()
            .unwrap();
        assert_eq!(
            console.output_lines(),
            vec!["N? ", "bad", "N? ", "Enter sentence #1: ", "", "Out:", "Case 1: q p"]
        );
    }
}
