//! Console interaction module
//!
//! Prompts for a sentence count, collects sentences and writes the reversed
//! results through an injected console.
//!
//! ## Module Structure
//!
//! - **console.rs**: `Console` trait and the standard-stream implementation
//! - **scripted.rs**: In-memory console that replays input and records output
//! - **command.rs**: Parsed count reply
//! - **parser.rs**: Count parsing and validation
//! - **session.rs**: `InteractionLoop` state machine and case formatting
//!
//! ## Usage in main.rs
//!
//! ```rust,ignore
//! use wordflip::engine::{SessionConfig, SpaceSeparatedReverser};
//! use wordflip::repl::{InteractionLoop, StdConsole};
//!
//! let mut console = StdConsole::stdio();
//! InteractionLoop::new(&mut console, SpaceSeparatedReverser, SessionConfig::default())
//!     .execute()?;
//! ```

pub mod command;
pub mod console;
pub mod parser;
pub mod scripted;
pub mod session;

// Re-export public types
pub use command::CountInput;
pub use console::{Console, StdConsole};
pub use parser::parse_count;
pub use scripted::{Output, ScriptedConsole};
pub use session::{CaseResult, InteractionLoop, Phase};
