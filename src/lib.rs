pub mod engine;
pub mod repl;
