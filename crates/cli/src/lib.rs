//! `ordertrack-cli`
//!
//! **Responsibility:** the interactive menu shell around the order manager.
//!
//! The shell only reads input, calls `OrderManager`, and renders results; all
//! order rules live in the domain and infra crates.

pub mod prompt;
pub mod shell;

pub use prompt::Prompter;
pub use shell::Shell;
