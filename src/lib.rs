//! Core library for the scicalc interactive calculator: four scalar
//! operations and the menu dispatcher that drives them over a line-based
//! console.

pub mod console;
pub mod diagnostics;
pub mod menu;
pub mod ops;
pub mod repl;
pub mod scan;
pub mod value;

pub use console::{Console, PipeConsole, ReadlineConsole};
pub use diagnostics::{CalcError, Result};
pub use repl::Session;
pub use value::Outcome;
