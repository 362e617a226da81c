//! Prints every prime up to a bound `N` (2 ≤ N ≤ 1 000 000 000).
//!
//! ```text
//! argument → bound::resolve → engine::sieve → emit::emit → stdout
//! ```
//!
//! Every failure is an [`error::Error`], reported once by the binary with a
//! fixed message and exit code.

pub mod bound;
pub mod cli;
pub mod emit;
pub mod engine;
pub mod error;
pub mod profiler;
pub mod verify;

pub use bound::resolve;
pub use emit::emit;
pub use engine::sieve;
pub use error::{Error, ParseFailure};
