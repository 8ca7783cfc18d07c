//! Scripted derivations over the deduce kernel.
//!
//! The kernel itself lives in `deduce-core` (data model) and `deduce-rules`
//! (inference rules). This crate adds a line-oriented script format for
//! recording derivations, a built-in demo derivation, and the `deduce` CLI.

pub mod demo;
pub mod listing;
pub mod script;

pub use script::{Instruction, ScriptError};
