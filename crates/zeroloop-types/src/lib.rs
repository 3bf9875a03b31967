//! Foundation types for zeroloop.
//!
//! This crate contains the frontend-agnostic core types shared by all
//! zeroloop crates: output lines and renderer sinks, input events,
//! configuration, and error types. The shell core never sees a real
//! terminal; frontends implement [`output::OutputSink`] and translate
//! their native input into [`input::InputEvent`] values.

pub mod config;
pub mod error;
pub mod input;
pub mod output;
