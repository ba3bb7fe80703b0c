//! Command implementations.
//!
//! livepack has a single command, [`build`], run on every invocation.

pub mod build;

pub use build::execute as build_execute;
