//! A tiny, embeddable classroom administration command runner.
//!
//! This crate provides a minimal set of building blocks to manage classrooms,
//! student enrollment, scheduled assignments, and submissions, entirely in
//! memory for the lifetime of a single process. It is intentionally small and
//! easy to read, suitable for coursework and experiments with command
//! dispatch and state management.
//!
//! The main entry points are [`ClassroomManager`], which owns all state and
//! exposes the administration operations, and [`Interpreter`], which
//! tokenizes line-oriented text commands and dispatches each one to the
//! manager. The public modules [`command`] and [`session`] expose the traits
//! and types used to implement and execute commands.

mod builtin;
pub mod command;
mod interpreter;
pub mod manager;
pub mod session;

/// Convenient re-export of the line-oriented command runner.
///
/// See [`Interpreter`] for the high-level API and examples.
pub use interpreter::Interpreter;

/// Convenient re-export of the in-memory classroom registry.
///
/// See [`ClassroomManager`] for the administration operations.
pub use manager::ClassroomManager;
