//! Shared test utilities for the gobuild workspace.
//!
//! This crate is a dev-dependency only and is never published.
//!
//! # Modules
//!
//! - [`project`]: [`TestProject`] builder for Go project layouts on disk
//! - [`fakes`]: recording doubles for the resolver's collaborators

pub mod fakes;
pub mod project;

pub use fakes::{FakeConfigSource, FakeTargetManager, TargetCall, env_of};
pub use project::TestProject;
