//! Shared test utilities for the tilesync workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only — never published.
//!
//! # Modules
//!
//! - [`doc`] — in-memory implementations of the host document traits
//! - [`project`] — [`TestProject`](project::TestProject) builder writing a
//!   real engine-project tree to a temp directory

pub mod doc;
pub mod project;
