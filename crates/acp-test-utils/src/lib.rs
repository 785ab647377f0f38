//! Shared test utilities for the agent-manifest workspace.
//!
//! Standardised fixtures for crate test suites, so each suite does not
//! have to assemble its own manifest documents. Dev-dependency only,
//! never published.
//!
//! # Modules
//!
//! - [`fixture`] provides the [`ManifestFixture`] document builder and the
//!   [`ManifestDir`] temporary directory helper

pub mod fixture;

pub use fixture::{ManifestDir, ManifestFixture};
