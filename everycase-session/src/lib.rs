//! # everycase-session
//!
//! Binds one manifest to the combination engine and the renderer.
//!
//! Build an [`EveryCase`] from a parsed [`Manifest`](everycase_core::Manifest)
//! or let [`EveryCase::load`] resolve one from disk, then query tags,
//! attributes and combinations.

pub mod error;
pub mod session;

pub use error::SessionError;
pub use session::{EveryCase, TagCombinations};
