//! Shared test utilities for the cdiapi integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top
//! of each harness file. The fakes here implement the store adapter traits
//! in memory so the harnesses can drive the real router without a MongoDB
//! or Meilisearch instance.

pub mod fake_meili;
pub mod fixtures;

pub use builders::*;
pub use fakes::*;
pub use fixtures::*;
