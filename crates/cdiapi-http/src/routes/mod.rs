//! Route handlers, one module per endpoint family.

pub mod catalog;
pub mod index;
pub mod raw;
