//! CLI command implementations.

pub mod apply;
pub mod inspect;
pub mod list;
pub mod names;
