//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod claims;
pub mod integrate;
pub mod price;
