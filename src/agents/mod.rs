//! Declarative agent records: specs, capabilities, catalog, prompt text.
//!
//! Everything here is static data with no runtime behavior. The reasoning
//! core only reads from it (e.g. to check that a suggested role names a
//! real agent); it never mutates it.

mod capabilities;
mod catalog;
pub mod prompts;
mod spec;

pub use capabilities::AgentCapabilities;
pub use catalog::{builtin_catalog, AgentCatalog};
pub use spec::AgentSpec;
