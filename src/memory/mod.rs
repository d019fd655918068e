//! Memory contracts and their usage-policy gate.
//!
//! Contracts are static declarative records; the usage policy is the only
//! behavior here and it is a pure yes/no gate. Nothing in this module
//! stores or retrieves actual memories.

mod contracts;
mod usage;

pub use contracts::{MemoryContract, MemoryKind, MemoryScope};
pub use usage::{MemoryUsageMode, MemoryUsagePolicy};
