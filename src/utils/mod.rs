//! Utility modules.

pub mod mime;
mod plural;

pub use plural::plural_count;
