//! Live adapters backed by the local machine.

pub mod clock;
pub mod filesystem;
