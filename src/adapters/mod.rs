//! Adapter implementations for port traits.
//!
//! - `live/` — Filesystem and system clock implementations

pub mod live;
