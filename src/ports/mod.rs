//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the banner core and the outside
//! world. Implementations live in `src/adapters/`.

pub mod banner_store;
pub mod clock;

pub use banner_store::BannerStore;
pub use clock::Clock;
