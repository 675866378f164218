//! `sp-core` — foundational types for the `store_planner` crowd engine.
//!
//! This crate is a dependency of every other `sp-*` crate.  It intentionally
//! has no `sp-*` dependencies and minimal external ones (`rand`, `thiserror`,
//! `uuid`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ShelfId`, `CustomerId`                               |
//! | [`geo`]         | `FloorPoint`, planar distance / direction helpers     |
//! | [`time`]        | `Frame`, `VirtualClock`, `ClockAdvance`               |
//! | [`rng`]         | `RandomSource` trait, `SimRng`, `SequenceRng`         |
//! | [`config`]      | `EngineConfig`, `SpeedBand`, `ClockConfig`            |
//! | [`error`]       | `SpError`, `SpResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ClockConfig, EngineConfig, SpeedBand};
pub use error::{SpError, SpResult};
pub use geo::FloorPoint;
pub use ids::{CustomerId, ShelfId};
pub use rng::{RandomSource, SequenceRng, SimRng};
pub use time::{ClockAdvance, Frame, VirtualClock};
