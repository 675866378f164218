//! `sp-agent` — customer storage for the `store_planner` crowd engine.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`customer`]    | `Customer`, `ScriptedRoute`, `ScriptedVisitor`            |
//! | [`animation`]   | `WalkCycle` (per-customer leg-swing state)                |
//! | [`store`]       | `CustomerStore` (insertion-ordered, id-indexed)           |
//! | [`builder`]     | `CustomerBuilder` (fluent construction)                   |
//!
//! Unknown ids are reported as `sp_core::SpError::CustomerNotFound`; the
//! crate has no error type of its own.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `serde`    | Derives `Serialize`/`Deserialize` on all public types.     |

pub mod animation;
pub mod builder;
pub mod customer;
pub mod store;

#[cfg(test)]
mod tests;

pub use animation::WalkCycle;
pub use builder::CustomerBuilder;
pub use customer::{Customer, ScriptedRoute, ScriptedVisitor};
pub use store::CustomerStore;
