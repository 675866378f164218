//! `sp-mobility` — the per-frame movement engine.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`state`]   | `MovementMode` — which rule set a customer follows this frame      |
//! | [`engine`]  | `MovementEngine<P>` — turns a `FrameContext` into commands         |
//!
//! # Movement model
//!
//! Customers walk in straight lines and ignore obstacles and each other.
//! Every frame the engine classifies each customer:
//!
//! 1. **Scripted** — plays back an imported waypoint list at a fixed speed.
//!    Reaching a waypoint records the shelf visited on that segment.  A
//!    finished route that ends where it began removes the customer;
//!    otherwise it stays parked on the last waypoint.
//! 2. **Targeted** — walks toward its target shelf's current position at
//!    `speed * dt`.  Within the arrival radius it interacts with the shelf
//!    and the [`TargetPolicy`][sp_behavior::TargetPolicy] decides what next.
//! 3. **Wandering** — stands still; the policy may hand it a target.
//!
//! After any of these, a customer whose resulting position lies outside the
//! floor bound is removed.
//!
//! The engine only reads.  It returns a command list per customer that
//! sp-sim applies once every customer has been planned.

pub mod engine;
pub mod state;


pub use engine::{FramePlan, MovementEngine};
pub use state::MovementMode;
