//! `sp-sim` — frame loop orchestrator for the store_planner crowd engine.
//!
//! # Frame loop
//!
//! ```text
//! for each rendered frame (dt real seconds):
//!   ① Imports  — drain resolved fetches; Ok → CustomerStore::bulk_replace,
//!                Err → store untouched, observer notified.
//!   ② Clock    — VirtualClock::advance_real(dt); on a minute boundary
//!                dispatch build_request(layout, HH:MM) to the importer.
//!   ③ Decide   — MovementEngine::plan_frame over a read-only FrameContext.
//!   ④ Apply    — per customer, in store order:
//!                  Move       → update_position
//!                  SetTarget  → set_target
//!                  Interact   → registry counter, recorder, observer
//!                  Remove     → remove; skip the rest of the list
//!   ⑤ Animate  — advance every walk cycle by dt.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sp_behavior::CheckoutAwarePolicy;
//! use sp_core::EngineConfig;
//! use sp_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(EngineConfig::default(), layout, CheckoutAwarePolicy)
//!     .build()?;
//! sim.spawn_customer(None)?;
//! sim.run_frames(600, 1.0 / 60.0, &mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod recorder;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{FrameReport, InteractionEvent, NoopObserver, SimObserver};
pub use recorder::{InteractionRecorder, InteractionTally, ShelfTally};
pub use sim::Sim;
