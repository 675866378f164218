//! `sp-behavior` — where customers decide to go next.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`command`]  | `Command`, `RemovalReason` — mutations requested for one customer |
//! | [`context`]  | `FrameContext<'a>` — read-only frame snapshot shared by all customers |
//! | [`policy`]   | `TargetPolicy` trait, `ArrivalDecision`, `pick_uniform`         |
//! | [`variants`] | `CheckoutAwarePolicy`, `UniformPolicy`, `AnyPolicy`             |
//! | [`error`]    | `BehaviorError`, `BehaviorResult<T>`                            |
//!
//! # Design notes
//!
//! The frame loop in sp-sim works in two phases:
//!
//! 1. **Decide phase**: the movement engine walks every customer and, through
//!    the policy, produces a `Vec<Command>` per customer.  All reads go
//!    through `&FrameContext`; nothing is mutated.
//!
//! 2. **Apply phase** (sequential): sp-sim consumes the commands and mutates
//!    `CustomerStore`, `ShelfRegistry` and the interaction recorder.
//!
//! Policies hold no per-customer state, so one value serves every customer
//! and `TargetPolicy` only needs to be `Send + Sync`.

pub mod command;
pub mod context;
pub mod error;
pub mod policy;
pub mod variants;


pub use command::{Command, RemovalReason};
pub use context::FrameContext;
pub use error::{BehaviorError, BehaviorResult};
pub use policy::{ArrivalDecision, TargetPolicy, pick_uniform};
pub use variants::{AnyPolicy, CheckoutAwarePolicy, UniformPolicy};
