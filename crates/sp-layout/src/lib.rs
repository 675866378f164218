//! `sp-layout` — the store the customers walk through.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`shelf`]    | `Shelf`, `ShelfKind`, `ProductCategory`, `ShelfSize`       |
//! | [`registry`] | `ShelfRegistry` (insertion-ordered, id-indexed)            |
//! | [`store`]    | `StoreLayout`, `Footprint`, perimeter spawn points         |
//! | [`error`]    | `LayoutError`, `LayoutResult<T>`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.  Shelf    |
//! |         | kinds and sizes use their lower-case names on the wire.      |

pub mod error;
pub mod registry;
pub mod shelf;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::{LayoutError, LayoutResult};
pub use registry::ShelfRegistry;
pub use shelf::{ProductCategory, Shelf, ShelfKind, ShelfSize};
pub use store::{Footprint, StoreLayout};
