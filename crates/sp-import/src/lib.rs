//! `sp-import` — fetching precomputed visitor batches.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`wire`]     | `SimulationRequest`, `SimulationResponse` and nested DTOs   |
//! | [`request`]  | `build_request` — layout snapshot → request                 |
//! | [`backend`]  | `SimulationBackend` trait, `HttpBackend`, `StaticBackend`   |
//! | [`importer`] | `Importer` — background dispatch on the rayon pool          |
//! | [`loader`]   | `load_batch_json`, `load_batch_reader`                      |
//! | [`error`]    | `ImportError`, `ImportResult<T>`                            |
//!
//! # Flow
//!
//! ```text
//! minute boundary ─▶ build_request ─▶ Importer::dispatch ─▶ backend (rayon)
//!                                                                │
//!   CustomerStore::bulk_replace ◀── Ok(response) ◀── Importer::poll
//! ```
//!
//! Each dispatch is independent: a new request is issued even while an
//! earlier one is still in flight, and responses are applied in the order
//! they resolve.  A failed fetch never touches the customer store.

pub mod backend;
pub mod error;
pub mod importer;
pub mod loader;
pub mod request;
pub mod wire;


pub use backend::{HttpBackend, SimulationBackend, StaticBackend};
pub use error::{ImportError, ImportResult};
pub use importer::{ImportOutcome, Importer};
pub use loader::{load_batch_json, load_batch_reader};
pub use request::build_request;
pub use wire::{
    Events, PositionDto, ShelfDto, SimulationRequest, SimulationResponse, Stats, StoreConfig,
    StoreDimensions, StoreSize, VisitorRecord,
};
