//! The TOML scenario file: engine tunables, store footprint and shelves.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use sp_behavior::AnyPolicy;
use sp_core::{EngineConfig, FloorPoint, ShelfId};
use sp_layout::{Footprint, Shelf, ShelfKind, ShelfRegistry, ShelfSize, StoreLayout};

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub policy:     String,
    pub frames:     u64,
    pub dt:         f32,
    /// Manual customers spawned on the perimeter before the first frame.
    pub customers:  usize,
    pub output_dir: PathBuf,
    /// Saved simulation response replayed on every minute boundary.
    pub batch:      Option<PathBuf>,
    /// Base URL of a live simulation backend.
    pub backend:    Option<String>,
    pub engine:     EngineConfig,
    pub store:      Footprint,
    pub shelves:    Vec<ShelfSpec>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            policy:     "checkout_aware".into(),
            frames:     600,
            dt:         1.0 / 60.0,
            customers:  8,
            output_dir: PathBuf::from("output/walkthrough"),
            batch:      None,
            backend:    None,
            engine:     EngineConfig::default(),
            store:      Footprint::default(),
            shelves:    Vec::new(),
        }
    }
}

/// One `[[shelves]]` entry.  Omitting `id` generates one.
#[derive(Debug, Deserialize)]
pub struct ShelfSpec {
    pub id:       Option<String>,
    pub kind:     ShelfKind,
    #[serde(default)]
    pub size:     ShelfSize,
    pub x:        f32,
    pub z:        f32,
    #[serde(default)]
    pub rotation: f32,
    pub discount: Option<f32>,
}

impl Scenario {
    pub fn parse(text: &str) -> Result<Self> {
        let scenario: Scenario = toml::from_str(text).context("parsing scenario")?;
        scenario.engine.validate()?;
        Ok(scenario)
    }

    pub fn policy(&self) -> Result<AnyPolicy> {
        Ok(self.policy.parse::<AnyPolicy>()?)
    }

    pub fn layout(&self) -> Result<StoreLayout> {
        let shelves = self.shelves.iter().map(|spec| {
            let id = spec.id.clone().map(ShelfId::new).unwrap_or_else(ShelfId::generate);
            let mut shelf = Shelf::new(id, spec.kind, FloorPoint::on_floor(spec.x, spec.z))
                .with_size(spec.size);
            shelf.rotation = spec.rotation;
            shelf.discount = spec.discount;
            shelf
        });
        let registry = ShelfRegistry::from_shelves(shelves).context("building shelf registry")?;
        Ok(StoreLayout::new(self.store, registry))
    }
}
