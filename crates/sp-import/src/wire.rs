//! Simulation request/response wire contract.
//!
//! The request is camelCase, the response snake_case; both mirror the
//! backend's JSON exactly.  Only `visitors` feeds the engine.  Heatmap,
//! events and stats are carried through for the analytics layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use sp_agent::ScriptedVisitor;
use sp_core::{CustomerId, FloorPoint, ShelfId};

// ── Request ───────────────────────────────────────────────────────────────────

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct PositionDto {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<FloorPoint> for PositionDto {
    fn from(p: FloorPoint) -> Self {
        Self { x: p.x, y: p.y, z: p.z }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct StoreSize {
    pub width: f32,
    pub length: f32,
    pub height: f32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ShelfDto {
    pub id: String,
    pub position: PositionDto,
    pub rotation: f32,
    pub interactions: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    pub store_size: StoreSize,
    pub shelves: Vec<ShelfDto>,
    pub entrance: PositionDto,
    pub cash_desks: Vec<PositionDto>,
    /// RFC 3339 timestamp of when the snapshot was taken.
    pub created_at: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    pub config: StoreConfig,
    /// Virtual clock time, `HH:MM`.
    pub time_of_day: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shelf_discounts: Option<BTreeMap<String, f32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefers_discounts: Option<bool>,
}

impl SimulationRequest {
    pub fn with_promotions(mut self, promotions: Vec<String>) -> Self {
        self.promotions = Some(promotions);
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = Some(categories);
        self
    }

    pub fn prefers_discounts(mut self, yes: bool) -> Self {
        self.prefers_discounts = Some(yes);
        self
    }
}

// ── Response ──────────────────────────────────────────────────────────────────

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct VisitorRecord {
    pub id: u64,
    #[serde(default)]
    pub preferences: Vec<String>,
    /// `[x, z]` waypoints.
    pub path: Vec<[f32; 2]>,
    #[serde(default)]
    pub queue_time: f64,
    #[serde(default)]
    pub visited_shelves: Vec<String>,
    #[serde(default)]
    pub final_position: Option<[f32; 2]>,
}

impl VisitorRecord {
    /// Lift onto the floor.  The numeric id becomes a decimal string id.
    pub fn to_scripted(&self) -> ScriptedVisitor {
        ScriptedVisitor {
            id: CustomerId::new(self.id.to_string()),
            path: self.path.iter().copied().map(FloorPoint::from_xz).collect(),
            visited_shelves: self.visited_shelves.iter().map(|s| ShelfId::new(s.as_str())).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct Events {
    pub broken_cash_desk: bool,
    pub promotions: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct Stats {
    pub total_visitors: u64,
    pub avg_queue_time: f64,
    pub max_queue_length: u64,
    pub time_of_day: String,
    pub calculated_visitors: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash_desk_queues: Option<BTreeMap<String, u64>>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct StoreDimensions {
    pub width: f32,
    pub length: f32,
    pub grid_size: f32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SimulationResponse {
    pub visitors: Vec<VisitorRecord>,
    #[serde(default)]
    pub heatmap: Vec<Vec<f64>>,
    #[serde(default)]
    pub events: Events,
    #[serde(default)]
    pub stats: Stats,
    #[serde(default)]
    pub store_dimensions: Option<StoreDimensions>,
}

impl SimulationResponse {
    /// Every visitor, in batch order, ready for `CustomerStore::bulk_replace`.
    pub fn scripted_visitors(&self) -> Vec<ScriptedVisitor> {
        self.visitors.iter().map(VisitorRecord::to_scripted).collect()
    }
}
