//! Layout snapshot → simulation request.

use std::collections::BTreeMap;

use chrono::{SecondsFormat, Utc};

use sp_layout::StoreLayout;

use crate::wire::{PositionDto, ShelfDto, SimulationRequest, StoreConfig, StoreSize};

/// Snapshot `layout` into a request for virtual time `time_of_day`
/// (`HH:MM`).
///
/// Walls are sent like any other fixture; checkouts are additionally listed
/// as cash desks.  Shelves carrying a discount are collected into
/// `shelfDiscounts`.
pub fn build_request(layout: &StoreLayout, time_of_day: impl Into<String>) -> SimulationRequest {
    let shelves = layout
        .shelves
        .iter()
        .map(|s| ShelfDto {
            id:           s.id.as_str().to_owned(),
            position:     s.position.into(),
            rotation:     s.rotation,
            interactions: s.interaction_count,
            discount:     s.discount,
        })
        .collect();

    let discounts: BTreeMap<String, f32> = layout
        .shelves
        .iter()
        .filter_map(|s| s.discount.map(|d| (s.id.as_str().to_owned(), d)))
        .collect();

    let fp = layout.footprint;
    SimulationRequest {
        config: StoreConfig {
            store_size: StoreSize { width: fp.width, length: fp.length, height: fp.height },
            shelves,
            entrance:   layout.entrance.into(),
            cash_desks: layout.shelves.checkout_positions().into_iter().map(PositionDto::from).collect(),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        },
        time_of_day:       time_of_day.into(),
        promotions:        None,
        categories:        None,
        shelf_discounts:   (!discounts.is_empty()).then_some(discounts),
        prefers_discounts: None,
    }
}
