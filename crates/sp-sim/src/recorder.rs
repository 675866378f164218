//! Interaction recording for the analytics layer.

use rustc_hash::FxHashMap;

use sp_core::ShelfId;
use sp_import::Stats;

/// Receives every arrival the frame loop applies.
///
/// Calls are not de-duplicated: two arrivals at the same shelf in one frame
/// are two records.
pub trait InteractionRecorder {
    /// One shelf touch at virtual hour `hour` (`0..24`).
    fn record_interaction(&mut self, shelf: &ShelfId, hour: u8);

    /// Summary block of the most recently imported batch.
    fn record_stats(&mut self, _stats: &Stats) {}
}

/// Per-shelf counters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShelfTally {
    pub total:  u64,
    pub hourly: [u64; 24],
}

/// Default recorder: per-shelf totals plus a 24-bucket hourly histogram.
#[derive(Clone, Debug, Default)]
pub struct InteractionTally {
    shelves:      FxHashMap<ShelfId, ShelfTally>,
    latest_stats: Option<Stats>,
}

impl InteractionTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shelf(&self, id: &str) -> Option<&ShelfTally> {
        self.shelves.get(id)
    }

    /// Total for `id`, zero for a shelf never touched.
    pub fn total_for(&self, id: &str) -> u64 {
        self.shelves.get(id).map_or(0, |t| t.total)
    }

    /// Interactions across every shelf.
    pub fn total(&self) -> u64 {
        self.shelves.values().map(|t| t.total).sum()
    }

    /// Histogram summed over every shelf.
    pub fn hourly_totals(&self) -> [u64; 24] {
        let mut out = [0u64; 24];
        for tally in self.shelves.values() {
            for (slot, n) in out.iter_mut().zip(tally.hourly) {
                *slot += n;
            }
        }
        out
    }

    /// `(shelf, total)` pairs, busiest first; ties broken by id.
    pub fn ranking(&self) -> Vec<(&ShelfId, u64)> {
        let mut v: Vec<_> = self.shelves.iter().map(|(id, t)| (id, t.total)).collect();
        v.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.as_str().cmp(b.0.as_str())));
        v
    }

    pub fn latest_stats(&self) -> Option<&Stats> {
        self.latest_stats.as_ref()
    }

    pub fn reset(&mut self) {
        self.shelves.clear();
        self.latest_stats = None;
    }
}

impl InteractionRecorder for InteractionTally {
    fn record_interaction(&mut self, shelf: &ShelfId, hour: u8) {
        let tally = self.shelves.entry(shelf.clone()).or_default();
        tally.total += 1;
        tally.hourly[usize::from(hour) % 24] += 1;
    }

    fn record_stats(&mut self, stats: &Stats) {
        self.latest_stats = Some(stats.clone());
    }
}
