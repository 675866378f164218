//! Plain data row types written by output backends.

use sp_sim::{FrameReport, InteractionEvent};

/// One applied arrival.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionRow {
    pub frame:       u64,
    /// Virtual time, `HH:MM:SS`.
    pub clock:       String,
    pub hour:        u8,
    pub customer_id: String,
    pub shelf_id:    String,
    /// Shelf counter after the increment; `None` for unregistered shelves.
    pub shelf_count: Option<u64>,
}

impl From<&InteractionEvent> for InteractionRow {
    fn from(e: &InteractionEvent) -> Self {
        Self {
            frame:       e.frame.0,
            clock:       e.clock.clone(),
            hour:        e.hour,
            customer_id: e.customer.as_str().to_owned(),
            shelf_id:    e.shelf.as_str().to_owned(),
            shelf_count: e.count,
        }
    }
}

/// Summary statistics for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSummaryRow {
    pub frame:           u64,
    pub clock_secs:      u32,
    pub customers:       u64,
    pub moved:           u64,
    pub interactions:    u64,
    pub removed:         u64,
    /// Customers created by a batch applied this frame.
    pub imported:        Option<u64>,
    pub import_failures: u64,
}

impl From<&FrameReport> for FrameSummaryRow {
    fn from(r: &FrameReport) -> Self {
        Self {
            frame:           r.frame.0,
            clock_secs:      r.clock_secs,
            customers:       r.customers as u64,
            moved:           r.moved as u64,
            interactions:    r.interactions as u64,
            removed:         r.removed as u64,
            imported:        r.imported.map(|n| n as u64),
            import_failures: r.import_failures as u64,
        }
    }
}
