//! Simulation observer trait for progress reporting and data collection.

use sp_behavior::RemovalReason;
use sp_core::{CustomerId, Frame, ShelfId, VirtualClock};
use sp_import::{ImportError, SimulationResponse};

/// One applied arrival.
#[derive(Clone, Debug, PartialEq)]
pub struct InteractionEvent {
    pub frame:    Frame,
    pub customer: CustomerId,
    pub shelf:    ShelfId,
    /// Virtual hour the arrival was bucketed under.
    pub hour:     u8,
    /// Virtual time, `HH:MM:SS`.
    pub clock:    String,
    /// The shelf's counter after the increment; `None` when the shelf is
    /// not in the registry.
    pub count:    Option<u64>,
}

/// What one frame did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameReport {
    pub frame:           Frame,
    /// Virtual seconds since midnight at frame end.
    pub clock_secs:      u32,
    /// Customers alive at frame end.
    pub customers:       usize,
    pub moved:           usize,
    pub interactions:    usize,
    pub removed:         usize,
    /// Customers created by a batch applied this frame.
    pub imported:        Option<usize>,
    pub import_failures: usize,
    /// A fetch was dispatched on a virtual minute boundary.
    pub dispatched:      bool,
}

/// Callbacks invoked by [`Sim::step_frame`][crate::Sim::step_frame] at key
/// points in the frame loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — checkout counter
///
/// ```rust,ignore
/// struct Checkouts(usize);
///
/// impl SimObserver for Checkouts {
///     fn on_customer_removed(&mut self, _f: Frame, _id: &CustomerId, why: RemovalReason) {
///         if why == RemovalReason::CheckedOut {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each frame, before imports are drained.
    fn on_frame_start(&mut self, _frame: Frame, _clock: &VirtualClock) {}

    /// Called once per applied `Interact` command.
    fn on_interaction(&mut self, _event: &InteractionEvent) {}

    fn on_customer_removed(&mut self, _frame: Frame, _customer: &CustomerId, _reason: RemovalReason) {}

    /// A batch replaced the customer store.  `created` is how many
    /// customers it produced after capping and filtering.
    fn on_batch_imported(&mut self, _frame: Frame, _response: &SimulationResponse, _created: usize) {}

    /// A fetch failed; the customer store was left untouched.
    fn on_import_failed(&mut self, _frame: Frame, _error: &ImportError) {}

    fn on_frame_end(&mut self, _report: &FrameReport) {}

    /// Called once by [`Sim::finish`][crate::Sim::finish].
    fn on_sim_end(&mut self, _final_frame: Frame) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
