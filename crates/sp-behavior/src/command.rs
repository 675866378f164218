//! Commands — the mutations the engine requests for one customer.

use std::fmt;

use sp_core::{FloorPoint, ShelfId};

/// Why a customer left the store.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RemovalReason {
    /// Walked past the floor bound.
    OutOfBounds,
    /// Scripted route ended back at its starting point.
    ReturnedToEntrance,
    /// Reached a checkout.
    CheckedOut,
    /// Removed by the host application.
    Explicit,
}

impl RemovalReason {
    pub fn as_str(self) -> &'static str {
        match self {
            RemovalReason::OutOfBounds => "out_of_bounds",
            RemovalReason::ReturnedToEntrance => "returned_to_entrance",
            RemovalReason::CheckedOut => "checked_out",
            RemovalReason::Explicit => "explicit",
        }
    }
}

impl fmt::Display for RemovalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One mutation of one customer, produced in the decide phase and applied
/// in order by the frame loop.
///
/// A customer's commands for a frame are applied as a unit: once a `Remove`
/// has been applied, the rest of that customer's list is skipped.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Write the customer's position (and scripted route cursor).
    Move {
        position:   FloorPoint,
        path_index: Option<usize>,
    },

    /// Retarget.  `shelf: None` returns the customer to wandering.
    SetTarget {
        shelf:    Option<ShelfId>,
        position: Option<FloorPoint>,
    },

    /// An arrival at `shelf`: bump its counter and notify the recorder.
    Interact { shelf: ShelfId },

    /// Take the customer out of the store.
    Remove(RemovalReason),
}
