//! Per-customer movement classification.

use sp_agent::Customer;

/// The rule set a customer follows in the current frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MovementMode {
    /// Following an imported route whose cursor has not run off the end.
    Scripted,
    /// Imported route finished; no more motion.
    RouteComplete,
    /// Walking toward `target_shelf`.
    Targeted,
    /// No target and no route.
    Wandering,
}

impl MovementMode {
    pub fn of(customer: &Customer) -> MovementMode {
        match (&customer.route, &customer.target_shelf) {
            (Some(route), _) if route.is_complete() => MovementMode::RouteComplete,
            (Some(_), _) => MovementMode::Scripted,
            (None, Some(_)) => MovementMode::Targeted,
            (None, None) => MovementMode::Wandering,
        }
    }
}
