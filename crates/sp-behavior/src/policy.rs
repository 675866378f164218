//! The `TargetPolicy` trait — which shelf a customer heads for next.

use sp_agent::Customer;
use sp_core::{FloorPoint, RandomSource, ShelfId};
use sp_layout::{Shelf, ShelfRegistry};

use crate::FrameContext;

/// What happens to a customer right after an arrival has been recorded.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrivalDecision {
    /// Drop the target and go back to wandering.
    Clear,
    /// Head for another shelf.
    Retarget { shelf: ShelfId, position: FloorPoint },
    /// Shopping is over; remove the customer.
    Checkout,
}

/// Pluggable target selection.
///
/// Policies never coordinate between customers: several customers may pick
/// the same shelf in the same frame.
///
/// # Randomness
///
/// Every draw goes through `rng` so a seeded or scripted source reproduces
/// a decision exactly.  Implementations document their draw order.
pub trait TargetPolicy: Send + Sync + 'static {
    /// Called every frame for a wandering customer.  Return a shelf to start
    /// heading for, or `None` to keep wandering.
    fn choose_wander_target<'s>(
        &self,
        customer: &Customer,
        ctx:      &FrameContext<'s>,
        rng:      &mut dyn RandomSource,
    ) -> Option<&'s Shelf>;

    /// Called once when `customer` arrives at `shelf`, after the interaction
    /// has been emitted.
    fn decide_arrival(
        &self,
        customer: &Customer,
        shelf:    &Shelf,
        ctx:      &FrameContext<'_>,
        rng:      &mut dyn RandomSource,
    ) -> ArrivalDecision;
}

/// Uniformly pick one shelf among those `keep` accepts, in registry order.
///
/// Consumes one draw when at least one shelf qualifies, none otherwise.
pub fn pick_uniform<'s>(
    shelves: &'s ShelfRegistry,
    rng:     &mut dyn RandomSource,
    keep:    impl Fn(&Shelf) -> bool,
) -> Option<&'s Shelf> {
    let eligible: Vec<&Shelf> = shelves.iter().filter(|s| keep(s)).collect();
    rng.pick(eligible.len()).map(|i| eligible[i])
}

impl ArrivalDecision {
    /// Retarget to `shelf`, or clear when there is nothing to pick.
    pub fn retarget_or_clear(shelf: Option<&Shelf>) -> ArrivalDecision {
        match shelf {
            Some(s) => ArrivalDecision::Retarget { shelf: s.id.clone(), position: s.position },
            None => ArrivalDecision::Clear,
        }
    }
}
