//! The movement engine: one decide pass over every customer per frame.

use tracing::{debug, trace};

use sp_agent::{Customer, ScriptedRoute};
use sp_behavior::{ArrivalDecision, Command, FrameContext, RemovalReason, TargetPolicy};
use sp_core::{CustomerId, FloorPoint, RandomSource};

use crate::MovementMode;

/// Commands for every customer that needs any, in store order.
pub type FramePlan = Vec<(CustomerId, Vec<Command>)>;

/// Wraps a [`TargetPolicy`] and plans each frame's movement.
///
/// # Type parameter
///
/// `P` picks targets for wandering customers and decides what happens after
/// an arrival.  Swap it at compile time (or use
/// [`AnyPolicy`][sp_behavior::AnyPolicy] to choose at runtime).
pub struct MovementEngine<P: TargetPolicy> {
    pub policy: P,
}

impl<P: TargetPolicy> MovementEngine<P> {
    pub fn new(policy: P) -> Self {
        Self { policy }
    }

    /// Plan one frame for every customer in `ctx.customers`.
    ///
    /// Customers with nothing to do are left out of the plan.
    pub fn plan_frame(&self, ctx: &FrameContext<'_>, rng: &mut dyn RandomSource) -> FramePlan {
        ctx.customers
            .iter()
            .filter_map(|c| {
                let cmds = self.plan_customer(c, ctx, &mut *rng);
                (!cmds.is_empty()).then(|| (c.id.clone(), cmds))
            })
            .collect()
    }

    /// Plan one frame for a single customer.
    pub fn plan_customer(
        &self,
        customer: &Customer,
        ctx:      &FrameContext<'_>,
        rng:      &mut dyn RandomSource,
    ) -> Vec<Command> {
        let mut cmds = Vec::new();

        match (MovementMode::of(customer), customer.route.as_ref()) {
            (MovementMode::RouteComplete, Some(route)) => {
                if route.ends_where_it_started(ctx.config.exit_tolerance) {
                    debug!(customer = %customer.id, "route returned to entrance");
                    cmds.push(Command::Remove(RemovalReason::ReturnedToEntrance));
                }
            }
            (MovementMode::Scripted, Some(route)) => {
                self.plan_scripted(customer, route, ctx, &mut cmds);
            }
            (MovementMode::Targeted, _) => {
                self.plan_targeted(customer, ctx, rng, &mut cmds);
            }
            (MovementMode::Wandering, _) => {
                if let Some(shelf) = self.policy.choose_wander_target(customer, ctx, rng) {
                    trace!(customer = %customer.id, shelf = %shelf.id, "wandering customer picked a shelf");
                    cmds.push(Command::SetTarget {
                        shelf:    Some(shelf.id.clone()),
                        position: Some(shelf.position),
                    });
                }
            }
            // Route-bearing modes always carry a route.
            _ => {}
        }

        if !cmds.iter().any(|c| matches!(c, Command::Remove(_))) {
            let end = cmds
                .iter()
                .rev()
                .find_map(|c| match c {
                    Command::Move { position, .. } => Some(*position),
                    _ => None,
                })
                .unwrap_or(customer.position);
            // Either end of this frame's step off the floor retires the customer.
            let bound = ctx.config.floor_bound;
            if customer.position.outside_square(bound) || end.outside_square(bound) {
                debug!(customer = %customer.id, from = %customer.position, to = %end, "customer left the floor");
                cmds.push(Command::Remove(RemovalReason::OutOfBounds));
            }
        }

        cmds
    }

    // ── Scripted playback ─────────────────────────────────────────────────

    fn plan_scripted(
        &self,
        customer: &Customer,
        route:    &ScriptedRoute,
        ctx:      &FrameContext<'_>,
        cmds:     &mut Vec<Command>,
    ) {
        let Some((_, to)) = route.segment() else {
            return;
        };
        let cursor = route.cursor;

        if customer.position.planar_distance(to) < ctx.config.waypoint_radius {
            // Entry `cursor - 1` belongs to the segment just finished.
            if let Some(shelf) = route.visited_shelves.get(cursor - 1) {
                cmds.push(Command::Interact { shelf: shelf.clone() });
            }
            cmds.push(Command::Move { position: to, path_index: Some(cursor + 1) });
            cmds.push(Command::SetTarget {
                shelf:    route.visited_shelves.get(cursor).cloned(),
                position: Some(route.waypoint(cursor + 1).unwrap_or(to)),
            });
        } else {
            let step = customer.speed * ctx.dt;
            cmds.push(Command::Move {
                position:   customer.position.step_toward(to, step),
                path_index: None,
            });
        }
    }

    // ── Targeted walking ──────────────────────────────────────────────────

    fn plan_targeted(
        &self,
        customer: &Customer,
        ctx:      &FrameContext<'_>,
        rng:      &mut dyn RandomSource,
        cmds:     &mut Vec<Command>,
    ) {
        let Some(target_id) = customer.target_shelf.as_ref() else {
            return;
        };
        // A target that vanished from the registry: stand still this frame.
        let Some(shelf) = ctx.layout.shelves.get(target_id.as_str()) else {
            trace!(customer = %customer.id, shelf = %target_id, "target shelf missing");
            return;
        };

        let target = FloorPoint::on_floor(shelf.position.x, shelf.position.z);
        if customer.position.planar_distance(target) >= ctx.config.arrival_radius {
            let step = customer.speed * ctx.dt;
            cmds.push(Command::Move {
                position:   customer.position.step_toward(target, step),
                path_index: None,
            });
            return;
        }

        cmds.push(Command::Interact { shelf: shelf.id.clone() });
        match self.policy.decide_arrival(customer, shelf, ctx, rng) {
            ArrivalDecision::Clear => cmds.push(Command::SetTarget { shelf: None, position: None }),
            ArrivalDecision::Retarget { shelf, position } => {
                cmds.push(Command::SetTarget { shelf: Some(shelf), position: Some(position) })
            }
            ArrivalDecision::Checkout => {
                debug!(customer = %customer.id, shelf = %shelf.id, "customer checked out");
                cmds.push(Command::Remove(RemovalReason::CheckedOut));
            }
        }
    }
}
