//! Built-in target policies.

use std::str::FromStr;

use sp_agent::Customer;
use sp_core::RandomSource;
use sp_layout::Shelf;

use crate::{ArrivalDecision, BehaviorError, FrameContext, TargetPolicy, pick_uniform};

/// Spontaneous pick for a wandering customer: nothing happens on an empty
/// registry (no draw), otherwise one `chance` draw and, on success, one
/// `pick` draw among shelves `keep` accepts.
fn wander_pick<'s>(
    ctx:  &FrameContext<'s>,
    rng:  &mut dyn RandomSource,
    keep: impl Fn(&Shelf) -> bool,
) -> Option<&'s Shelf> {
    let shelves = &ctx.layout.shelves;
    if shelves.is_empty() || !rng.chance(ctx.config.retarget_probability) {
        return None;
    }
    pick_uniform(shelves, rng, keep)
}

// ── CheckoutAwarePolicy ───────────────────────────────────────────────────────

/// Shop first, then pay.
///
/// - Wandering customers only ever pick product shelves.
/// - Arriving at a checkout ends the visit (the customer is removed).
/// - Otherwise, after at least one product shelf, the customer heads for a
///   random checkout with `checkout_probability`.
///
/// Arrival draw order: `chance(clear)`; then, if the customer has shopped
/// and a checkout exists, `chance(checkout)` followed by one `pick`;
/// otherwise one `pick` among the other product shelves.
#[derive(Copy, Clone, Debug, Default)]
pub struct CheckoutAwarePolicy;

impl TargetPolicy for CheckoutAwarePolicy {
    fn choose_wander_target<'s>(
        &self,
        _customer: &Customer,
        ctx:       &FrameContext<'s>,
        rng:       &mut dyn RandomSource,
    ) -> Option<&'s Shelf> {
        wander_pick(ctx, rng, |s| s.kind.is_product())
    }

    fn decide_arrival(
        &self,
        customer: &Customer,
        shelf:    &Shelf,
        ctx:      &FrameContext<'_>,
        rng:      &mut dyn RandomSource,
    ) -> ArrivalDecision {
        if shelf.kind.is_checkout() {
            return ArrivalDecision::Checkout;
        }
        if rng.chance(ctx.config.clear_target_probability) {
            return ArrivalDecision::Clear;
        }

        let shelves = &ctx.layout.shelves;
        let has_shopped = customer.product_visits > 0 || shelf.kind.is_product();
        if has_shopped
            && shelves.has_checkout()
            && rng.chance(ctx.config.checkout_probability)
        {
            return ArrivalDecision::retarget_or_clear(pick_uniform(shelves, rng, |s| {
                s.kind.is_checkout()
            }));
        }

        ArrivalDecision::retarget_or_clear(pick_uniform(shelves, rng, |s| {
            s.kind.is_product() && s.id != shelf.id
        }))
    }
}

// ── UniformPolicy ─────────────────────────────────────────────────────────────

/// Any non-wall shelf is as good as any other, checkouts included.  A
/// customer arriving at a checkout stays in the store and moves on like
/// anywhere else.
///
/// Arrival draw order: `chance(clear)`, then one `pick` among the other
/// non-wall shelves.
#[derive(Copy, Clone, Debug, Default)]
pub struct UniformPolicy;

impl TargetPolicy for UniformPolicy {
    fn choose_wander_target<'s>(
        &self,
        _customer: &Customer,
        ctx:       &FrameContext<'s>,
        rng:       &mut dyn RandomSource,
    ) -> Option<&'s Shelf> {
        wander_pick(ctx, rng, |s| !s.kind.is_wall())
    }

    fn decide_arrival(
        &self,
        _customer: &Customer,
        shelf:     &Shelf,
        ctx:       &FrameContext<'_>,
        rng:       &mut dyn RandomSource,
    ) -> ArrivalDecision {
        if rng.chance(ctx.config.clear_target_probability) {
            return ArrivalDecision::Clear;
        }
        ArrivalDecision::retarget_or_clear(pick_uniform(&ctx.layout.shelves, rng, |s| {
            !s.kind.is_wall() && s.id != shelf.id
        }))
    }
}

// ── AnyPolicy ─────────────────────────────────────────────────────────────────

/// Runtime-selected policy, for hosts that read the choice from a config
/// file.  Parses from `"checkout_aware"` or `"uniform"`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum AnyPolicy {
    #[default]
    CheckoutAware,
    Uniform,
}

impl FromStr for AnyPolicy {
    type Err = BehaviorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "checkout_aware" => Ok(AnyPolicy::CheckoutAware),
            "uniform" => Ok(AnyPolicy::Uniform),
            _ => Err(BehaviorError::UnknownPolicy(s.to_owned())),
        }
    }
}

impl TargetPolicy for AnyPolicy {
    fn choose_wander_target<'s>(
        &self,
        customer: &Customer,
        ctx:      &FrameContext<'s>,
        rng:      &mut dyn RandomSource,
    ) -> Option<&'s Shelf> {
        match self {
            AnyPolicy::CheckoutAware => CheckoutAwarePolicy.choose_wander_target(customer, ctx, rng),
            AnyPolicy::Uniform => UniformPolicy.choose_wander_target(customer, ctx, rng),
        }
    }

    fn decide_arrival(
        &self,
        customer: &Customer,
        shelf:    &Shelf,
        ctx:      &FrameContext<'_>,
        rng:      &mut dyn RandomSource,
    ) -> ArrivalDecision {
        match self {
            AnyPolicy::CheckoutAware => CheckoutAwarePolicy.decide_arrival(customer, shelf, ctx, rng),
            AnyPolicy::Uniform => UniformPolicy.decide_arrival(customer, shelf, ctx, rng),
        }
    }
}
