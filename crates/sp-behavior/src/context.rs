//! Read-only frame state passed to the engine and policies.

use sp_agent::CustomerStore;
use sp_core::{EngineConfig, Frame};
use sp_layout::StoreLayout;

/// A read-only snapshot of the simulation for one frame's decide phase.
///
/// Built by sp-sim once per frame.  All borrows live for the decide phase
/// only; sp-sim never hands out mutable access while a `FrameContext` is live.
pub struct FrameContext<'a> {
    pub frame: Frame,

    /// Real seconds since the previous frame.  Movement is `speed * dt`.
    pub dt: f32,

    pub layout: &'a StoreLayout,

    pub customers: &'a CustomerStore,

    pub config: &'a EngineConfig,
}

impl<'a> FrameContext<'a> {
    #[inline]
    pub fn new(
        frame:     Frame,
        dt:        f32,
        layout:    &'a StoreLayout,
        customers: &'a CustomerStore,
        config:    &'a EngineConfig,
    ) -> Self {
        Self { frame, dt, layout, customers, config }
    }
}
