//! Fluent builder for constructing a [`Sim`].

use sp_agent::CustomerStore;
use sp_behavior::TargetPolicy;
use sp_core::{EngineConfig, Frame, RandomSource, SimRng, VirtualClock};
use sp_import::Importer;
use sp_layout::StoreLayout;
use sp_mobility::MovementEngine;

use crate::{InteractionRecorder, InteractionTally, Sim, SimError, SimResult};

/// Fluent builder for [`Sim<P, R>`].
///
/// # Required inputs
///
/// - [`EngineConfig`] — radii, probabilities, speeds, seed, clock
/// - [`StoreLayout`] — footprint, entrance and shelf registry
/// - `P: TargetPolicy` — e.g. [`sp_behavior::CheckoutAwarePolicy`]
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                          |
/// |-------------------|----------------------------------|
/// | `.customers(s)`   | Empty `CustomerStore`            |
/// | `.recorder(r)`    | `InteractionTally::new()`        |
/// | `.rng(r)`         | `SimRng::new(config.seed)`       |
/// | `.importer(i)`    | None (no minute-boundary fetch)  |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, layout, CheckoutAwarePolicy)
///     .importer(Importer::new(HttpBackend::new(url, HttpBackend::DEFAULT_TIMEOUT)?))
///     .build()?;
/// sim.run_frames(600, 1.0 / 60.0, &mut NoopObserver);
/// ```
pub struct SimBuilder<P: TargetPolicy, R: InteractionRecorder = InteractionTally> {
    config:    EngineConfig,
    layout:    StoreLayout,
    policy:    P,
    customers: Option<CustomerStore>,
    recorder:  R,
    rng:       Option<Box<dyn RandomSource + Send>>,
    importer:  Option<Importer>,
}

impl<P: TargetPolicy> SimBuilder<P> {
    /// Create a builder with all required inputs.
    pub fn new(config: EngineConfig, layout: StoreLayout, policy: P) -> Self {
        Self {
            config,
            layout,
            policy,
            customers: None,
            recorder:  InteractionTally::new(),
            rng:       None,
            importer:  None,
        }
    }
}

impl<P: TargetPolicy, R: InteractionRecorder> SimBuilder<P, R> {
    /// Start from an existing set of customers.
    pub fn customers(mut self, customers: CustomerStore) -> Self {
        self.customers = Some(customers);
        self
    }

    /// Swap the interaction recorder.
    pub fn recorder<R2: InteractionRecorder>(self, recorder: R2) -> SimBuilder<P, R2> {
        SimBuilder {
            config:    self.config,
            layout:    self.layout,
            policy:    self.policy,
            customers: self.customers,
            recorder,
            rng:       self.rng,
            importer:  self.importer,
        }
    }

    /// Replace the seeded RNG, e.g. with a `SequenceRng` in tests.
    pub fn rng(mut self, rng: impl RandomSource + Send + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Fetch a fresh batch on every virtual minute boundary.
    pub fn importer(mut self, importer: Importer) -> Self {
        self.importer = Some(importer);
        self
    }

    /// Validate the config and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<P, R>> {
        self.config
            .validate()
            .map_err(|e| SimError::Config(e.to_string()))?;

        let seed = self.config.seed;
        Ok(Sim {
            clock:     VirtualClock::new(&self.config.clock),
            frame:     Frame::ZERO,
            layout:    self.layout,
            customers: self.customers.unwrap_or_default(),
            engine:    MovementEngine::new(self.policy),
            recorder:  self.recorder,
            rng:       self.rng.unwrap_or_else(|| Box::new(SimRng::new(seed))),
            importer:  self.importer,
            config:    self.config,
        })
    }
}
