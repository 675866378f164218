//! The `Sim` struct and its frame loop.

use tracing::{debug, info, trace};

use sp_agent::{Customer, CustomerStore};
use sp_behavior::{Command, FrameContext, RemovalReason, TargetPolicy};
use sp_core::{CustomerId, EngineConfig, FloorPoint, Frame, RandomSource, ShelfId, SpError, VirtualClock};
use sp_import::{ImportOutcome, Importer, build_request};
use sp_layout::{Shelf, StoreLayout};
use sp_mobility::MovementEngine;

use crate::{FrameReport, InteractionEvent, InteractionRecorder, InteractionTally, SimObserver, SimResult};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<P, R>` holds all simulation state and drives the frame loop:
///
/// 1. **Imports**: drain fetches that resolved since the last frame.  A
///    successful batch replaces every customer; a failure leaves the store
///    untouched and is reported to the observer.
/// 2. **Clock**: feed `dt` into the virtual clock.  On a minute boundary,
///    dispatch a new fetch if an importer is attached.
/// 3. **Decide phase**: the engine reads a [`FrameContext`] snapshot and
///    returns commands per customer.  Nothing is mutated.
/// 4. **Apply phase** (sequential, store order): commands are applied in the
///    order produced; after a `Remove` the rest of that customer's list is
///    skipped.
/// 5. **Animation**: every surviving walk cycle advances by `dt`.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: TargetPolicy, R: InteractionRecorder = InteractionTally> {
    pub config: EngineConfig,

    /// Frames completed so far.
    pub frame: Frame,

    /// Virtual time of day.  Drives the hourly histogram and fetch triggers.
    pub clock: VirtualClock,

    pub layout: StoreLayout,

    pub customers: CustomerStore,

    pub engine: MovementEngine<P>,

    pub recorder: R,

    pub(crate) rng: Box<dyn RandomSource + Send>,

    pub(crate) importer: Option<Importer>,
}

impl<P: TargetPolicy, R: InteractionRecorder> Sim<P, R> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run `n` frames of `dt` real seconds each.  Returns the last report.
    pub fn run_frames<O: SimObserver>(&mut self, n: u64, dt: f32, observer: &mut O) -> FrameReport {
        let mut last = FrameReport { frame: self.frame, ..FrameReport::default() };
        for _ in 0..n {
            last = self.step_frame(dt, observer);
        }
        last
    }

    /// Process one rendered frame.
    pub fn step_frame<O: SimObserver>(&mut self, dt: f32, observer: &mut O) -> FrameReport {
        let frame = self.frame;
        observer.on_frame_start(frame, &self.clock);
        let mut report = FrameReport { frame, ..FrameReport::default() };

        // ── Phase 1: resolved imports ─────────────────────────────────────
        let outcomes = match self.importer.as_mut() {
            Some(importer) => importer.poll(),
            None => Vec::new(),
        };
        self.apply_imports(frame, outcomes, observer, &mut report);

        // ── Phase 2: virtual clock ────────────────────────────────────────
        if self.clock.advance_real(dt).minute_crossed {
            report.dispatched = self.dispatch_import().is_some();
        }

        // ── Phase 3: decide ───────────────────────────────────────────────
        let plan = {
            let ctx = FrameContext::new(frame, dt, &self.layout, &self.customers, &self.config);
            self.engine.plan_frame(&ctx, self.rng.as_mut())
        };

        // ── Phase 4: apply ────────────────────────────────────────────────
        for (id, commands) in plan {
            self.apply_commands(frame, &id, commands, observer, &mut report);
        }

        // ── Phase 5: animation ────────────────────────────────────────────
        self.customers.advance_animations(dt);

        self.frame = frame.next();
        report.clock_secs = self.clock.secs_of_day();
        report.customers = self.customers.len();
        observer.on_frame_end(&report);
        report
    }

    /// Report the end of the run to `observer`.
    pub fn finish<O: SimObserver>(&mut self, observer: &mut O) {
        observer.on_sim_end(self.frame);
    }

    // ── Customers ─────────────────────────────────────────────────────────

    /// Add a customer at `position`, optionally heading for `target`.
    ///
    /// Speed is drawn from the manual speed band.  Fails if `target` names a
    /// shelf that is not in the registry.
    pub fn add_customer(&mut self, position: FloorPoint, target: Option<&str>) -> SimResult<CustomerId> {
        let target = match target {
            Some(id) => {
                let shelf = self
                    .layout
                    .shelves
                    .get(id)
                    .ok_or_else(|| SpError::ShelfNotFound(ShelfId::new(id)))?;
                Some((shelf.id.clone(), shelf.position))
            }
            None => None,
        };
        let band = self.config.manual_speed;
        let speed = self.rng.range_f32(band.min, band.max);
        let id = self.customers.add(position, target, speed);
        debug!(customer = %id, %position, speed, "customer added");
        Ok(id)
    }

    /// Add a customer at a random point on the store perimeter.
    pub fn spawn_customer(&mut self, target: Option<&str>) -> SimResult<CustomerId> {
        let position = self.layout.spawn_point(self.rng.as_mut());
        self.add_customer(position, target)
    }

    pub fn remove_customer(&mut self, id: &str) -> SimResult<Customer> {
        let customer = self.customers.remove(id)?;
        debug!(customer = %customer.id, reason = %RemovalReason::Explicit, "customer removed");
        Ok(customer)
    }

    /// Add a shelf to the registry while the simulation runs.
    pub fn place_shelf(&mut self, shelf: Shelf) -> SimResult<()> {
        self.layout.shelves.insert(shelf)?;
        Ok(())
    }

    // ── Imports ───────────────────────────────────────────────────────────

    pub fn has_importer(&self) -> bool {
        self.importer.is_some()
    }

    /// Dispatch a fetch for the current layout and virtual time.  Returns the
    /// ticket, or `None` without an importer.
    pub fn dispatch_import(&mut self) -> Option<u64> {
        let importer = self.importer.as_mut()?;
        let time_of_day = self.clock.time_of_day();
        let ticket = importer.dispatch(build_request(&self.layout, time_of_day.as_str()));
        debug!(ticket, %time_of_day, "simulation fetch dispatched");
        Some(ticket)
    }

    /// Block until every dispatched fetch resolves and apply the results in
    /// arrival order.  Returns how many outcomes were applied.
    pub fn settle_imports<O: SimObserver>(&mut self, observer: &mut O) -> usize {
        let outcomes = match self.importer.as_mut() {
            Some(importer) => importer.wait_all(),
            None => return 0,
        };
        let n = outcomes.len();
        let mut report = FrameReport { frame: self.frame, ..FrameReport::default() };
        self.apply_imports(self.frame, outcomes, observer, &mut report);
        n
    }

    /// Fetch on the calling thread and replace the customer store.  Errors
    /// are returned instead of reported.
    pub fn import_now(&mut self) -> SimResult<usize> {
        let Some(importer) = self.importer.as_ref() else {
            return Ok(0);
        };
        let request = build_request(&self.layout, self.clock.time_of_day());
        let response = importer.import_now(&request)?;
        self.recorder.record_stats(&response.stats);
        Ok(self.customers.bulk_replace(
            response.scripted_visitors(),
            self.config.batch_cap,
            self.config.scripted_speed,
        ))
    }

    // ── Apply helpers ─────────────────────────────────────────────────────

    fn apply_imports<O: SimObserver>(
        &mut self,
        frame:    Frame,
        outcomes: Vec<ImportOutcome>,
        observer: &mut O,
        report:   &mut FrameReport,
    ) {
        for outcome in outcomes {
            match outcome.result {
                Ok(response) => {
                    let created = self.customers.bulk_replace(
                        response.scripted_visitors(),
                        self.config.batch_cap,
                        self.config.scripted_speed,
                    );
                    self.recorder.record_stats(&response.stats);
                    info!(
                        ticket = outcome.ticket,
                        time_of_day = %outcome.time_of_day,
                        received = response.visitors.len(),
                        created,
                        "simulation batch imported"
                    );
                    report.imported = Some(created);
                    observer.on_batch_imported(frame, &response, created);
                }
                Err(e) => {
                    report.import_failures += 1;
                    observer.on_import_failed(frame, &e);
                }
            }
        }
    }

    /// Apply one customer's commands.  Unknown ids (a customer removed by an
    /// earlier command) are skipped.
    fn apply_commands<O: SimObserver>(
        &mut self,
        frame:    Frame,
        id:       &CustomerId,
        commands: Vec<Command>,
        observer: &mut O,
        report:   &mut FrameReport,
    ) {
        for command in commands {
            match command {
                Command::Move { position, path_index } => {
                    match self.customers.update_position(id.as_str(), position, path_index) {
                        Ok(()) => report.moved += 1,
                        Err(e) => trace!(error = %e, "move skipped"),
                    }
                }
                Command::SetTarget { shelf, position } => {
                    if let Err(e) = self.customers.set_target(id.as_str(), shelf, position) {
                        trace!(error = %e, "retarget skipped");
                    }
                }
                Command::Interact { shelf } => {
                    self.interact(frame, id, shelf, observer);
                    report.interactions += 1;
                }
                Command::Remove(reason) => {
                    if self.customers.remove(id.as_str()).is_ok() {
                        debug!(customer = %id, %reason, "customer removed");
                        report.removed += 1;
                        observer.on_customer_removed(frame, id, reason);
                    }
                    break;
                }
            }
        }
    }

    fn interact<O: SimObserver>(&mut self, frame: Frame, customer: &CustomerId, shelf: ShelfId, observer: &mut O) {
        let count = match self.layout.shelves.increment_interaction(shelf.as_str()) {
            Ok(n) => Some(n),
            Err(e) => {
                trace!(error = %e, "interaction with unregistered shelf");
                None
            }
        };
        let is_product = self
            .layout
            .shelves
            .get(shelf.as_str())
            .is_some_and(|s| s.kind.is_product());
        if is_product {
            if let Err(e) = self.customers.note_product_visit(customer.as_str()) {
                trace!(error = %e, "product visit not noted");
            }
        }

        let hour = self.clock.hour();
        self.recorder.record_interaction(&shelf, hour);
        observer.on_interaction(&InteractionEvent {
            frame,
            customer: customer.clone(),
            shelf,
            hour,
            clock: self.clock.to_string(),
            count,
        });
    }
}
