//! Background batch fetching.
//!
//! `dispatch` hands the request to the rayon pool and returns immediately;
//! results come back over an mpsc channel and are drained by `poll` (never
//! blocks) or `wait_all` (blocks until nothing is in flight).  The frame loop
//! polls once per frame, so the backend's latency never stalls movement.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use tracing::{debug, warn};

use crate::{ImportResult, SimulationBackend, SimulationRequest, SimulationResponse};

/// A resolved fetch.
#[derive(Debug)]
pub struct ImportOutcome {
    /// Dispatch sequence number, starting at 0.
    pub ticket: u64,
    /// `timeOfDay` of the request that produced this outcome.
    pub time_of_day: String,
    pub result: ImportResult<SimulationResponse>,
}

pub struct Importer {
    backend:     Arc<dyn SimulationBackend>,
    tx:          Sender<ImportOutcome>,
    rx:          Receiver<ImportOutcome>,
    in_flight:   usize,
    next_ticket: u64,
}

impl Importer {
    pub fn new(backend: impl SimulationBackend) -> Self {
        Self::from_arc(Arc::new(backend))
    }

    pub fn from_arc(backend: Arc<dyn SimulationBackend>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { backend, tx, rx, in_flight: 0, next_ticket: 0 }
    }

    /// Number of fetches dispatched but not yet drained.
    #[inline]
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Start a fetch on the rayon pool.  Earlier fetches still in flight are
    /// not cancelled or merged.  Returns the outcome's ticket.
    pub fn dispatch(&mut self, request: SimulationRequest) -> u64 {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.in_flight += 1;

        if self.in_flight > 1 {
            debug!(ticket, in_flight = self.in_flight, "dispatching while an earlier fetch is pending");
        }

        let backend = Arc::clone(&self.backend);
        let tx = self.tx.clone();
        rayon::spawn(move || {
            let result = backend.simulate(&request);
            let outcome = ImportOutcome { ticket, time_of_day: request.time_of_day, result };
            // The importer may have been dropped; nobody is left to care.
            let _ = tx.send(outcome);
        });
        ticket
    }

    /// Drain every fetch that has resolved, without blocking.
    pub fn poll(&mut self) -> Vec<ImportOutcome> {
        let mut done = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(outcome) => done.push(self.settle(outcome)),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        done
    }

    /// Block until every dispatched fetch has resolved.
    pub fn wait_all(&mut self) -> Vec<ImportOutcome> {
        let mut done = Vec::with_capacity(self.in_flight);
        while self.in_flight > 0 {
            match self.rx.recv() {
                Ok(outcome) => done.push(self.settle(outcome)),
                Err(_) => break,
            }
        }
        done
    }

    /// Fetch on the calling thread.
    pub fn import_now(&self, request: &SimulationRequest) -> ImportResult<SimulationResponse> {
        self.backend.simulate(request)
    }

    fn settle(&mut self, outcome: ImportOutcome) -> ImportOutcome {
        self.in_flight = self.in_flight.saturating_sub(1);
        if let Err(e) = &outcome.result {
            warn!(ticket = outcome.ticket, error = %e, "simulation fetch failed");
        }
        outcome
    }
}
