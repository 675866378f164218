//! walkthrough — a store_planner crowd run from a TOML scenario.
//!
//! Reads the scenario named on the command line (or the bundled
//! `store.toml`), spawns manual customers on the store perimeter, optionally
//! replaces them with scripted visitors from a saved batch or a live
//! backend on every virtual minute, and writes interactions and frame
//! summaries as CSV.
//!
//! ```text
//! RUST_LOG=debug cargo run -p walkthrough -- demos/walkthrough/store.toml
//! ```

mod scenario;

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use sp_behavior::RemovalReason;
use sp_core::{CustomerId, Frame};
use sp_import::{HttpBackend, ImportError, Importer, SimulationResponse, StaticBackend, load_batch_json};
use sp_output::{CsvWriter, OutputWriter, SimOutputObserver};
use sp_sim::{FrameReport, InteractionEvent, SimBuilder, SimObserver};

use scenario::Scenario;

const DEFAULT_SCENARIO: &str = include_str!("../store.toml");

// ── Observer wrapper to count outcomes ───────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:    SimOutputObserver<W>,
    removals: BTreeMap<&'static str, usize>,
    batches:  usize,
    failures: usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, removals: BTreeMap::new(), batches: 0, failures: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_interaction(&mut self, event: &InteractionEvent) {
        self.inner.on_interaction(event);
    }

    fn on_customer_removed(&mut self, _frame: Frame, _customer: &CustomerId, reason: RemovalReason) {
        *self.removals.entry(reason.as_str()).or_default() += 1;
    }

    fn on_batch_imported(&mut self, frame: Frame, response: &SimulationResponse, created: usize) {
        self.batches += 1;
        info!(%frame, created, heatmap_rows = response.heatmap.len(), "batch applied");
    }

    fn on_import_failed(&mut self, frame: Frame, error: &ImportError) {
        self.failures += 1;
        warn!(%frame, %error, "batch fetch failed; keeping current customers");
    }

    fn on_frame_end(&mut self, report: &FrameReport) {
        self.inner.on_frame_end(report);
    }

    fn on_sim_end(&mut self, final_frame: Frame) {
        self.inner.on_sim_end(final_frame);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).compact().init();
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    // 1. Scenario.
    let text = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)?,
        None => DEFAULT_SCENARIO.to_owned(),
    };
    let scenario = Scenario::parse(&text)?;
    let layout = scenario.layout()?;
    let policy = scenario.policy()?;
    println!("=== walkthrough — store_planner crowd engine ===");
    println!(
        "Store {}×{}  |  Shelves: {}  |  Policy: {:?}  |  Seed: {}",
        layout.footprint.width,
        layout.footprint.length,
        layout.shelves.len(),
        policy,
        scenario.engine.seed,
    );

    // 2. Optional batch source.
    let importer = match (&scenario.batch, &scenario.backend) {
        (Some(path), _) => {
            let response = load_batch_json(path)?;
            println!("Replaying {} visitors from {}", response.visitors.len(), path.display());
            Some(Importer::new(StaticBackend::new(response)))
        }
        (None, Some(url)) => {
            let backend = HttpBackend::new(url, HttpBackend::DEFAULT_TIMEOUT)?;
            println!("Fetching batches from {}", backend.endpoint());
            Some(Importer::new(backend))
        }
        (None, None) => None,
    };

    // 3. Build sim.
    let mut builder = SimBuilder::new(scenario.engine.clone(), layout, policy);
    if let Some(importer) = importer {
        builder = builder.importer(importer);
    }
    let mut sim = builder.build()?;

    for _ in 0..scenario.customers {
        sim.spawn_customer(None)?;
    }
    println!("Spawned {} customers at {}", sim.customers.len(), sim.clock);
    println!();

    // 4. Output.
    std::fs::create_dir_all(&scenario.output_dir)?;
    let writer = CsvWriter::new(Path::new(&scenario.output_dir))?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));

    // 5. Run.
    let t0 = Instant::now();
    let last = sim.run_frames(scenario.frames, scenario.dt, &mut obs);
    sim.settle_imports(&mut obs);
    sim.finish(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    println!("Ran {} frames in {:.3} s; virtual clock {}", last.frame.0 + 1, elapsed.as_secs_f64(), sim.clock);
    println!("  customers left : {}", sim.customers.len());
    println!("  batches        : {} applied, {} failed", obs.batches, obs.failures);
    for (reason, n) in &obs.removals {
        println!("  removed ({reason:<20}) : {n}");
    }
    println!();

    println!("{:<12} {:>12}", "Shelf", "Interactions");
    println!("{}", "-".repeat(25));
    for (shelf, total) in sim.recorder.ranking() {
        println!("{:<12} {:>12}", shelf.as_str(), total);
    }

    let hourly = sim.recorder.hourly_totals();
    let busy: Vec<String> = hourly
        .iter()
        .enumerate()
        .filter(|(_, n)| **n > 0)
        .map(|(h, n)| format!("{h:02}h={n}"))
        .collect();
    if !busy.is_empty() {
        println!();
        println!("Hourly: {}", busy.join("  "));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_scenario_parses() {
        let scenario = Scenario::parse(DEFAULT_SCENARIO).unwrap();
        let layout = scenario.layout().unwrap();
        assert_eq!(layout.shelves.len(), 6);
        assert!(layout.shelves.has_checkout());
        assert!(layout.shelves.get("back-wall").unwrap().kind.is_wall());
        assert_eq!(layout.shelves.get("bakery-1").unwrap().discount, Some(0.15));
        assert_eq!(scenario.engine.seed, 7);
        assert!(scenario.engine.clock.autostart);
        assert!(scenario.policy().is_ok());
    }

    #[test]
    fn bundled_scenario_runs() {
        let scenario = Scenario::parse(DEFAULT_SCENARIO).unwrap();
        let mut sim = SimBuilder::new(scenario.engine.clone(), scenario.layout().unwrap(), scenario.policy().unwrap())
            .build()
            .unwrap();
        for _ in 0..scenario.customers {
            sim.spawn_customer(None).unwrap();
        }
        let report = sim.run_frames(120, scenario.dt, &mut sp_sim::NoopObserver);
        assert_eq!(report.frame.0, 119);
        assert!(report.customers <= scenario.customers);
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let scenario = Scenario::parse("policy = \"random\"").unwrap();
        assert!(scenario.policy().is_err());
    }
}
