//! Integration tests for sp-output.

#[cfg(test)]
mod rows {
    use tempfile::TempDir;

    use crate::row::{FrameSummaryRow, InteractionRow};

    pub fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    pub fn interaction(frame: u64, shelf: &str, count: Option<u64>) -> InteractionRow {
        InteractionRow {
            frame,
            clock:       "09:00:05".into(),
            hour:        9,
            customer_id: "c1".into(),
            shelf_id:    shelf.into(),
            shelf_count: count,
        }
    }

    pub fn summary(frame: u64) -> FrameSummaryRow {
        FrameSummaryRow {
            frame,
            clock_secs:      32_400,
            customers:       4,
            moved:           3,
            interactions:    1,
            removed:         0,
            imported:        None,
            import_failures: 0,
        }
    }
}

#[cfg(test)]
mod csv_tests {
    use crate::csv::CsvWriter;
    use crate::writer::OutputWriter;

    use super::rows::{interaction, summary, tmp};

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("interactions.csv").exists());
        assert!(dir.path().join("frame_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("interactions.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["frame", "clock", "hour", "customer_id", "shelf_id", "shelf_count"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("frame_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers2,
            ["frame", "clock_secs", "customers", "moved", "interactions", "removed", "imported", "import_failures"]
        );
    }

    #[test]
    fn csv_interactions_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_interactions(&[interaction(5, "dairy", Some(2)), interaction(5, "ghost", None)])
            .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("interactions.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "5");
        assert_eq!(&rows[0][1], "09:00:05");
        assert_eq!(&rows[0][4], "dairy");
        assert_eq!(&rows[0][5], "2");
        // Unregistered shelf: empty count cell.
        assert_eq!(&rows[1][5], "");
    }

    #[test]
    fn csv_frame_summary_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let mut row = summary(3);
        row.imported = Some(16);
        w.write_frame_summary(&row).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("frame_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][1], "32400");
        assert_eq!(&rows[0][6], "16");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_batch_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_interactions(&[]).unwrap();
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use sp_agent::CustomerBuilder;
    use sp_behavior::CheckoutAwarePolicy;
    use sp_core::{EngineConfig, FloorPoint, SequenceRng, ShelfId};
    use sp_layout::{Footprint, ProductCategory, Shelf, ShelfKind, ShelfRegistry, StoreLayout};
    use sp_sim::{FrameReport, SimBuilder, SimObserver};

    use crate::csv::CsvWriter;
    use crate::observer::SimOutputObserver;
    use crate::row::{FrameSummaryRow, InteractionRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    use super::rows::tmp;

    fn layout() -> StoreLayout {
        let shelves = vec![
            Shelf::new("dairy", ShelfKind::Product(ProductCategory::Dairy), FloorPoint::on_floor(-4.0, 0.0)),
            Shelf::new("till", ShelfKind::Checkout, FloorPoint::on_floor(0.0, 8.0)),
        ];
        StoreLayout::new(Footprint::default(), ShelfRegistry::from_shelves(shelves).unwrap())
    }

    #[test]
    fn integration_csv() {
        let mut sim = SimBuilder::new(EngineConfig::default(), layout(), CheckoutAwarePolicy)
            .rng(SequenceRng::constant(0.0))
            .build()
            .unwrap();
        let customer = CustomerBuilder::new(FloorPoint::on_floor(-4.0, 0.1))
            .id("c1")
            .target(ShelfId::new("dairy"), FloorPoint::on_floor(-4.0, 0.0))
            .build();
        sim.customers.insert(customer);

        let dir = tmp();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.step_frame(1.0 / 60.0, &mut obs);
        // Later frames run empty.
        sim.remove_customer("c1").unwrap();
        sim.run_frames(2, 1.0 / 60.0, &mut obs);
        sim.finish(&mut obs);
        assert!(obs.take_error().is_none(), "no write errors expected");

        let mut rdr = csv::Reader::from_path(dir.path().join("interactions.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][3], "c1");
        assert_eq!(&rows[0][4], "dairy");
        assert_eq!(&rows[0][5], "1");

        let mut rdr = csv::Reader::from_path(dir.path().join("frame_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][4], "1");
        assert_eq!(&rows[2][2], "0");
    }

    /// Fails every write after the first `ok` calls.
    struct Flaky {
        ok:       usize,
        calls:    usize,
        finishes: usize,
    }

    impl Flaky {
        fn step(&mut self, what: &str) -> OutputResult<()> {
            self.calls += 1;
            if self.calls > self.ok {
                return Err(OutputError::Io(std::io::Error::other(format!("{what} #{}", self.calls))));
            }
            Ok(())
        }
    }

    impl OutputWriter for Flaky {
        fn write_interactions(&mut self, _rows: &[InteractionRow]) -> OutputResult<()> {
            self.step("interactions")
        }

        fn write_frame_summary(&mut self, _row: &FrameSummaryRow) -> OutputResult<()> {
            self.step("summary")
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finishes += 1;
            Ok(())
        }
    }

    #[test]
    fn first_error_wins() {
        let mut obs = SimOutputObserver::new(Flaky { ok: 1, calls: 0, finishes: 0 });
        for frame in 0..3 {
            obs.on_frame_end(&FrameReport { frame: sp_core::Frame(frame), ..FrameReport::default() });
        }
        let err = obs.take_error().unwrap();
        assert!(err.to_string().contains("summary #2"));
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn finish_is_idempotent_and_reports() {
        let mut obs = SimOutputObserver::new(Flaky { ok: 0, calls: 0, finishes: 0 });
        obs.on_frame_end(&FrameReport::default());
        assert!(obs.finish().is_err());
        assert!(obs.finish().is_ok());
        assert_eq!(obs.into_writer().finishes, 2);
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    use super::rows::{interaction, summary, tmp};

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_interaction_count() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        let rows = vec![
            interaction(1, "dairy", Some(1)),
            interaction(1, "bread", Some(4)),
            interaction(2, "ghost", None),
        ];
        w.write_interactions(&rows).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM interactions", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 3);

        let missing: Option<i64> = conn
            .query_row("SELECT shelf_count FROM interactions WHERE shelf_id = 'ghost'", [], |r| r.get(0))
            .unwrap();
        assert_eq!(missing, None);
    }

    #[test]
    fn sqlite_frame_summary() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_frame_summary(&summary(7)).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (frame, secs, customers): (i64, i64, i64) = conn
            .query_row(
                "SELECT frame, clock_secs, customers FROM frame_summaries WHERE frame = 7",
                [],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
            )
            .unwrap();
        assert_eq!(frame, 7);
        assert_eq!(secs, 32_400);
        assert_eq!(customers, 4);
    }

    #[test]
    fn sqlite_finish_idempotent() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}
