//! Integration tests for rh-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{LocationKind, ProductivityRow, QueueRow, TraceRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn trace_row(train_id: u32, time: f64) -> TraceRow {
        TraceRow {
            time,
            train_id,
            class:    0,
            phase:    "arrived_at_terminal",
            port:     0,
            terminal: train_id,
        }
    }

    fn headers(path: std::path::PathBuf) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("trace.csv").exists());
        assert!(dir.path().join("productivity.csv").exists());
        assert!(dir.path().join("queue.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(dir.path().join("trace.csv")),
            ["time", "train_id", "class", "phase", "port", "terminal"]
        );
        assert_eq!(headers(dir.path().join("productivity.csv")), ["time", "cumulative_mass"]);
        assert_eq!(
            headers(dir.path().join("queue.csv")),
            ["kind", "location", "train_id", "arrival", "start", "completion", "wait"]
        );
    }

    #[test]
    fn csv_trace_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_trace(&[trace_row(0, 3600.0), trace_row(1, 3600.5)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("trace.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "3600");
        assert_eq!(&rows[1][0], "3600.5");
        assert_eq!(&rows[1][3], "arrived_at_terminal");
        assert_eq!(&rows[1][5], "1");
    }

    #[test]
    fn csv_queue_kind_column() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_queue(&[QueueRow {
            kind:       LocationKind::Port,
            location:   2,
            train_id:   4,
            arrival:    10.0,
            start:      15.0,
            completion: 20.0,
            wait:       5.0,
        }])
        .unwrap();
        w.write_productivity(&[ProductivityRow { time: 20.0, cumulative_mass: 1.0e6 }]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("queue.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(&rows[0][0], "port");
        assert_eq!(&rows[0][6], "5");

        let mut rdr = csv::Reader::from_path(dir.path().join("productivity.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(&rows[0][1], "1000000");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_missing_directory_is_error() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("does/not/exist")).is_err());
    }
}

#[cfg(test)]
mod observer_tests {
    use rh_core::{Matrix, PortId, StaticConfig};
    use rh_model::{DispatchPolicy, ModelBuilder};
    use rh_sim::Simulator;

    use crate::observer::SimOutputObserver;
    use crate::row::{queue_rows, productivity_rows};
    use crate::CsvWriter;

    fn config() -> StaticConfig {
        StaticConfig {
            distance:       Matrix::filled(1, 2, 100.0),
            unloading_time: Matrix::filled(1, 1, 20.0),
            loading_time:   Matrix::filled(2, 1, 50.0),
            train_speed:    vec![1.0],
            train_load:     vec![3.0e6],
            train_count:    vec![3],
            initial_port:   PortId(0),
        }
    }

    #[test]
    fn integration_csv() {
        let dir = tempfile::tempdir().unwrap();
        let mut model = ModelBuilder::new(config()).build().unwrap();
        let mut sim = Simulator::new();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.simulate_with(&mut model, 2_000.0, &mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let count = |name: &str| {
            csv::Reader::from_path(dir.path().join(name)).unwrap().records().count()
        };
        assert_eq!(count("trace.csv") as u64, sim.events_executed());
        assert_eq!(count("productivity.csv"), model.deliveries().len());
        assert_eq!(count("queue.csv"), model.queues().all_entries().count());
    }

    #[test]
    fn trace_can_be_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let mut model = ModelBuilder::new(config()).policy(DispatchPolicy::Fixed).build().unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap()).with_trace(false);
        Simulator::new().simulate_with(&mut model, 1_000.0, &mut obs).unwrap();

        let n = csv::Reader::from_path(dir.path().join("trace.csv")).unwrap().records().count();
        assert_eq!(n, 0);
        let n = csv::Reader::from_path(dir.path().join("productivity.csv")).unwrap().records().count();
        assert!(n > 0);
    }

    #[test]
    fn row_helpers_mirror_model_queries() {
        let mut model = ModelBuilder::new(config()).build().unwrap();
        Simulator::new().simulate(&mut model, 1_500.0).unwrap();

        let prod = productivity_rows(&model);
        let series = model.productivity_series();
        assert_eq!(prod.len(), series.len());
        assert_eq!(prod.last().map(|r| r.cumulative_mass), series.last().map(|p| p.1));

        let rows = queue_rows(&model);
        let mean = rows.iter().map(|r| r.wait).sum::<f64>() / rows.len() as f64;
        assert!((mean - model.average_queue_time()).abs() < 1e-9);
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use rh_core::{Matrix, PortId, StaticConfig};
    use rh_model::ModelBuilder;
    use rh_sim::Simulator;

    use crate::{OutputWriter, SimOutputObserver, SqliteWriter};

    #[test]
    fn sqlite_schema_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let config = StaticConfig {
            distance:       Matrix::filled(1, 1, 100.0),
            unloading_time: Matrix::filled(1, 1, 20.0),
            loading_time:   Matrix::filled(1, 1, 50.0),
            train_speed:    vec![1.0],
            train_load:     vec![1.0e6],
            train_count:    vec![2],
            initial_port:   PortId(0),
        };
        let mut model = ModelBuilder::new(config).build().unwrap();
        let mut obs = SimOutputObserver::new(SqliteWriter::new(dir.path()).unwrap());
        Simulator::new().simulate_with(&mut model, 1_000.0, &mut obs).unwrap();
        assert!(obs.take_error().is_none());
        let mut writer = obs.into_writer();
        writer.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let deliveries: i64 = conn
            .query_row("SELECT COUNT(*) FROM productivity", [], |r| r.get(0))
            .unwrap();
        assert_eq!(deliveries as usize, model.deliveries().len());
        let phases: i64 = conn
            .query_row("SELECT COUNT(DISTINCT phase) FROM trace", [], |r| r.get(0))
            .unwrap();
        assert_eq!(phases, 4);
    }
}
