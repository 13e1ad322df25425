mod common;

use common::dump_body;
use common::mount;
use common::RamFlash;
use common::Sensor;
use common::Setpoint;
use common::Terminal;
use embassy_futures::block_on;
use step_logger::FlashFile;
use step_logger::LogRecord;
use step_logger::LogStore;
use step_logger::LoggerConfig;
use step_logger::StepLogger;
use step_logger::LOG_HEADER;

const CONFIG: LoggerConfig = LoggerConfig {
    sampling_interval_ms: 100,
    initial_wait_ms: 3000,
    setpoint_voltage: 1.5,
    max_file_size: 1_000_000,
};

type Logger = StepLogger<Sensor, Setpoint, FlashFile<RamFlash>>;

fn logger(config: LoggerConfig, sectors: usize) -> Logger {
    StepLogger::new(config, Sensor(1000), Setpoint::default(), Some(mount(sectors)))
}

/// Ticks every `step_ms` from `from` up to and including `to`.
fn run(logger: &mut Logger, from: u64, to: u64, step_ms: usize, terminal: &mut Terminal) {
    for now in (from..=to).step_by(step_ms) {
        block_on(logger.tick(now, None, terminal));
    }
}

fn press(logger: &mut Logger, now: u64, key: u8, terminal: &mut Terminal) -> String {
    block_on(logger.tick(now, Some(key), terminal));
    terminal.take()
}

fn records(body: &str) -> Vec<(u64, String)> {
    body.lines()
        .skip(1)
        .map(|line| {
            let mut fields = line.split(',');
            let t = fields.next().unwrap().parse().unwrap();
            let setpoint = fields.next().unwrap().to_string();
            (t, setpoint)
        })
        .collect()
}

#[test]
fn baseline_then_step() {
    let mut logger = logger(CONFIG, 4);
    let mut terminal = Terminal::default();

    press(&mut logger, 0, b'g', &mut terminal);
    run(&mut logger, 50, 5000, 50, &mut terminal);
    assert!(terminal.take().contains(">>> STEP APPLIED! <<<\n"));
    assert_eq!(logger.state().sample_count, 50);

    let dump = press(&mut logger, 5010, b'p', &mut terminal);
    let body = dump_body(&dump);
    assert!(body.starts_with(LOG_HEADER));

    let rows = records(body);
    assert_eq!(rows.len(), 50);
    for (i, (t, setpoint)) in rows.iter().enumerate() {
        assert_eq!(*t, (i as u64 + 1) * 100);
        let expected = if *t < 3000 { "0.0000" } else { "1.5000" };
        assert_eq!(setpoint, expected, "record at {} ms", t);
    }
    assert!(body.contains("\n2900,0.0000,0.8059\n3000,1.5000,0.8059\n"));
}

#[test]
fn second_go_is_rejected_until_reset() {
    let mut logger = logger(CONFIG, 4);
    let mut terminal = Terminal::default();

    press(&mut logger, 0, b'g', &mut terminal);
    run(&mut logger, 100, 3500, 100, &mut terminal);
    let count = logger.state().sample_count;

    let out = press(&mut logger, 3550, b'g', &mut terminal);
    assert_eq!(out, "Step already applied. Press 'r' to reset first.\n");
    assert_eq!(logger.state().step_start_ms, 0);
    assert_eq!(logger.state().sample_count, count);

    press(&mut logger, 3600, b'r', &mut terminal);
    assert_eq!(logger.output().codes.last(), Some(&0));

    let out = press(&mut logger, 10_000, b'g', &mut terminal);
    assert!(out.starts_with("Data file cleared\n"));
    assert_eq!(logger.state().step_start_ms, 10_000);

    run(&mut logger, 10_100, 10_300, 100, &mut terminal);
    let dump = press(&mut logger, 10_310, b'p', &mut terminal);
    let rows = records(dump_body(&dump));
    let times: Vec<u64> = rows.iter().map(|(t, _)| *t).collect();
    assert_eq!(times, vec![0, 100, 200, 300]);
}

#[test]
fn print_pauses_logging() {
    let mut logger = logger(CONFIG, 4);
    let mut terminal = Terminal::default();

    press(&mut logger, 0, b'g', &mut terminal);
    run(&mut logger, 100, 1000, 100, &mut terminal);
    press(&mut logger, 1050, b'p', &mut terminal);
    assert!(!logger.state().logging_enabled);

    let before = logger.store().info().unwrap();
    run(&mut logger, 1100, 2000, 100, &mut terminal);
    assert_eq!(logger.store().info().unwrap(), before);
    assert_eq!(before.record_count, 10);

    let out = press(&mut logger, 2050, b's', &mut terminal);
    assert!(out.contains("Logging ENABLED\n"));
    assert_eq!(logger.store().info().unwrap().record_count, 11);
}

#[test]
fn capacity_limit_stops_logging() {
    let line_len = LogRecord::new(100, 0.0, 0.0).to_line().unwrap().len();
    let config = LoggerConfig { max_file_size: LOG_HEADER.len() + 3 * line_len, ..CONFIG };
    let mut logger = logger(config, 4);
    let mut terminal = Terminal::default();

    press(&mut logger, 0, b'g', &mut terminal);
    run(&mut logger, 100, 500, 100, &mut terminal);

    let out = terminal.take();
    assert_eq!(out.matches("WARNING: Max file size reached. Stopping logging.\n").count(), 1);
    assert!(!logger.state().logging_enabled);
    assert_eq!(logger.state().sample_count, 3);
    assert_eq!(logger.store().info().unwrap().record_count, 3);
}

#[test]
fn full_region_reports_write_error() {
    let config = LoggerConfig { sampling_interval_ms: 1, ..CONFIG };
    let mut logger = logger(config, 1);
    let mut terminal = Terminal::default();

    press(&mut logger, 0, b'g', &mut terminal);
    run(&mut logger, 1, 400, 1, &mut terminal);

    let out = terminal.take();
    assert!(out.contains("ERROR: Could not open file for writing\n"));
    assert!(!logger.state().logging_enabled);
    let info = logger.store().info().unwrap();
    assert!(info.file_size <= common::SECTOR);
    assert_eq!(info.record_count as u32, logger.state().sample_count);
}

#[test]
fn info_reports_storage() {
    let mut logger = logger(CONFIG, 4);
    let mut terminal = Terminal::default();

    press(&mut logger, 0, b'g', &mut terminal);
    run(&mut logger, 100, 200, 100, &mut terminal);

    let out = press(&mut logger, 250, b'i', &mut terminal);
    let size = logger.store().info().unwrap().file_size;
    assert!(out.contains(&format!("Storage Total: {} bytes\n", 4 * common::SECTOR)));
    assert!(out.contains(&format!("Data file size: {} bytes\n", size)));
    assert!(out.contains("Total samples: 2\n"));
}

#[test]
fn log_survives_remount() {
    let mut store = LogStore::new(Some(mount(2)), CONFIG.max_file_size);
    store.append(&LogRecord::new(0, 0.0, 1.0)).unwrap();
    store.append(&LogRecord::new(100, 1.5, 1.1)).unwrap();
    let size = store.size().unwrap();

    let flash = store.release().unwrap().release();
    let file = FlashFile::mount(flash, 0, 2 * common::SECTOR as u32, LOG_HEADER.as_bytes()).unwrap();
    let mut store = LogStore::new(Some(file), CONFIG.max_file_size);
    assert_eq!(store.size().unwrap(), size);
    assert_eq!(store.count_records().unwrap(), 2);
}

#[test]
fn noise_on_the_line_is_ignored() {
    let mut logger = logger(CONFIG, 4);
    let mut terminal = Terminal::default();
    let before = *logger.state();

    for key in *b"\r\nxyz 123!" {
        assert_eq!(press(&mut logger, 10, key, &mut terminal), "");
    }
    assert_eq!(*logger.state(), before);
}
