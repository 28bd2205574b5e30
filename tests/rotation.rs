use chrono::{DateTime, FixedOffset, NaiveDate, TimeDelta, TimeZone, Utc};
use sluglog::{Config, ConsoleTarget, Error, ManualClock, Registry, RollingFile, RotationPolicy, fields};
use std::fs::{self, File};
use std::path::Path;
use std::sync::Arc;
use std::time::SystemTime;
use tempfile::TempDir;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
}

fn fixed(instant: DateTime<Utc>) -> DateTime<FixedOffset> {
    instant.fixed_offset()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn registry(root: &Path, clock: Arc<ManualClock>, retention: usize) -> Registry {
    let mut config = Config::default();
    config.general.log_root = Some(root.display().to_string());
    config.console.enabled = false;
    config.rotation.retention = retention;
    Registry::new(&config).unwrap().with_clock(clock)
}

fn lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn window_is_the_date_at_midnight_boundary() {
    let policy = RotationPolicy::default();

    let before = at(2024, 5, 1, 23, 59, 59) + TimeDelta::milliseconds(999);
    assert_eq!(policy.window_of(&fixed(before)), date(2024, 5, 1));
    assert_eq!(policy.window_of(&fixed(at(2024, 5, 2, 0, 0, 0))), date(2024, 5, 2));
}

#[test]
fn window_respects_rotation_hour() {
    let policy = RotationPolicy::new(6, 14).unwrap();

    assert_eq!(policy.window_of(&fixed(at(2024, 5, 2, 5, 59, 59))), date(2024, 5, 1));
    assert_eq!(policy.window_of(&fixed(at(2024, 5, 2, 6, 0, 0))), date(2024, 5, 2));
}

#[test]
fn window_uses_the_instant_offset() {
    let policy = RotationPolicy::default();
    let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
    let instant = at(2024, 5, 1, 23, 0, 0).with_timezone(&plus_two);

    assert_eq!(policy.window_of(&instant), date(2024, 5, 2));
}

#[test]
fn rotation_hour_out_of_range() {
    assert!(matches!(
        RotationPolicy::new(24, 14),
        Err(Error::Configuration(_))
    ));
}

#[test]
fn boundary_splits_records_exactly() {
    let tmp = TempDir::new().unwrap();
    let clock = Arc::new(ManualClock::new(
        at(2024, 5, 1, 23, 59, 59) + TimeDelta::milliseconds(999),
    ));
    let registry = registry(tmp.path(), Arc::clone(&clock), 14);
    let logger = registry.logger("rot").unwrap();

    logger.info("before", fields! {});
    clock.advance(TimeDelta::milliseconds(1));
    logger.info("at", fields! {});
    clock.advance(TimeDelta::seconds(5));
    logger.info("after", fields! {});

    let active = logger.file_path().unwrap();
    let retired = active.with_file_name("rot.log.2024-05-01");

    let old = lines(&retired);
    let new = lines(active);
    assert_eq!(old.len(), 1);
    assert!(old[0].starts_with("2024-05-01 23:59:59.999 | INFO"));
    assert!(old[0].ends_with("- before"));
    assert_eq!(new.len(), 2);
    assert!(new[0].starts_with("2024-05-02 00:00:00.000 | INFO"));
    assert!(new[0].ends_with("- at"));
    assert!(new[1].ends_with("- after"));
}

#[test]
fn retention_keeps_newest_segments() {
    let tmp = TempDir::new().unwrap();
    let clock = Arc::new(ManualClock::new(at(2024, 1, 1, 12, 0, 0)));
    let registry = registry(tmp.path(), Arc::clone(&clock), 14);
    let logger = registry.logger("daily").unwrap();
    let active = logger.file_path().unwrap().to_path_buf();

    // 16 days of writes: 15 rotations, one more than retention.
    for day in 0..16 {
        logger.info(&format!("day {day}"), fields! { day = day });
        clock.advance(TimeDelta::days(1));
    }

    let policy = RotationPolicy::default();
    let retired = policy.retired_segments(&active).unwrap();
    assert_eq!(retired.len(), 14);
    assert!(!active.with_file_name("daily.log.2024-01-01").exists());
    assert_eq!(retired[0], active.with_file_name("daily.log.2024-01-02"));
    assert_eq!(retired[13], active.with_file_name("daily.log.2024-01-15"));
    assert_eq!(lines(&retired[0]).len(), 1);
    assert!(lines(&active)[0].ends_with("- day 15 | day=15"));
}

#[test]
fn zero_retention_keeps_everything() {
    let tmp = TempDir::new().unwrap();
    let clock = Arc::new(ManualClock::new(at(2024, 1, 1, 12, 0, 0)));
    let registry = registry(tmp.path(), Arc::clone(&clock), 0);
    let logger = registry.logger("all").unwrap();

    for _ in 0..5 {
        logger.info("tick", fields! {});
        clock.advance(TimeDelta::days(1));
    }

    let retired = RotationPolicy::new(0, 0)
        .unwrap()
        .retired_segments(logger.file_path().unwrap())
        .unwrap();
    assert_eq!(retired.len(), 4);
}

#[test]
fn clock_stepping_back_does_not_rotate() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("back.log");
    let mut file = RollingFile::open(&path, RotationPolicy::default(), &fixed(at(2024, 5, 2, 1, 0, 0))).unwrap();

    file.write_line(&fixed(at(2024, 5, 2, 1, 0, 0)), "first").unwrap();
    file.write_line(&fixed(at(2024, 5, 1, 23, 0, 0)), "stepped back").unwrap();

    assert_eq!(file.window(), date(2024, 5, 2));
    assert_eq!(lines(&path), vec!["first", "stepped back"]);
    assert!(RotationPolicy::default().retired_segments(&path).unwrap().is_empty());
}

#[test]
fn failed_retire_keeps_writing_to_the_active_segment() {
    let tmp = TempDir::new().unwrap();
    // Opens fine, but the dated retired name exceeds the 255-byte name limit.
    let path = tmp.path().join(format!("{}.log", "a".repeat(245)));
    let mut file = RollingFile::open(&path, RotationPolicy::default(), &fixed(at(2024, 5, 1, 12, 0, 0))).unwrap();

    file.write_line(&fixed(at(2024, 5, 1, 12, 0, 0)), "day1").unwrap();
    for n in 0..3 {
        file.write_line(&fixed(at(2024, 5, 2, 12, 0, n)), &format!("day2 {n}")).unwrap();
    }

    assert_eq!(file.window(), date(2024, 5, 2));
    assert_eq!(lines(&path), vec!["day1", "day2 0", "day2 1", "day2 2"]);
}

#[test]
fn long_logger_names_still_rotate() {
    let tmp = TempDir::new().unwrap();
    let clock = Arc::new(ManualClock::new(at(2024, 5, 1, 12, 0, 0)));
    let registry = registry(tmp.path(), Arc::clone(&clock), 14);
    let logger = registry.logger(&"a".repeat(245)).unwrap();

    logger.info("day1", fields! {});
    clock.advance(TimeDelta::days(1));
    logger.info("day2", fields! {});

    let active = logger.file_path().unwrap();
    let retired = RotationPolicy::default().retired_segments(active).unwrap();
    assert_eq!(retired.len(), 1);
    assert!(lines(&retired[0])[0].ends_with("- day1"));
    assert!(lines(active)[0].ends_with("- day2"));
}

#[test]
fn retired_name_collisions_get_a_sequence_suffix() {
    let tmp = TempDir::new().unwrap();
    let active = tmp.path().join("app.log");
    let policy = RotationPolicy::default();

    fs::write(tmp.path().join("app.log.2024-05-01"), "a").unwrap();
    fs::write(tmp.path().join("app.log.2024-05-01.1"), "b").unwrap();

    assert_eq!(
        policy.retired_path(&active, date(2024, 5, 1)),
        tmp.path().join("app.log.2024-05-01.2")
    );
}

#[test]
fn retired_segments_ignore_unrelated_files() {
    let tmp = TempDir::new().unwrap();
    let active = tmp.path().join("app.log");
    for name in [
        "app.log",
        "app.log.2024-05-03",
        "app.log.2024-05-01",
        "app.log.2024-05-01.1",
        "app.log.backup",
        "other.log.2024-05-01",
        "app.log.2024-13-45",
    ] {
        fs::write(tmp.path().join(name), "x").unwrap();
    }

    let retired = RotationPolicy::default().retired_segments(&active).unwrap();
    let names: Vec<_> = retired
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();

    assert_eq!(
        names,
        vec!["app.log.2024-05-01", "app.log.2024-05-01.1", "app.log.2024-05-03"]
    );
}

#[test]
fn prune_deletes_oldest_first() {
    let tmp = TempDir::new().unwrap();
    let active = tmp.path().join("app.log");
    for day in 1..=5 {
        fs::write(tmp.path().join(format!("app.log.2024-05-0{day}")), "x").unwrap();
    }

    let removed = RotationPolicy::new(0, 2).unwrap().prune(&active).unwrap();

    assert_eq!(removed.len(), 3);
    assert!(!tmp.path().join("app.log.2024-05-03").exists());
    assert!(tmp.path().join("app.log.2024-05-04").exists());
    assert!(tmp.path().join("app.log.2024-05-05").exists());
}

#[test]
fn stale_active_segment_is_retired_on_open() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("stale.log");
    fs::write(&path, "old line\n").unwrap();
    let modified: SystemTime = at(2024, 1, 1, 10, 0, 0).into();
    File::options()
        .write(true)
        .open(&path)
        .unwrap()
        .set_modified(modified)
        .unwrap();

    let mut file = RollingFile::open(&path, RotationPolicy::default(), &fixed(at(2024, 1, 3, 9, 0, 0))).unwrap();
    file.write_line(&fixed(at(2024, 1, 3, 9, 0, 0)), "new line").unwrap();

    assert_eq!(lines(&tmp.path().join("stale.log.2024-01-01")), vec!["old line"]);
    assert_eq!(lines(&path), vec!["new line"]);
}

#[test]
fn same_window_active_segment_is_appended() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("keep.log");
    fs::write(&path, "earlier\n").unwrap();

    // mtime is "now"; a clock far in the past never treats it as stale.
    let mut file = RollingFile::open(&path, RotationPolicy::default(), &fixed(at(2024, 1, 3, 9, 0, 0))).unwrap();
    file.write_line(&fixed(at(2024, 1, 3, 9, 0, 1)), "later").unwrap();

    assert_eq!(lines(&path), vec!["earlier", "later"]);
}

#[test]
fn rotation_reaches_console_and_file_in_order() {
    let tmp = TempDir::new().unwrap();
    let clock = Arc::new(ManualClock::new(at(2024, 5, 1, 23, 59, 59)));
    let (target, buffer) = ConsoleTarget::buffer();
    let mut config = Config::default();
    config.general.log_root = Some(tmp.path().display().to_string());
    config.console.colors = false;
    let registry = Registry::new(&config)
        .unwrap()
        .with_clock(Arc::clone(&clock) as Arc<dyn sluglog::Clock>)
        .with_console(target);
    let logger = registry.logger("both").unwrap();

    logger.info("one", fields! {});
    clock.advance(TimeDelta::seconds(1));
    logger.info("two", fields! {});

    let console = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
    let console: Vec<_> = console.lines().collect();
    assert_eq!(console.len(), 2);
    assert!(console[0].ends_with("- one"));
    assert!(console[1].ends_with("- two"));
    assert_eq!(
        lines(&logger.file_path().unwrap().with_file_name("both.log.2024-05-01")).len(),
        1
    );
}
