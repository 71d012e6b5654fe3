use crmlite_jobs::config::DEFAULT_MAX_LOG_BYTES;
use crmlite_jobs::JobLog;
use std::fs;
use std::path::Path;

fn backup_files(dir: &Path, original_name: &str) -> Vec<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name != original_name)
        .collect()
}

#[test]
fn oversized_log_is_rotated_to_a_timestamped_backup_before_appending() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("low_stock_updates_log.txt");

    // One byte over the default ceiling.
    let oversized = vec![b'x'; (DEFAULT_MAX_LOG_BYTES + 1) as usize];
    fs::write(&path, &oversized).unwrap();

    let mut log = JobLog::open(&path, DEFAULT_MAX_LOG_BYTES).unwrap();
    log.info("fresh run line");
    log.flush().unwrap();

    let backups = backup_files(dir.path(), "low_stock_updates_log.txt");
    assert_eq!(backups.len(), 1, "expected one rotated backup: {backups:?}");
    let backup_name = &backups[0];
    assert!(backup_name.starts_with("low_stock_updates_log."));
    assert!(backup_name.ends_with(".log"));

    let backup_content = fs::read(dir.path().join(backup_name)).unwrap();
    assert_eq!(backup_content.len(), oversized.len());

    // The original path starts fresh and only carries the new run's lines.
    let fresh = fs::read_to_string(&path).unwrap();
    assert!(fresh.len() < 128);
    assert!(fresh.contains(" - INFO - fresh run line"));
}

#[test]
fn log_exactly_at_the_ceiling_is_not_rotated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("job.txt");

    fs::write(&path, vec![b'x'; 512]).unwrap();

    let mut log = JobLog::open(&path, 512).unwrap();
    log.info("appended");
    drop(log);

    assert!(backup_files(dir.path(), "job.txt").is_empty());
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("xxxx"));
    assert!(content.contains(" - INFO - appended"));
}

#[test]
fn missing_log_file_is_created_without_a_backup() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("job.txt");

    let mut log = JobLog::open(&path, 512).unwrap();
    log.info("first ever line");
    drop(log);

    assert!(path.exists());
    assert!(backup_files(dir.path(), "job.txt").is_empty());
}

#[test]
fn rotation_uses_a_small_override_ceiling() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("job.txt");

    fs::write(&path, vec![b'y'; 1025]).unwrap();

    let _log = JobLog::open(&path, 1024).unwrap();

    let backups = backup_files(dir.path(), "job.txt");
    assert_eq!(backups.len(), 1);
}
