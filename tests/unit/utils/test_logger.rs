use bassa_client::error::AppError;
use bassa_client::utils::logger::{file_dispatch, log_level, setup_file_logger, setup_logger};
use std::fs;
use tracing::Level;

#[test]
fn setup_logger_is_idempotent() {
    setup_logger();
    setup_logger();
}

#[test]
fn default_level_is_info() {
    if std::env::var("LOGLEVEL").is_err() {
        assert_eq!(log_level(), Level::INFO);
    }
}

#[test]
fn file_logger_reports_unopenable_path() {
    let err = setup_file_logger("/nonexistent-dir/bassa/bassa-log.log").unwrap_err();
    assert!(matches!(err, AppError::Io(_)));
    assert!(matches!(
        file_dispatch("/nonexistent-dir/bassa/bassa-log.log"),
        Err(AppError::Io(_))
    ));
}

#[test]
fn file_logger_appends_without_truncating() {
    let path = std::env::temp_dir().join(format!("bassa-log-{}.log", std::process::id()));
    fs::write(&path, "existing line\n").expect("seed log file");

    let first = file_dispatch(&path).expect("open log file");
    tracing::dispatcher::with_default(&first, || tracing::error!("first entry"));
    let second = file_dispatch(&path).expect("reopen log file");
    tracing::dispatcher::with_default(&second, || tracing::error!("second entry"));

    let contents = fs::read_to_string(&path).expect("read log file");
    fs::remove_file(&path).ok();

    assert!(contents.starts_with("existing line\n"));
    let first_at = contents.find("first entry").expect("first entry logged");
    let second_at = contents.find("second entry").expect("second entry logged");
    assert!(first_at < second_at);
    assert!(!contents.contains("\u{1b}["), "ANSI escapes in file log");
}
