//! Logger initialization.
//!
//! Plain lines (`target [LEVEL] message`, level colored) for terminals, or one
//! JSON object per line for log collectors.

use std::io::Write;

use colored::*;
use log::{Level, LevelFilter, Record};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Dependencies whose logs are capped regardless of the requested level.
const NOISY_MODULES: [(&str, LevelFilter); 5] = [
    ("html5ever", LevelFilter::Error),
    ("selectors", LevelFilter::Warn),
    ("sqlx", LevelFilter::Warn),
    ("reqwest", LevelFilter::Info),
    ("hyper", LevelFilter::Info),
];

/// Initializes the logger with the specified level and format.
///
/// `RUST_LOG` is read first; `level` then applies to this crate and as the
/// global default, with [`NOISY_MODULES`] capped on top.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// page-analyzer --log-level debug check 1
/// RUST_LOG=page_analyzer=debug,reqwest=info page-analyzer check 1
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    for (module, cap) in NOISY_MODULES {
        builder.filter_module(module, cap);
    }
    builder.filter_module("page_analyzer", level);

    match format {
        LogFormat::Json => builder.format(|buf, record| {
            writeln!(
                buf,
                "{}",
                json_line(chrono::Utc::now().timestamp_millis(), record)
            )
        }),
        LogFormat::Plain => builder.format(|buf, record| writeln!(buf, "{}", plain_line(record))),
    };

    builder.try_init()?;
    Ok(())
}

fn json_line(ts_millis: i64, record: &Record<'_>) -> String {
    serde_json::json!({
        "ts": ts_millis,
        "level": record.level().as_str(),
        "target": record.target(),
        "msg": record.args().to_string(),
    })
    .to_string()
}

fn plain_line(record: &Record<'_>) -> String {
    let level = record.level().to_string();
    let level = match record.level() {
        Level::Error => level.red(),
        Level::Warn => level.yellow(),
        Level::Info => level.green(),
        Level::Debug => level.blue(),
        Level::Trace => level.purple(),
    };
    format!("{} [{}] {}", record.target().cyan(), level, record.args())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_line_is_one_parseable_object() {
        let line = json_line(
            1_704_067_200_000,
            &Record::builder()
                .args(format_args!("Check of \"https://a.example\" failed\nretry later"))
                .level(Level::Warn)
                .target("page_analyzer::fetch::engine")
                .build(),
        );

        assert!(!line.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["ts"], 1_704_067_200_000i64);
        assert_eq!(value["level"], "WARN");
        assert_eq!(value["target"], "page_analyzer::fetch::engine");
        assert_eq!(
            value["msg"],
            "Check of \"https://a.example\" failed\nretry later"
        );
    }

    #[test]
    fn test_plain_line_has_target_level_and_message() {
        let line = plain_line(
            &Record::builder()
                .args(format_args!("Registered https://a.example with id 1"))
                .level(Level::Info)
                .target("page_analyzer::app::registry")
                .build(),
        );

        assert!(line.contains("page_analyzer::app::registry"));
        assert!(line.contains("INFO"));
        assert!(line.ends_with("Registered https://a.example with id 1"));
    }

    #[test]
    fn test_second_init_reports_error() {
        // Only the first initialization in the process can succeed
        let _ = init_logger_with(LevelFilter::Warn, LogFormat::Json);
        let second = init_logger_with(LevelFilter::Warn, LogFormat::Plain);
        assert!(matches!(second, Err(InitializationError::LoggerError(_))));
    }
}
