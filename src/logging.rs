use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Enable verbose (DEBUG) logging
/// * `log_file` - Optional path to log file. If None, logs only to stderr
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("geoql={}", default_level)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    let log_file = log_file.filter(|log_path| match log_path.parent() {
        Some(parent) => match std::fs::create_dir_all(parent) {
            Ok(()) => true,
            Err(e) => {
                eprintln!(
                    "Warning: cannot create log directory {}: {}; logging to stderr only",
                    parent.display(),
                    e
                );
                false
            }
        },
        None => true,
    });

    if let Some(log_path) = log_file {
        let file_appender = tracing_appender::rolling::daily(
            log_path
                .parent()
                .unwrap_or_else(|| std::path::Path::new(".")),
            log_path
                .file_name()
                .unwrap_or_else(|| std::ffi::OsStr::new("geoql.log")),
        );

        let file_layer = fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .json();

        // A second init (tests, repeated CLI calls in-process) must not panic
        let _ = subscriber.with(file_layer).try_init();
    } else {
        let _ = subscriber.try_init();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Once;
    use tempfile::TempDir;

    static INIT: Once = Once::new();

    fn init_test_logging() {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_test_writer()
                .with_max_level(tracing::Level::DEBUG)
                .try_init();
        });
    }

    #[test]
    fn test_init_is_idempotent() {
        init_test_logging();
        // The global subscriber is already set; this must be a no-op
        super::init(true, None);
        super::init(false, None);
    }

    #[test]
    fn test_init_with_file_creates_parent_directory() {
        init_test_logging();
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("logs").join("geoql.log");

        super::init(false, Some(log_path.clone()));

        assert!(log_path.parent().unwrap().exists());
    }

    #[test]
    fn test_init_with_unusable_log_directory_falls_back_to_stderr() {
        init_test_logging();
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, "file").unwrap();
        let log_path = blocker.join("geoql.log");

        super::init(false, Some(log_path.clone()));

        assert!(!log_path.exists());
        assert!(blocker.is_file());
    }
}
