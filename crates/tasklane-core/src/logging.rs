use crate::TasklaneResult;

/// Initialize tracing for an embedding application.
///
/// When `TASKLANE_DEBUG_LOG` names a file, everything down to DEBUG is
/// appended there; otherwise warnings and errors go to stderr. Library
/// crates only emit events and never install a subscriber themselves.
pub fn init() -> TasklaneResult<()> {
    if let Ok(log_path) = std::env::var("TASKLANE_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .init();
    }
    Ok(())
}
