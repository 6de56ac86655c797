// vidscan-cli/src/logging.rs
//
// Logging helpers. The logging backend itself is env_logger, initialized
// in main.rs and controlled through the RUST_LOG environment variable
// (default: info).

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS",
/// used for default report file names.
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}
