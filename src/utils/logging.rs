//! Logging utilities
//!
//! Provides logging setup and configuration.

/// Setup logging for the credential service.
///
/// Honours `RUST_LOG`. Later calls are no-ops, so tests may call it freely.
pub fn setup_logging() {
    let _ = env_logger::builder().is_test(cfg!(test)).try_init();
}
