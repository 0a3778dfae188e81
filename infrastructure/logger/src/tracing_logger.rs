use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` adapter writing to `tracing` under a single target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "camera_search", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "camera_search", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "camera_search", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "camera_search", "{}", message);
    }
}
