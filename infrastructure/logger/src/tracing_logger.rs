use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards use-case log lines to the global `tracing` subscriber.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "chef_community", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "chef_community", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "chef_community", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "chef_community", "{}", message);
    }
}
