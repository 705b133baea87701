//! Logging
//!
//! Library code logs through [`Logger`], which emits a `tracing` event and
//! forwards the same message to an optional caller-supplied sink. The sink
//! is a no-op until one is installed and can be swapped at runtime.
//! Loading a browser list from a file happens before any tracker exists
//! and logs to `tracing` only.

use std::fmt;
use std::path::Path;
use std::sync::{Arc, RwLock};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Caller-supplied log sink receiving plain messages
pub type LogSink = Arc<dyn Fn(&str) + Send + Sync>;

/// Default filter when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "browse_happy=info";

/// Cloneable logging handle shared by the tracker and its components
#[derive(Clone, Default)]
pub struct Logger {
    sink: Arc<RwLock<Option<LogSink>>>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let installed = self.sink.read().map(|s| s.is_some()).unwrap_or(false);
        f.debug_struct("Logger")
            .field("sink_installed", &installed)
            .finish()
    }
}

impl Logger {
    /// Replaces the sink. Every clone of this logger sees the new sink.
    pub fn set_sink<F>(&self, sink: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        if let Ok(mut guard) = self.sink.write() {
            *guard = Some(Arc::new(sink));
        }
    }

    /// Removes the sink, restoring the no-op default
    pub fn clear_sink(&self) {
        if let Ok(mut guard) = self.sink.write() {
            *guard = None;
        }
    }

    pub fn debug(&self, message: &str) {
        tracing::debug!("{}", message);
        self.forward(message);
    }

    pub fn info(&self, message: &str) {
        tracing::info!("{}", message);
        self.forward(message);
    }

    pub fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
        self.forward(message);
    }

    pub fn error(&self, message: &str) {
        tracing::error!("{}", message);
        self.forward(message);
    }

    fn forward(&self, message: &str) {
        // Clone out of the lock so a sink may call back into the logger.
        let sink = self.sink.read().ok().and_then(|guard| guard.clone());
        if let Some(sink) = sink {
            sink(message);
        }
    }
}

/// Installs the global `tracing` subscriber.
///
/// With a `log_file` the output goes through a non-blocking file writer and
/// the returned guard must be held until shutdown. Without one, logs go to
/// stderr.
pub fn init_subscriber(log_file: Option<&Path>) -> std::io::Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let Some(log_file) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let directory = log_file.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(directory)?;
    let file_name = log_file
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "browse-happy.log".into());

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn capture(logger: &Logger) -> Arc<Mutex<Vec<String>>> {
        let messages = Arc::new(Mutex::new(Vec::new()));
        let sink_messages = messages.clone();
        logger.set_sink(move |msg| sink_messages.lock().unwrap().push(msg.to_string()));
        messages
    }

    #[test]
    fn default_logger_has_no_sink() {
        let logger = Logger::default();
        logger.info("nobody is listening");
        assert!(format!("{:?}", logger).contains("sink_installed: false"));
    }

    #[test]
    fn sink_receives_messages_of_every_level() {
        let logger = Logger::default();
        let messages = capture(&logger);

        logger.debug("one");
        logger.info("two");
        logger.warn("three");
        logger.error("four");

        assert_eq!(*messages.lock().unwrap(), vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn sink_is_shared_between_clones() {
        let logger = Logger::default();
        let clone = logger.clone();
        let messages = capture(&logger);

        clone.info("from clone");

        assert_eq!(*messages.lock().unwrap(), vec!["from clone"]);
    }

    #[test]
    fn sink_can_be_replaced_and_cleared() {
        let logger = Logger::default();
        let first = capture(&logger);
        logger.info("a");

        let second = capture(&logger);
        logger.info("b");

        logger.clear_sink();
        logger.info("c");

        assert_eq!(*first.lock().unwrap(), vec!["a"]);
        assert_eq!(*second.lock().unwrap(), vec!["b"]);
    }
}
