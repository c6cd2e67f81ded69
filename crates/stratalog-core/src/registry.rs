//! Registry of logger handles, one per component name.

use crate::levels::LevelTable;
use crate::logger::Logger;
use crate::sink::open_sink;
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use stratalog_types::{LogConfig, LogError, Result, Sink};
use tracing::{debug, info};

/// Level table and sink shared by every handle.
struct Backend {
    levels: Arc<LevelTable>,
    sink: Arc<dyn Sink>,
}

/// Cache of logger handles keyed by component name.
///
/// A registry is initialized exactly once with a level table and a sink.
/// After that, [`get`](Registry::get) returns the same `Arc<Logger>` for
/// the same name for the lifetime of the registry, including when several
/// threads ask for a new name at the same time.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use stratalog_core::{LevelTable, MemorySink, Registry};
///
/// let sink = MemorySink::new();
/// let levels = LevelTable::parse("WARNING,db=INFO").unwrap();
/// let registry = Registry::with_backend(levels, Arc::new(sink.clone()));
///
/// let logger = registry.get("db/pool");
/// logger.info("connected");
/// assert!(Arc::ptr_eq(&logger, &registry.get("db/pool")));
/// assert_eq!(sink.lines(), vec!["INFO db/pool  connected"]);
/// ```
pub struct Registry {
    backend: OnceCell<Backend>,
    loggers: Mutex<HashMap<String, Arc<Logger>>>,
}

impl Registry {
    /// Create an uninitialized registry.
    pub fn new() -> Self {
        Self {
            backend: OnceCell::new(),
            loggers: Mutex::new(HashMap::new()),
        }
    }

    /// Create a registry that is already initialized.
    pub fn with_backend(levels: LevelTable, sink: Arc<dyn Sink>) -> Self {
        let registry = Self::new();
        let _ = registry.backend.set(Backend {
            levels: Arc::new(levels),
            sink,
        });
        registry
    }

    /// Install the level table and sink.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::AlreadyInitialized`] on a second call; the level
    /// table cannot be replaced once handles may have been issued.
    pub fn initialize(&self, levels: LevelTable, sink: Arc<dyn Sink>) -> Result<()> {
        let entries = levels.len();
        self.backend
            .set(Backend {
                levels: Arc::new(levels),
                sink,
            })
            .map_err(|_| LogError::AlreadyInitialized)?;

        info!("Logging initialized with {} level entries", entries);
        Ok(())
    }

    /// Parse the config's level spec, open its sink and initialize.
    ///
    /// The spec is parsed before the sink is opened, so a bad spec never
    /// creates or truncates a log file.
    pub fn initialize_from_config(&self, config: &LogConfig) -> Result<()> {
        if self.is_initialized() {
            return Err(LogError::AlreadyInitialized);
        }
        let levels = LevelTable::parse(&config.loglevel)?;
        let sink = open_sink(&config.sink_target())?;
        self.initialize(levels, sink)
    }

    /// Whether a level table and sink have been installed.
    pub fn is_initialized(&self) -> bool {
        self.backend.get().is_some()
    }

    /// The installed level table.
    pub fn levels(&self) -> Option<&LevelTable> {
        self.backend.get().map(|backend| backend.levels.as_ref())
    }

    /// Get or create the handle for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::NotInitialized`] before initialization.
    pub fn try_get(&self, name: &str) -> Result<Arc<Logger>> {
        let backend = self.backend.get().ok_or(LogError::NotInitialized)?;

        let mut loggers = self.loggers.lock();
        if let Some(logger) = loggers.get(name) {
            return Ok(Arc::clone(logger));
        }

        debug!("Creating logger for component '{}'", name);
        let logger = Arc::new(Logger::new(
            name,
            Arc::clone(&backend.levels),
            Arc::clone(&backend.sink),
        ));
        loggers.insert(name.to_string(), Arc::clone(&logger));
        Ok(logger)
    }

    /// Get or create the handle for `name`.
    ///
    /// # Panics
    ///
    /// Panics if the registry has not been initialized. Using logging
    /// before startup has configured it is a programming error.
    pub fn get(&self, name: &str) -> Arc<Logger> {
        match self.try_get(name) {
            Ok(logger) => logger,
            Err(e) => panic!("{}", e),
        }
    }

    /// Number of cached handles.
    pub fn len(&self) -> usize {
        self.loggers.lock().len()
    }

    /// Whether no handle has been created yet.
    pub fn is_empty(&self) -> bool {
        self.loggers.lock().is_empty()
    }

    /// Names of the cached handles, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.lock().keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use std::sync::Barrier;
    use std::thread;
    use tempfile::TempDir;

    fn registry(spec: &str) -> (Registry, MemorySink) {
        let sink = MemorySink::new();
        let levels = LevelTable::parse(spec).unwrap();
        (Registry::with_backend(levels, Arc::new(sink.clone())), sink)
    }

    #[test]
    fn test_same_name_same_handle() {
        let (registry, _) = registry("INFO");

        let a = registry.get("foo/bar");
        let b = registry.get("foo/bar");
        let c = registry.get("foo");

        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), vec!["foo", "foo/bar"]);
    }

    #[test]
    fn test_concurrent_first_request_same_handle() {
        let (registry, _) = registry("INFO");
        let registry = Arc::new(registry);
        let barrier = Arc::new(Barrier::new(16));

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let registry = Arc::clone(&registry);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    registry.get("network/tcp")
                })
            })
            .collect();

        let loggers: Vec<Arc<Logger>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(loggers.iter().all(|l| Arc::ptr_eq(l, &loggers[0])));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_handles_share_sink() {
        let (registry, sink) = registry("WARNING,db=DEBUG");

        registry.get("db").debug("query");
        registry.get("http").info("dropped");
        registry.get("http").warning("slow");

        assert_eq!(sink.lines(), vec!["DEBUG db       query", "WARNING http     slow"]);
    }

    #[test]
    fn test_try_get_before_initialize() {
        let registry = Registry::new();
        assert!(!registry.is_initialized());
        assert!(matches!(registry.try_get("foo"), Err(LogError::NotInitialized)));
        assert!(registry.is_empty());
    }

    #[test]
    #[should_panic(expected = "call initialize() first")]
    fn test_get_before_initialize_panics() {
        Registry::new().get("foo");
    }

    #[test]
    fn test_initialize_once() {
        let registry = Registry::new();
        registry
            .initialize(LevelTable::default(), Arc::new(MemorySink::new()))
            .unwrap();
        assert!(registry.is_initialized());

        let err = registry
            .initialize(LevelTable::default(), Arc::new(MemorySink::new()))
            .unwrap_err();
        assert!(matches!(err, LogError::AlreadyInitialized));
    }

    #[test]
    fn test_initialize_from_config_bad_spec() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app.log");
        let config = LogConfig::new("foo=NOPE").with_logfile(&path);

        let registry = Registry::new();
        let err = registry.initialize_from_config(&config).unwrap_err();

        assert!(err.is_config_error());
        assert!(!registry.is_initialized());
        assert!(registry.levels().is_none());
        assert!(!path.exists());
    }

    #[test]
    fn test_initialize_from_config_file_sink() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app.log");
        let config = LogConfig::new("SEVERE,net=INFO").with_logfile(&path);

        let registry = Registry::new();
        registry.initialize_from_config(&config).unwrap();
        assert_eq!(registry.levels().unwrap().len(), 2);

        registry.get("net/tcp").info("listening");
        registry.get("disk").info("ignored");

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with(" INFO net/tcp  listening"));
    }
}
