//! Level spec parsing and hierarchical threshold lookup.
//!
//! A level spec is a comma-separated list of clauses. A clause is either a
//! bare severity, which sets the default threshold, or
//! `component=severity`:
//!
//! ```text
//! WARNING,net=INFO,net/tcp/handshake=DEBUG
//! ```
//!
//! Components are `/`-separated paths. A component without an entry of its
//! own takes the threshold of its nearest configured ancestor, and finally
//! the default.
//!
//! ## Example
//!
//! ```
//! use stratalog_core::levels::LevelTable;
//! use stratalog_types::Severity;
//!
//! let table = LevelTable::parse("WARNING,foo=DEBUG,foo/bar=SEVERE").unwrap();
//! assert_eq!(table.resolve("foo/bar"), Severity::Severe);
//! assert_eq!(table.resolve("foo/whatnot"), Severity::Debug);
//! assert_eq!(table.resolve("bar"), Severity::Warning);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;
use stratalog_types::{LogError, Result, Severity};

/// Key of the root entry.
pub const ROOT: &str = "";

/// Default threshold when the spec has no bare severity clause.
pub const DEFAULT_LEVEL: Severity = Severity::Warning;

/// Mapping from component name to minimum severity.
///
/// The root entry is held separately from the per-component entries, so a
/// table always has one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelTable {
    default: Severity,
    components: HashMap<String, Severity>,
}

impl LevelTable {
    /// Create a table with only a root entry.
    pub fn with_default(default: Severity) -> Self {
        Self {
            default,
            components: HashMap::new(),
        }
    }

    /// Parse a level spec.
    ///
    /// Later clauses for the same component overwrite earlier ones. Empty
    /// clauses are skipped, so `""` parses to the bare default.
    ///
    /// # Errors
    ///
    /// Fails on the first unknown severity name or on a clause with more
    /// than one `=`. No table is produced in that case.
    pub fn parse(spec: &str) -> Result<Self> {
        let mut table = Self::default();

        for clause in spec.split(',') {
            if clause.trim().is_empty() {
                continue;
            }

            let parts: Vec<&str> = clause.split('=').collect();
            let (component, raw_level) = match parts.as_slice() {
                [level] => (ROOT, *level),
                [component, level] => (component.trim(), *level),
                _ => {
                    return Err(LogError::MalformedClause {
                        clause: clause.to_string(),
                    })
                }
            };

            let level: Severity = raw_level.trim().parse()?;
            table.set(component, level);
        }

        Ok(table)
    }

    /// Set the threshold for a component. `""` sets the default.
    pub fn set(&mut self, component: &str, level: Severity) {
        if component == ROOT {
            self.default = level;
        } else {
            self.components.insert(component.to_string(), level);
        }
    }

    /// Exact lookup, without walking up the hierarchy.
    pub fn get(&self, component: &str) -> Option<Severity> {
        if component == ROOT {
            Some(self.default)
        } else {
            self.components.get(component).copied()
        }
    }

    /// The threshold of the root entry.
    pub fn default_level(&self) -> Severity {
        self.default
    }

    /// Effective threshold for `component`.
    ///
    /// Tries the component itself, then each ancestor from the nearest
    /// outwards, then the default. Never fails.
    pub fn resolve(&self, component: &str) -> Severity {
        let mut current = component;
        loop {
            if let Some(level) = self.get(current) {
                return level;
            }
            match parent(current) {
                Some(up) => current = up,
                None => return self.default,
            }
        }
    }

    /// Whether a message at `severity` from `component` would be written.
    pub fn is_enabled(&self, component: &str, severity: Severity) -> bool {
        severity.is_enabled_at(self.resolve(component))
    }

    /// Number of entries, the root entry included.
    pub fn len(&self) -> usize {
        self.components.len() + 1
    }

    /// Always false; the root entry is always present.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// All entries sorted by component name, root first.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Severity)> {
        let sorted: BTreeMap<&str, Severity> = self
            .components
            .iter()
            .map(|(name, level)| (name.as_str(), *level))
            .collect();

        std::iter::once((ROOT, self.default)).chain(sorted)
    }
}

impl Default for LevelTable {
    fn default() -> Self {
        Self::with_default(DEFAULT_LEVEL)
    }
}

impl FromStr for LevelTable {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for LevelTable {
    /// Renders the table back into level spec syntax.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (component, level)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            if component == ROOT {
                write!(f, "{}", level)?;
            } else {
                write!(f, "{}={}", component, level)?;
            }
        }
        Ok(())
    }
}

/// Parent of a component: everything before the last `/`.
///
/// Returns `None` when there is no `/`, or when the only candidate is a
/// leading `/` at index 0. Lookup then falls back to the root entry.
pub fn parent(component: &str) -> Option<&str> {
    match component.rfind('/') {
        Some(pos) if pos > 0 => Some(&component[..pos]),
        _ => None,
    }
}
