//! Singleton: one process-wide database handle.
//!
//! [`Database::instance`] hands out the same `&'static Database` to every
//! caller. `OnceLock` does the lazy, thread-safe initialization; the
//! private constructor keeps any second instance from existing.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};

static INSTANCE: OnceLock<Database> = OnceLock::new();

/// The process-wide database connection.
#[derive(Debug)]
pub struct Database {
    queries_run: AtomicU64,
}

impl Database {
    fn new() -> Self {
        Self {
            queries_run: AtomicU64::new(0),
        }
    }

    /// Returns the unique instance, creating it on first access.
    pub fn instance() -> &'static Database {
        INSTANCE.get_or_init(Database::new)
    }

    /// Runs a statement and returns its echo.
    pub fn query(&self, statement: &str) -> String {
        self.queries_run.fetch_add(1, Ordering::Relaxed);
        format!("executed: {statement}")
    }

    /// How many statements this instance has run so far.
    pub fn queries_run(&self) -> u64 {
        self.queries_run.load(Ordering::Relaxed)
    }
}
