//! Assembly execution records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Audit record for a single recipe application. Returned to the caller,
/// never stored -- the director stays stateless between calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssemblyReport {
    /// UUIDv7 run ID (time-sortable).
    pub run_id: Uuid,
    /// Name of the recipe that was applied.
    pub recipe: String,
    /// Number of recipe data steps interpreted. The director's own leading
    /// reset is not counted, so this mirrors the recipe definition.
    pub steps_applied: usize,
    /// When the application started.
    pub started_at: DateTime<Utc>,
    /// When the application finished.
    pub finished_at: DateTime<Utc>,
}
