mod record;
mod store;

pub use record::{VariableRecord, HISTORY_CAPACITY};
pub use store::VariableStore;

use serde::Serialize;

/// Outcome of a stored write, returned to the caller instead of being
/// pushed through a registered callback. Emitted even when the value
/// did not change; the caller decides whether that is notable.
#[derive(Debug, Clone, Serialize)]
pub struct ChangeEvent {
    pub name: String,
    pub old_value: String,
    pub new_value: String,
    /// True when this write created the record.
    pub created: bool,
    /// Caller-supplied line hint, informational only.
    pub line: usize,
}
