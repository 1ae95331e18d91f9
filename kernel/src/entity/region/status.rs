use serde::{Deserialize, Serialize};

/// Membership tag assigned while a package's region set is being
/// reconciled. Never persisted; a region tagged `Add` or `Delete` only
/// exists for the duration of one reconciliation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RegionStatus {
    #[default]
    Unchanged,
    Add,
    Delete,
}
