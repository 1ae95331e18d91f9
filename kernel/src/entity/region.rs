mod id;
mod name;
mod status;

pub use self::{id::*, name::*, status::*};
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A geographic unit a package can cover. `checked` is the editing
/// membership flag; `status` is only meaningful during reconciliation.
#[derive(Debug, Clone, Eq, Serialize, Deserialize, Destructure)]
pub struct Region {
    id: RegionId,
    name: RegionName,
    checked: bool,
    status: RegionStatus,
}

impl Region {
    pub fn new(id: RegionId, name: RegionName, checked: bool, status: RegionStatus) -> Self {
        Self {
            id,
            name,
            checked,
            status,
        }
    }

    pub fn id(&self) -> &RegionId {
        &self.id
    }

    pub fn name(&self) -> &RegionName {
        &self.name
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    pub fn status(&self) -> RegionStatus {
        self.status
    }

    pub fn with_status(self, status: RegionStatus) -> Self {
        Self { status, ..self }
    }
}

// Identity is the store-assigned id alone. The delta computation relies
// on this: two snapshots of the same region compare equal even when the
// display name or editing flags differ.
impl PartialEq for Region {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Hash for Region {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod test {
    use super::{Region, RegionId, RegionName, RegionStatus};

    #[test]
    fn equality_ignores_everything_but_the_id() {
        let left = Region::new(
            RegionId::new(1),
            RegionName::new("Kopaonik"),
            true,
            RegionStatus::Add,
        );
        let right = Region::new(
            RegionId::new(1),
            RegionName::new("Zlatibor"),
            false,
            RegionStatus::Unchanged,
        );
        assert_eq!(left, right);

        let other = Region::new(
            RegionId::new(2),
            RegionName::new("Kopaonik"),
            true,
            RegionStatus::Add,
        );
        assert_ne!(left, other);
    }
}
