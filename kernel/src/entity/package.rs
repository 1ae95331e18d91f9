mod id;
mod name;

pub use self::{id::*, name::*};
use crate::entity::Region;
use destructure::Destructure;
use serde::{Deserialize, Serialize};

/// A named bundle of regions sold together. `id` is `None` until the
/// store assigns one. A persisted package always covers at least one
/// region; the reconciliation services enforce that invariant.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Destructure)]
pub struct Package {
    id: Option<PackageId>,
    name: PackageName,
    regions: Vec<Region>,
}

impl Package {
    pub fn new(id: Option<PackageId>, name: PackageName, regions: Vec<Region>) -> Self {
        Self { id, name, regions }
    }

    pub fn id(&self) -> Option<&PackageId> {
        self.id.as_ref()
    }

    pub fn name(&self) -> &PackageName {
        &self.name
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn with_regions(self, regions: Vec<Region>) -> Self {
        Self { regions, ..self }
    }
}
