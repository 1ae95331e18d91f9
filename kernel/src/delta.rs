use error_stack::Report;

use crate::entity::{Region, RegionStatus};
use crate::KernelError;

/// Membership changes needed to move a package from its persisted
/// region set to a newly submitted one. Regions present on both sides
/// are untouched and appear in neither list.
#[derive(Debug, Clone, Default)]
pub struct RegionDelta {
    to_add: Vec<Region>,
    to_delete: Vec<Region>,
}

impl RegionDelta {
    pub fn to_add(&self) -> &[Region] {
        &self.to_add
    }

    pub fn to_delete(&self) -> &[Region] {
        &self.to_delete
    }

    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_delete.is_empty()
    }
}

/// Computes the symmetric difference between the persisted membership
/// and the submitted one, keyed on region identity alone. Pure over its
/// inputs; the returned regions are freshly tagged clones, the caller's
/// collections are never mutated.
///
/// An empty submission is rejected up front: applying it would leave
/// the package with zero regions.
pub fn compute_delta(
    current: &[Region],
    submitted: &[Region],
) -> error_stack::Result<RegionDelta, KernelError> {
    if submitted.is_empty() {
        return Err(Report::new(KernelError::Validation(
            "package must contain at least one region".to_string(),
        )));
    }

    // Region equality is id-only, so `contains` is a membership test.
    let to_add = submitted
        .iter()
        .filter(|region| !current.contains(region))
        .map(|region| region.clone().with_status(RegionStatus::Add))
        .collect();
    let to_delete = current
        .iter()
        .filter(|region| !submitted.contains(region))
        .map(|region| region.clone().with_status(RegionStatus::Delete))
        .collect();

    Ok(RegionDelta { to_add, to_delete })
}
