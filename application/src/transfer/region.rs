use kernel::prelude::entity::{DestructRegion, Region, RegionId, RegionName, RegionStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionDto {
    pub region_id: i32,
    pub name: String,
    pub checked: bool,
}

impl From<Region> for RegionDto {
    fn from(value: Region) -> Self {
        let DestructRegion {
            id,
            name,
            checked,
            status: _,
        } = value.into_destruct();
        Self {
            region_id: id.into(),
            name: name.into(),
            checked,
        }
    }
}

// Submitted regions always enter a reconciliation pass untagged; the
// delta engine assigns the transient status.
impl From<RegionDto> for Region {
    fn from(value: RegionDto) -> Self {
        Region::new(
            RegionId::new(value.region_id),
            RegionName::new(value.name),
            value.checked,
            RegionStatus::Unchanged,
        )
    }
}
