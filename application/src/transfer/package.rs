use error_stack::Report;
use kernel::prelude::entity::{DestructPackage, Package};
use kernel::KernelError;
use serde::{Deserialize, Serialize};

use crate::transfer::RegionDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageDto {
    pub package_id: i32,
    pub name: String,
    pub regions: Vec<RegionDto>,
}

impl TryFrom<Package> for PackageDto {
    type Error = Report<KernelError>;

    fn try_from(value: Package) -> Result<Self, Self::Error> {
        let DestructPackage { id, name, regions } = value.into_destruct();
        let id = id.ok_or_else(|| {
            Report::new(KernelError::Validation(
                "package has not been persisted".to_string(),
            ))
        })?;
        Ok(Self {
            package_id: id.into(),
            name: name.into(),
            regions: regions.into_iter().map(RegionDto::from).collect(),
        })
    }
}

pub struct CreatePackageDto {
    pub name: String,
    pub regions: Vec<RegionDto>,
}

/// Full desired final membership for an existing package; the service
/// reconciles it against the persisted set.
pub struct UpdatePackageDto {
    pub package_id: i32,
    pub name: String,
    pub regions: Vec<RegionDto>,
}
