use error_stack::Report;

use kernel::interface::query::{PackageQuery, RegionQuery};
use kernel::interface::update::PackageModifier;
use kernel::prelude::entity::{
    Package, PackageId, PackageName, Region, RegionId, RegionName, RegionStatus,
};
use kernel::KernelError;

use crate::database::memory::MemoryTransaction;

pub struct MemoryPackageRepository;

#[async_trait::async_trait]
impl PackageQuery<MemoryTransaction> for MemoryPackageRepository {
    async fn select_all(
        &self,
        con: &mut MemoryTransaction,
    ) -> error_stack::Result<Vec<Package>, KernelError> {
        Ok(con
            .working
            .packages
            .iter()
            .map(|(package_id, name)| {
                Package::new(Some(PackageId::new(*package_id)), name.clone(), Vec::new())
            })
            .collect())
    }
}

#[async_trait::async_trait]
impl PackageModifier<MemoryTransaction> for MemoryPackageRepository {
    async fn create(
        &self,
        con: &mut MemoryTransaction,
        name: &PackageName,
    ) -> error_stack::Result<PackageId, KernelError> {
        let package_id = con.working.next_id();
        con.working.packages.insert(package_id, name.clone());
        Ok(PackageId::new(package_id))
    }

    async fn update_name(
        &self,
        con: &mut MemoryTransaction,
        package_id: &PackageId,
        name: &PackageName,
    ) -> error_stack::Result<(), KernelError> {
        let key = i32::from(*package_id);
        if !con.working.packages.contains_key(&key) {
            return Err(Report::new(KernelError::Persistence)
                .attach_printable(format!("no package with id {key}")));
        }
        con.working.packages.insert(key, name.clone());
        Ok(())
    }

    async fn associate_region(
        &self,
        con: &mut MemoryTransaction,
        package_id: &PackageId,
        region_id: &RegionId,
    ) -> error_stack::Result<(), KernelError> {
        let pair = (i32::from(*package_id), i32::from(*region_id));
        if !con.working.regions.contains_key(&pair.1) {
            return Err(Report::new(KernelError::Persistence)
                .attach_printable(format!("no region with id {}", pair.1)));
        }
        // Primary key on (package_id, region_id), like the real store.
        if con.working.package_regions.contains(&pair) {
            return Err(Report::new(KernelError::Persistence)
                .attach_printable("region is already associated with the package"));
        }
        con.working.package_regions.push(pair);
        Ok(())
    }

    async fn dissociate_region(
        &self,
        con: &mut MemoryTransaction,
        package_id: &PackageId,
        region_id: &RegionId,
    ) -> error_stack::Result<(), KernelError> {
        let pair = (i32::from(*package_id), i32::from(*region_id));
        con.working.package_regions.retain(|entry| *entry != pair);
        Ok(())
    }
}

pub struct MemoryRegionRepository;

#[async_trait::async_trait]
impl RegionQuery<MemoryTransaction> for MemoryRegionRepository {
    async fn select_all(
        &self,
        con: &mut MemoryTransaction,
    ) -> error_stack::Result<Vec<Region>, KernelError> {
        Ok(con
            .working
            .regions
            .iter()
            .map(|(region_id, name)| region(*region_id, name, false))
            .collect())
    }

    async fn select_by_package_id(
        &self,
        con: &mut MemoryTransaction,
        package_id: &PackageId,
    ) -> error_stack::Result<Vec<Region>, KernelError> {
        let key = i32::from(*package_id);
        let members = con
            .working
            .package_regions
            .iter()
            .filter(|(package, _)| *package == key)
            .map(|(_, region)| *region)
            .collect::<Vec<_>>();
        Ok(con
            .working
            .regions
            .iter()
            .filter(|(region_id, _)| members.contains(region_id))
            .map(|(region_id, name)| region(*region_id, name, true))
            .collect())
    }
}

fn region(region_id: i32, name: &RegionName, checked: bool) -> Region {
    Region::new(
        RegionId::new(region_id),
        name.clone(),
        checked,
        RegionStatus::Unchanged,
    )
}
