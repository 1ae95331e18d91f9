use crate::database::Transaction;
use crate::entity::{PackageId, PackageName, RegionId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait PackageModifier<Connection: Transaction>: 'static + Sync + Send {
    async fn create(
        &self,
        con: &mut Connection,
        name: &PackageName,
    ) -> error_stack::Result<PackageId, KernelError>;

    async fn update_name(
        &self,
        con: &mut Connection,
        package_id: &PackageId,
        name: &PackageName,
    ) -> error_stack::Result<(), KernelError>;

    async fn associate_region(
        &self,
        con: &mut Connection,
        package_id: &PackageId,
        region_id: &RegionId,
    ) -> error_stack::Result<(), KernelError>;

    async fn dissociate_region(
        &self,
        con: &mut Connection,
        package_id: &PackageId,
        region_id: &RegionId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnPackageModifier<Connection: Transaction>: 'static + Sync + Send {
    type PackageModifier: PackageModifier<Connection>;
    fn package_modifier(&self) -> &Self::PackageModifier;
}
