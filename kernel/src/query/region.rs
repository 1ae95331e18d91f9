use crate::database::Transaction;
use crate::entity::{PackageId, Region};
use crate::KernelError;

#[async_trait::async_trait]
pub trait RegionQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn select_all(
        &self,
        con: &mut Connection,
    ) -> error_stack::Result<Vec<Region>, KernelError>;

    async fn select_by_package_id(
        &self,
        con: &mut Connection,
        package_id: &PackageId,
    ) -> error_stack::Result<Vec<Region>, KernelError>;
}

pub trait DependOnRegionQuery<Connection: Transaction>: Sync + Send + 'static {
    type RegionQuery: RegionQuery<Connection>;
    fn region_query(&self) -> &Self::RegionQuery;
}
