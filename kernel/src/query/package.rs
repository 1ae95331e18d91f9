use crate::database::Transaction;
use crate::entity::Package;
use crate::KernelError;

#[async_trait::async_trait]
pub trait PackageQuery<Connection: Transaction>: Sync + Send + 'static {
    /// Lists packages without their region sets; membership is loaded
    /// separately through [`crate::query::RegionQuery`].
    async fn select_all(
        &self,
        con: &mut Connection,
    ) -> error_stack::Result<Vec<Package>, KernelError>;
}

pub trait DependOnPackageQuery<Connection: Transaction>: Sync + Send + 'static {
    type PackageQuery: PackageQuery<Connection>;
    fn package_query(&self) -> &Self::PackageQuery;
}
