use crate::database::Transaction;
use crate::entity::{PackageId, SkiPassId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait SkiPassModifier<Connection: Transaction>: 'static + Sync + Send {
    /// Creates an active ski pass for the package and returns its id.
    /// The store assigns the price as part of this insert.
    async fn create(
        &self,
        con: &mut Connection,
        package_id: &PackageId,
    ) -> error_stack::Result<SkiPassId, KernelError>;
}

pub trait DependOnSkiPassModifier<Connection: Transaction>: 'static + Sync + Send {
    type SkiPassModifier: SkiPassModifier<Connection>;
    fn ski_pass_modifier(&self) -> &Self::SkiPassModifier;
}
