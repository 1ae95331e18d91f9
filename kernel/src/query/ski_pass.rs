use crate::database::Transaction;
use crate::entity::{SkiPassId, SkiPassPrice};
use crate::KernelError;

#[async_trait::async_trait]
pub trait SkiPassQuery<Connection: Transaction>: Sync + Send + 'static {
    /// Reads the price the store computed for an issued pass.
    async fn select_price(
        &self,
        con: &mut Connection,
        ski_pass_id: &SkiPassId,
    ) -> error_stack::Result<SkiPassPrice, KernelError>;
}

pub trait DependOnSkiPassQuery<Connection: Transaction>: Sync + Send + 'static {
    type SkiPassQuery: SkiPassQuery<Connection>;
    fn ski_pass_query(&self) -> &Self::SkiPassQuery;
}
