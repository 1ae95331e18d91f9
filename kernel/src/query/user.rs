use crate::database::Transaction;
use crate::entity::User;
use crate::KernelError;

#[async_trait::async_trait]
pub trait UserQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn select_all(
        &self,
        con: &mut Connection,
    ) -> error_stack::Result<Vec<User>, KernelError>;
}

pub trait DependOnUserQuery<Connection: Transaction>: Sync + Send + 'static {
    type UserQuery: UserQuery<Connection>;
    fn user_query(&self) -> &Self::UserQuery;
}
