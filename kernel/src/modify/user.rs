use crate::database::Transaction;
use crate::entity::{User, UserId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait UserModifier<Connection: Transaction>: 'static + Sync + Send {
    /// Inserts the user when `user.id()` is `None`, updates the
    /// existing row otherwise. Returns the persisted id either way.
    async fn save_update(
        &self,
        con: &mut Connection,
        user: &User,
    ) -> error_stack::Result<UserId, KernelError>;
}

pub trait DependOnUserModifier<Connection: Transaction>: 'static + Sync + Send {
    type UserModifier: UserModifier<Connection>;
    fn user_modifier(&self) -> &Self::UserModifier;
}
