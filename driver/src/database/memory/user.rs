use error_stack::Report;

use kernel::interface::query::UserQuery;
use kernel::interface::update::UserModifier;
use kernel::prelude::entity::{User, UserId};
use kernel::KernelError;

use crate::database::memory::MemoryTransaction;

pub struct MemoryUserRepository;

#[async_trait::async_trait]
impl UserQuery<MemoryTransaction> for MemoryUserRepository {
    async fn select_all(
        &self,
        con: &mut MemoryTransaction,
    ) -> error_stack::Result<Vec<User>, KernelError> {
        Ok(con.working.users.values().cloned().collect())
    }
}

#[async_trait::async_trait]
impl UserModifier<MemoryTransaction> for MemoryUserRepository {
    async fn save_update(
        &self,
        con: &mut MemoryTransaction,
        user: &User,
    ) -> error_stack::Result<UserId, KernelError> {
        let user_id = match user.id() {
            Some(user_id) => {
                let key = i32::from(*user_id);
                if !con.working.users.contains_key(&key) {
                    return Err(Report::new(KernelError::Persistence)
                        .attach_printable(format!("no user with id {key}")));
                }
                key
            }
            None => con.working.next_id(),
        };

        let persisted = User::new(
            Some(UserId::new(user_id)),
            user.firstname().clone(),
            user.lastname().clone(),
            user.national_id().clone(),
            user.phone().clone(),
            user.email().clone(),
            user.date_of_birth(),
        );
        con.working.users.insert(user_id, persisted);
        Ok(UserId::new(user_id))
    }
}
