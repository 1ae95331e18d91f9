use error_stack::Report;
use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{DependOnUserQuery, UserQuery};
use kernel::interface::update::{DependOnUserModifier, UserModifier};
use kernel::prelude::entity::{User, UserId};
use kernel::KernelError;

use crate::outcome::{IntoOutcome, Outcome};
use crate::transfer::{SaveUserDto, UserDto};

#[async_trait::async_trait]
pub trait SaveUserService<Connection: Transaction + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnUserModifier<Connection>
{
    /// Registers a new user or updates an existing one, depending on
    /// whether the dto carries an id.
    async fn save_user(&self, dto: SaveUserDto) -> Outcome<UserId> {
        self.try_save_user(dto)
            .await
            .into_outcome("User saved successfully.")
    }

    async fn try_save_user(&self, dto: SaveUserDto) -> error_stack::Result<UserId, KernelError> {
        let user = User::from(dto);

        let mut con = self.database_connection().transact().await?;
        let user_id = self.user_modifier().save_update(&mut con, &user).await?;
        con.commit().await?;

        tracing::debug!(user_id = i32::from(user_id), "user saved");
        Ok(user_id)
    }
}

impl<Connection: Transaction + Send, T> SaveUserService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnUserModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait GetUserService<Connection: Transaction + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnUserQuery<Connection>
{
    async fn get_all_users(&self) -> Outcome<Vec<UserDto>> {
        self.try_get_all_users()
            .await
            .into_outcome("Successfully completed.")
    }

    async fn try_get_all_users(&self) -> error_stack::Result<Vec<UserDto>, KernelError> {
        let mut con = self.database_connection().transact().await?;
        let users = self.user_query().select_all(&mut con).await?;
        users
            .into_iter()
            .map(UserDto::try_from)
            .collect::<Result<Vec<UserDto>, Report<KernelError>>>()
    }
}

impl<Connection: Transaction + Send, T> GetUserService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnUserQuery<Connection>
{
}
