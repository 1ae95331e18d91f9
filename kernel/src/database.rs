use crate::KernelError;

/// Entry point into the store. Every multi-step workflow runs inside one
/// transaction obtained here.
#[async_trait::async_trait]
pub trait DatabaseConnection<Connection: Transaction>: 'static + Sync + Send {
    async fn transact(&self) -> error_stack::Result<Connection, KernelError>;
}

pub trait DependOnDatabaseConnection<Connection: Transaction>: 'static + Sync + Send {
    type DatabaseConnection: DatabaseConnection<Connection>;
    fn database_connection(&self) -> &Self::DatabaseConnection;
}

impl<T, Connection> DependOnDatabaseConnection<Connection> for T
where
    T: DatabaseConnection<Connection>,
    Connection: Transaction,
{
    type DatabaseConnection = T;
    fn database_connection(&self) -> &Self::DatabaseConnection {
        self
    }
}

/// An open transaction. Dropping it without calling [`Transaction::commit`]
/// discards every change made through it.
#[async_trait::async_trait]
pub trait Transaction: 'static + Send {
    async fn commit(self) -> error_stack::Result<(), KernelError>;
    async fn roll_back(self) -> error_stack::Result<(), KernelError>;
}
