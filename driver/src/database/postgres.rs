use sqlx::{PgConnection, Pool, Postgres};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::KernelError;

use crate::env;
use crate::error::ConvertError;

pub use self::{package::*, region::*, rental::*, ski_pass::*, user::*};

mod package;
mod region;
mod rental;
mod ski_pass;
mod user;

static POSTGRES_URL: &str = "POSTGRES_URL";

pub struct PostgresDatabase {
    pool: Pool<Postgres>,
}

impl PostgresDatabase {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(POSTGRES_URL)?;
        let pool = Pool::connect(&url).await.convert_error()?;
        tracing::debug!("connected to postgres");
        Ok(Self { pool })
    }
}

#[async_trait::async_trait]
impl DatabaseConnection<PostgresTransaction> for PostgresDatabase {
    async fn transact(&self) -> error_stack::Result<PostgresTransaction, KernelError> {
        let transaction = self.pool.begin().await.convert_error()?;
        Ok(PostgresTransaction(transaction))
    }
}

pub struct PostgresTransaction(sqlx::Transaction<'static, Postgres>);

impl PostgresTransaction {
    fn connection(&mut self) -> &mut PgConnection {
        &mut self.0
    }
}

#[async_trait::async_trait]
impl Transaction for PostgresTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        self.0.commit().await.convert_error()
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        self.0.rollback().await.convert_error()
    }
}
