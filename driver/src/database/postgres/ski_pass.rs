use rust_decimal::Decimal;
use sqlx::PgConnection;

use kernel::interface::query::SkiPassQuery;
use kernel::interface::update::SkiPassModifier;
use kernel::prelude::entity::{PackageId, SkiPassId, SkiPassPrice};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresSkiPassRepository;

#[async_trait::async_trait]
impl SkiPassModifier<PostgresTransaction> for PostgresSkiPassRepository {
    async fn create(
        &self,
        con: &mut PostgresTransaction,
        package_id: &PackageId,
    ) -> error_stack::Result<SkiPassId, KernelError> {
        PgSkiPassInternal::create(con.connection(), package_id).await
    }
}

#[async_trait::async_trait]
impl SkiPassQuery<PostgresTransaction> for PostgresSkiPassRepository {
    async fn select_price(
        &self,
        con: &mut PostgresTransaction,
        ski_pass_id: &SkiPassId,
    ) -> error_stack::Result<SkiPassPrice, KernelError> {
        PgSkiPassInternal::select_price(con.connection(), ski_pass_id).await
    }
}

pub(in crate::database) struct PgSkiPassInternal;

impl PgSkiPassInternal {
    /// The price column is filled by the store itself on insert; the
    /// driver only hands over the package.
    async fn create(
        con: &mut PgConnection,
        package_id: &PackageId,
    ) -> error_stack::Result<SkiPassId, KernelError> {
        let ski_pass_id = sqlx::query_scalar::<_, i32>(
            // language=postgresql
            r#"
            INSERT INTO ski_passes (package_id, active)
            VALUES ($1, TRUE)
            RETURNING ski_pass_id
            "#,
        )
        .bind(package_id.as_ref())
        .fetch_one(con)
        .await
        .convert_error()?;
        Ok(SkiPassId::new(ski_pass_id))
    }

    async fn select_price(
        con: &mut PgConnection,
        ski_pass_id: &SkiPassId,
    ) -> error_stack::Result<SkiPassPrice, KernelError> {
        let price = sqlx::query_scalar::<_, Decimal>(
            // language=postgresql
            r#"
            SELECT
                price
            FROM
                ski_passes
            WHERE
                ski_pass_id = $1
            "#,
        )
        .bind(ski_pass_id.as_ref())
        .fetch_one(con)
        .await
        .convert_error()?;
        Ok(SkiPassPrice::new(price))
    }
}
