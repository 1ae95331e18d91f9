use sqlx::PgConnection;
use time::OffsetDateTime;

use kernel::interface::update::RentalModifier;
use kernel::prelude::entity::Rental;
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresRentalRepository;

#[async_trait::async_trait]
impl RentalModifier<PostgresTransaction> for PostgresRentalRepository {
    async fn create(
        &self,
        con: &mut PostgresTransaction,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError> {
        PgRentalInternal::create(con.connection(), rental).await
    }
}

pub(in crate::database) struct PgRentalInternal;

impl PgRentalInternal {
    async fn create(
        con: &mut PgConnection,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO rentals (user_id, ski_pass_id, rental_date, valid_from, valid_to)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(rental.user_id().as_ref())
        .bind(rental.ski_pass_id().as_ref())
        .bind::<&OffsetDateTime>(rental.rental_date().as_ref())
        .bind(rental.valid_from())
        .bind(rental.valid_to())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}
