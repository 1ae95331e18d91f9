use error_stack::Report;
use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{DependOnSkiPassQuery, SkiPassQuery};
use kernel::interface::update::{
    DependOnRentalModifier, DependOnSkiPassModifier, RentalModifier, SkiPassModifier,
};
use kernel::prelude::entity::{CreatedAt, PackageId, Rental, SkiPassId, UserId};
use kernel::KernelError;
use rust_decimal::Decimal;

use crate::outcome::{IntoOutcome, Outcome};
use crate::transfer::{IssueRentalDto, SelectPriceDto};

#[async_trait::async_trait]
pub trait IssueRentalService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnSkiPassModifier<Connection>
    + DependOnRentalModifier<Connection>
{
    async fn issue_rental(&self, dto: IssueRentalDto) -> Outcome<SkiPassId> {
        self.try_issue_rental(dto)
            .await
            .into_outcome("Rental saved successfully.")
    }

    /// Creates an active ski pass for the package and the rental row
    /// binding it to the user, inside one transaction: either both rows
    /// exist afterwards or neither does. Not idempotent; every call
    /// issues a new pass.
    async fn try_issue_rental(
        &self,
        dto: IssueRentalDto,
    ) -> error_stack::Result<SkiPassId, KernelError> {
        let user_id = dto.user_id.map(UserId::new).ok_or_else(|| {
            Report::new(KernelError::Validation(
                "user must be saved before rental".to_string(),
            ))
        })?;
        if dto.date_from > dto.date_to {
            return Err(Report::new(KernelError::Validation(
                "rental period may not end before it starts".to_string(),
            )));
        }
        let package_id = PackageId::new(dto.package_id);

        let mut con = self.database_connection().transact().await?;
        let ski_pass_id = self
            .ski_pass_modifier()
            .create(&mut con, &package_id)
            .await?;
        let rental = Rental::new(
            user_id,
            ski_pass_id,
            CreatedAt::now(),
            dto.date_from,
            dto.date_to,
        );
        self.rental_modifier().create(&mut con, &rental).await?;
        con.commit().await?;

        tracing::debug!(
            ski_pass_id = i32::from(ski_pass_id),
            user_id = i32::from(user_id),
            "rental issued"
        );
        Ok(ski_pass_id)
    }
}

impl<Connection: Transaction + Send, T> IssueRentalService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnSkiPassModifier<Connection>
        + DependOnRentalModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait SelectPriceService<Connection: Transaction + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnSkiPassQuery<Connection>
{
    /// Caller-driven follow-up to [`IssueRentalService::issue_rental`]:
    /// fetches the price the store computed for the issued pass.
    async fn select_price(&self, dto: SelectPriceDto) -> Outcome<Decimal> {
        self.try_select_price(dto)
            .await
            .into_outcome("Successfully completed.")
    }

    async fn try_select_price(
        &self,
        dto: SelectPriceDto,
    ) -> error_stack::Result<Decimal, KernelError> {
        // Read-only lookup; the transaction is dropped, not committed.
        let mut con = self.database_connection().transact().await?;
        let price = self
            .ski_pass_query()
            .select_price(&mut con, &SkiPassId::new(dto.ski_pass_id))
            .await?;
        Ok(price.into())
    }
}

impl<Connection: Transaction + Send, T> SelectPriceService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnSkiPassQuery<Connection>
{
}
