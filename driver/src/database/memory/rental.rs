use error_stack::Report;

use kernel::interface::query::SkiPassQuery;
use kernel::interface::update::{RentalModifier, SkiPassModifier};
use kernel::prelude::entity::{PackageId, Rental, SkiPassId, SkiPassPrice};
use kernel::KernelError;

use crate::database::memory::MemoryTransaction;

pub struct MemorySkiPassRepository;

#[async_trait::async_trait]
impl SkiPassModifier<MemoryTransaction> for MemorySkiPassRepository {
    async fn create(
        &self,
        con: &mut MemoryTransaction,
        package_id: &PackageId,
    ) -> error_stack::Result<SkiPassId, KernelError> {
        let key = i32::from(*package_id);
        if !con.working.packages.contains_key(&key) {
            return Err(Report::new(KernelError::Persistence)
                .attach_printable(format!("no package with id {key}")));
        }
        let price = con.working.price_list.get(&key).copied().unwrap_or_default();
        let ski_pass_id = con.working.next_id();
        con.working.ski_passes.insert(ski_pass_id, (key, price));
        Ok(SkiPassId::new(ski_pass_id))
    }
}

#[async_trait::async_trait]
impl SkiPassQuery<MemoryTransaction> for MemorySkiPassRepository {
    async fn select_price(
        &self,
        con: &mut MemoryTransaction,
        ski_pass_id: &SkiPassId,
    ) -> error_stack::Result<SkiPassPrice, KernelError> {
        let key = i32::from(*ski_pass_id);
        con.working
            .ski_passes
            .get(&key)
            .map(|(_, price)| SkiPassPrice::new(*price))
            .ok_or_else(|| {
                Report::new(KernelError::Persistence)
                    .attach_printable(format!("no ski pass with id {key}"))
            })
    }
}

pub struct MemoryRentalRepository;

#[async_trait::async_trait]
impl RentalModifier<MemoryTransaction> for MemoryRentalRepository {
    async fn create(
        &self,
        con: &mut MemoryTransaction,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError> {
        let user_id = i32::from(*rental.user_id());
        if !con.working.users.contains_key(&user_id) {
            return Err(Report::new(KernelError::Persistence)
                .attach_printable(format!("no user with id {user_id}")));
        }
        let ski_pass_id = i32::from(*rental.ski_pass_id());
        if !con.working.ski_passes.contains_key(&ski_pass_id) {
            return Err(Report::new(KernelError::Persistence)
                .attach_printable(format!("no ski pass with id {ski_pass_id}")));
        }
        con.working.rentals.push(rental.clone());
        Ok(())
    }
}
