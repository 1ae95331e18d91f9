use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rust_decimal::Decimal;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::prelude::entity::{PackageName, RegionName, Rental, User};
use kernel::KernelError;

pub use self::{package::*, rental::*, user::*};

mod package;
mod rental;
mod user;

/// Everything the store holds, in one cloneable snapshot. Ids are
/// assigned from a single sequence, mirroring store-side identity
/// columns.
#[derive(Debug, Clone, Default)]
pub(in crate::database) struct MemoryState {
    pub(in crate::database) users: BTreeMap<i32, User>,
    pub(in crate::database) packages: BTreeMap<i32, PackageName>,
    pub(in crate::database) regions: BTreeMap<i32, RegionName>,
    pub(in crate::database) package_regions: Vec<(i32, i32)>,
    pub(in crate::database) price_list: BTreeMap<i32, Decimal>,
    pub(in crate::database) ski_passes: BTreeMap<i32, (i32, Decimal)>,
    pub(in crate::database) rentals: Vec<Rental>,
    sequence: i32,
}

impl MemoryState {
    pub(in crate::database) fn next_id(&mut self) -> i32 {
        self.sequence += 1;
        self.sequence
    }
}

/// In-memory rendition of the store, for service-level tests and local
/// experiments. Each transaction works on a snapshot; commit swaps the
/// snapshot in, dropping the transaction discards it.
#[derive(Clone, Default)]
pub struct MemoryDatabase {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a selectable region, as if the store already contained it.
    pub fn insert_region(&self, region_id: i32, name: &str) {
        self.lock().regions.insert(region_id, RegionName::new(name));
    }

    /// Fixes the price the store will assign to passes issued for the
    /// package. Unpriced packages get zero.
    pub fn set_package_price(&self, package_id: i32, price: Decimal) {
        self.lock().price_list.insert(package_id, price);
    }

    pub fn ski_pass_count(&self) -> usize {
        self.lock().ski_passes.len()
    }

    pub fn rentals(&self) -> Vec<Rental> {
        self.lock().rentals.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait::async_trait]
impl DatabaseConnection<MemoryTransaction> for MemoryDatabase {
    async fn transact(&self) -> error_stack::Result<MemoryTransaction, KernelError> {
        let working = self.lock().clone();
        Ok(MemoryTransaction {
            shared: Arc::clone(&self.state),
            working,
        })
    }
}

pub struct MemoryTransaction {
    shared: Arc<Mutex<MemoryState>>,
    pub(in crate::database) working: MemoryState,
}

#[async_trait::async_trait]
impl Transaction for MemoryTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        *self.shared.lock().unwrap_or_else(PoisonError::into_inner) = self.working;
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}
