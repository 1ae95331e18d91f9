use driver::database::{
    MemoryDatabase, MemoryPackageRepository, MemoryRegionRepository, MemoryRentalRepository,
    MemorySkiPassRepository, MemoryTransaction, MemoryUserRepository,
};
use kernel::interface::database::DatabaseConnection;
use kernel::KernelError;
use kernel::interface::query::{
    DependOnPackageQuery, DependOnRegionQuery, DependOnSkiPassQuery, DependOnUserQuery,
};
use kernel::interface::update::{
    DependOnPackageModifier, DependOnRentalModifier, DependOnSkiPassModifier, DependOnUserModifier,
};

/// Wires every service dependency to the in-memory store, the way the
/// real composition root wires them to postgres.
pub struct TestModule {
    pub database: MemoryDatabase,
    users: MemoryUserRepository,
    packages: MemoryPackageRepository,
    regions: MemoryRegionRepository,
    ski_passes: MemorySkiPassRepository,
    rentals: MemoryRentalRepository,
}

impl TestModule {
    pub fn new() -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        Self {
            database: MemoryDatabase::new(),
            users: MemoryUserRepository,
            packages: MemoryPackageRepository,
            regions: MemoryRegionRepository,
            ski_passes: MemorySkiPassRepository,
            rentals: MemoryRentalRepository,
        }
    }
}

// The kernel's blanket impl turns this into `DependOnDatabaseConnection`.
#[async_trait::async_trait]
impl DatabaseConnection<MemoryTransaction> for TestModule {
    async fn transact(&self) -> error_stack::Result<MemoryTransaction, KernelError> {
        self.database.transact().await
    }
}

impl DependOnUserQuery<MemoryTransaction> for TestModule {
    type UserQuery = MemoryUserRepository;
    fn user_query(&self) -> &MemoryUserRepository {
        &self.users
    }
}

impl DependOnUserModifier<MemoryTransaction> for TestModule {
    type UserModifier = MemoryUserRepository;
    fn user_modifier(&self) -> &MemoryUserRepository {
        &self.users
    }
}

impl DependOnPackageQuery<MemoryTransaction> for TestModule {
    type PackageQuery = MemoryPackageRepository;
    fn package_query(&self) -> &MemoryPackageRepository {
        &self.packages
    }
}

impl DependOnPackageModifier<MemoryTransaction> for TestModule {
    type PackageModifier = MemoryPackageRepository;
    fn package_modifier(&self) -> &MemoryPackageRepository {
        &self.packages
    }
}

impl DependOnRegionQuery<MemoryTransaction> for TestModule {
    type RegionQuery = MemoryRegionRepository;
    fn region_query(&self) -> &MemoryRegionRepository {
        &self.regions
    }
}

impl DependOnSkiPassQuery<MemoryTransaction> for TestModule {
    type SkiPassQuery = MemorySkiPassRepository;
    fn ski_pass_query(&self) -> &MemorySkiPassRepository {
        &self.ski_passes
    }
}

impl DependOnSkiPassModifier<MemoryTransaction> for TestModule {
    type SkiPassModifier = MemorySkiPassRepository;
    fn ski_pass_modifier(&self) -> &MemorySkiPassRepository {
        &self.ski_passes
    }
}

impl DependOnRentalModifier<MemoryTransaction> for TestModule {
    type RentalModifier = MemoryRentalRepository;
    fn rental_modifier(&self) -> &MemoryRentalRepository {
        &self.rentals
    }
}
