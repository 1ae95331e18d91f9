use error_stack::{Report, ResultExt};
use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{
    DependOnPackageQuery, DependOnRegionQuery, PackageQuery, RegionQuery,
};
use kernel::interface::update::{DependOnPackageModifier, PackageModifier};
use kernel::prelude::delta::compute_delta;
use kernel::prelude::entity::{PackageId, PackageName, Region};
use kernel::KernelError;

use crate::outcome::{IntoOutcome, Outcome};
use crate::transfer::{CreatePackageDto, PackageDto, RegionDto, UpdatePackageDto};

#[async_trait::async_trait]
pub trait CreatePackageService<Connection: Transaction + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnPackageModifier<Connection>
{
    async fn create_package(&self, dto: CreatePackageDto) -> Outcome<PackageId> {
        self.try_create_package(dto)
            .await
            .into_outcome("Package saved successfully.")
    }

    async fn try_create_package(
        &self,
        dto: CreatePackageDto,
    ) -> error_stack::Result<PackageId, KernelError> {
        let name = PackageName::new(dto.name);
        let submitted = dto.regions.into_iter().map(Region::from).collect::<Vec<_>>();
        // A brand-new package has no persisted membership, so the whole
        // submission surfaces as additions (and an empty one is rejected
        // before any store call).
        let delta = compute_delta(&[], &submitted)?;

        let mut con = self.database_connection().transact().await?;
        let package_id = self.package_modifier().create(&mut con, &name).await?;
        for region in delta.to_add() {
            self.package_modifier()
                .associate_region(&mut con, &package_id, region.id())
                .await?;
        }
        con.commit().await?;

        tracing::debug!(
            package_id = i32::from(package_id),
            regions = delta.to_add().len(),
            "package created"
        );
        Ok(package_id)
    }
}

impl<Connection: Transaction + Send, T> CreatePackageService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnPackageModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait UpdatePackageService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnRegionQuery<Connection>
    + DependOnPackageModifier<Connection>
{
    async fn update_package(&self, dto: UpdatePackageDto) -> Outcome<()> {
        self.try_update_package(dto)
            .await
            .into_outcome("Package updated successfully.")
    }

    /// Reconciles the submitted membership against the persisted one and
    /// applies name change plus region delta in a single transaction, so
    /// a mid-sequence failure leaves the package untouched.
    async fn try_update_package(
        &self,
        dto: UpdatePackageDto,
    ) -> error_stack::Result<(), KernelError> {
        let package_id = PackageId::new(dto.package_id);
        let name = PackageName::new(dto.name);
        let submitted = dto.regions.into_iter().map(Region::from).collect::<Vec<_>>();

        let mut con = self.database_connection().transact().await?;
        let current = self
            .region_query()
            .select_by_package_id(&mut con, &package_id)
            .await?;
        let delta = compute_delta(&current, &submitted)?;

        self.package_modifier()
            .update_name(&mut con, &package_id, &name)
            .await
            .attach_printable("package update failed")?;
        for region in delta.to_add() {
            self.package_modifier()
                .associate_region(&mut con, &package_id, region.id())
                .await?;
        }
        for region in delta.to_delete() {
            self.package_modifier()
                .dissociate_region(&mut con, &package_id, region.id())
                .await?;
        }
        con.commit().await?;

        tracing::debug!(
            package_id = i32::from(package_id),
            added = delta.to_add().len(),
            removed = delta.to_delete().len(),
            "package reconciled"
        );
        Ok(())
    }
}

impl<Connection: Transaction + Send, T> UpdatePackageService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnRegionQuery<Connection>
        + DependOnPackageModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait GetPackageService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnPackageQuery<Connection>
    + DependOnRegionQuery<Connection>
{
    async fn get_all_packages(&self) -> Outcome<Vec<PackageDto>> {
        self.try_get_all_packages()
            .await
            .into_outcome("Successfully completed.")
    }

    async fn try_get_all_packages(&self) -> error_stack::Result<Vec<PackageDto>, KernelError> {
        let mut con = self.database_connection().transact().await?;
        let packages = self.package_query().select_all(&mut con).await?;

        let mut list = Vec::with_capacity(packages.len());
        for package in packages {
            let package_id = package
                .id()
                .copied()
                .ok_or_else(|| Report::new(KernelError::Persistence))
                .attach_printable("package row without an id")?;
            let regions = self
                .region_query()
                .select_by_package_id(&mut con, &package_id)
                .await?;
            list.push(PackageDto::try_from(package.with_regions(regions))?);
        }
        Ok(list)
    }
}

impl<Connection: Transaction + Send, T> GetPackageService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnPackageQuery<Connection>
        + DependOnRegionQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait GetRegionService<Connection: Transaction + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnRegionQuery<Connection>
{
    async fn get_all_regions(&self) -> Outcome<Vec<RegionDto>> {
        self.try_get_all_regions()
            .await
            .into_outcome("Successfully completed.")
    }

    async fn try_get_all_regions(&self) -> error_stack::Result<Vec<RegionDto>, KernelError> {
        let mut con = self.database_connection().transact().await?;
        let regions = self.region_query().select_all(&mut con).await?;
        Ok(regions.into_iter().map(RegionDto::from).collect())
    }
}

impl<Connection: Transaction + Send, T> GetRegionService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnRegionQuery<Connection>
{
}
