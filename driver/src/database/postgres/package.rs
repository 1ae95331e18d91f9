use sqlx::PgConnection;

use kernel::interface::query::PackageQuery;
use kernel::interface::update::PackageModifier;
use kernel::prelude::entity::{Package, PackageId, PackageName, RegionId};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresPackageRepository;

#[async_trait::async_trait]
impl PackageQuery<PostgresTransaction> for PostgresPackageRepository {
    async fn select_all(
        &self,
        con: &mut PostgresTransaction,
    ) -> error_stack::Result<Vec<Package>, KernelError> {
        PgPackageInternal::select_all(con.connection()).await
    }
}

#[async_trait::async_trait]
impl PackageModifier<PostgresTransaction> for PostgresPackageRepository {
    async fn create(
        &self,
        con: &mut PostgresTransaction,
        name: &PackageName,
    ) -> error_stack::Result<PackageId, KernelError> {
        PgPackageInternal::create(con.connection(), name).await
    }

    async fn update_name(
        &self,
        con: &mut PostgresTransaction,
        package_id: &PackageId,
        name: &PackageName,
    ) -> error_stack::Result<(), KernelError> {
        PgPackageInternal::update_name(con.connection(), package_id, name).await
    }

    async fn associate_region(
        &self,
        con: &mut PostgresTransaction,
        package_id: &PackageId,
        region_id: &RegionId,
    ) -> error_stack::Result<(), KernelError> {
        PgPackageInternal::associate_region(con.connection(), package_id, region_id).await
    }

    async fn dissociate_region(
        &self,
        con: &mut PostgresTransaction,
        package_id: &PackageId,
        region_id: &RegionId,
    ) -> error_stack::Result<(), KernelError> {
        PgPackageInternal::dissociate_region(con.connection(), package_id, region_id).await
    }
}

#[derive(sqlx::FromRow)]
struct PackageRow {
    package_id: i32,
    name: String,
}

impl From<PackageRow> for Package {
    fn from(value: PackageRow) -> Self {
        Package::new(
            Some(PackageId::new(value.package_id)),
            PackageName::new(value.name),
            Vec::new(),
        )
    }
}

pub(in crate::database) struct PgPackageInternal;

impl PgPackageInternal {
    async fn select_all(con: &mut PgConnection) -> error_stack::Result<Vec<Package>, KernelError> {
        let rows = sqlx::query_as::<_, PackageRow>(
            // language=postgresql
            r#"
            SELECT
                package_id,
                name
            FROM
                packages
            ORDER BY
                package_id
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Package::from).collect())
    }

    async fn create(
        con: &mut PgConnection,
        name: &PackageName,
    ) -> error_stack::Result<PackageId, KernelError> {
        let package_id = sqlx::query_scalar::<_, i32>(
            // language=postgresql
            r#"
            INSERT INTO packages (name)
            VALUES ($1)
            RETURNING package_id
            "#,
        )
        .bind(name.as_ref())
        .fetch_one(con)
        .await
        .convert_error()?;
        Ok(PackageId::new(package_id))
    }

    async fn update_name(
        con: &mut PgConnection,
        package_id: &PackageId,
        name: &PackageName,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            UPDATE packages
            SET name = $2
            WHERE package_id = $1
            "#,
        )
        .bind(package_id.as_ref())
        .bind(name.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn associate_region(
        con: &mut PgConnection,
        package_id: &PackageId,
        region_id: &RegionId,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO package_regions (package_id, region_id)
            VALUES ($1, $2)
            "#,
        )
        .bind(package_id.as_ref())
        .bind(region_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn dissociate_region(
        con: &mut PgConnection,
        package_id: &PackageId,
        region_id: &RegionId,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM package_regions
            WHERE package_id = $1 AND region_id = $2
            "#,
        )
        .bind(package_id.as_ref())
        .bind(region_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}
