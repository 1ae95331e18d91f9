use sqlx::PgConnection;

use kernel::interface::query::RegionQuery;
use kernel::prelude::entity::{PackageId, Region, RegionId, RegionName, RegionStatus};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresRegionRepository;

#[async_trait::async_trait]
impl RegionQuery<PostgresTransaction> for PostgresRegionRepository {
    async fn select_all(
        &self,
        con: &mut PostgresTransaction,
    ) -> error_stack::Result<Vec<Region>, KernelError> {
        PgRegionInternal::select_all(con.connection()).await
    }

    async fn select_by_package_id(
        &self,
        con: &mut PostgresTransaction,
        package_id: &PackageId,
    ) -> error_stack::Result<Vec<Region>, KernelError> {
        PgRegionInternal::select_by_package_id(con.connection(), package_id).await
    }
}

#[derive(sqlx::FromRow)]
struct RegionRow {
    region_id: i32,
    name: String,
}

impl RegionRow {
    fn into_region(self, checked: bool) -> Region {
        Region::new(
            RegionId::new(self.region_id),
            RegionName::new(self.name),
            checked,
            RegionStatus::Unchanged,
        )
    }
}

pub(in crate::database) struct PgRegionInternal;

impl PgRegionInternal {
    async fn select_all(con: &mut PgConnection) -> error_stack::Result<Vec<Region>, KernelError> {
        let rows = sqlx::query_as::<_, RegionRow>(
            // language=postgresql
            r#"
            SELECT
                region_id,
                name
            FROM
                regions
            ORDER BY
                region_id
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(|row| row.into_region(false)).collect())
    }

    async fn select_by_package_id(
        con: &mut PgConnection,
        package_id: &PackageId,
    ) -> error_stack::Result<Vec<Region>, KernelError> {
        let rows = sqlx::query_as::<_, RegionRow>(
            // language=postgresql
            r#"
            SELECT
                r.region_id,
                r.name
            FROM
                regions r
                JOIN package_regions pr ON pr.region_id = r.region_id
            WHERE
                pr.package_id = $1
            ORDER BY
                r.region_id
            "#,
        )
        .bind(package_id.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(|row| row.into_region(true)).collect())
    }
}
