use sqlx::PgConnection;
use time::Date;

use kernel::interface::query::UserQuery;
use kernel::interface::update::UserModifier;
use kernel::prelude::entity::{Email, Firstname, Lastname, NationalId, Phone, User, UserId};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresUserRepository;

#[async_trait::async_trait]
impl UserQuery<PostgresTransaction> for PostgresUserRepository {
    async fn select_all(
        &self,
        con: &mut PostgresTransaction,
    ) -> error_stack::Result<Vec<User>, KernelError> {
        PgUserInternal::select_all(con.connection()).await
    }
}

#[async_trait::async_trait]
impl UserModifier<PostgresTransaction> for PostgresUserRepository {
    async fn save_update(
        &self,
        con: &mut PostgresTransaction,
        user: &User,
    ) -> error_stack::Result<UserId, KernelError> {
        PgUserInternal::save_update(con.connection(), user).await
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: i32,
    firstname: String,
    lastname: String,
    national_id: String,
    phone: String,
    email: String,
    date_of_birth: Date,
}

impl From<UserRow> for User {
    fn from(value: UserRow) -> Self {
        User::new(
            Some(UserId::new(value.user_id)),
            Firstname::new(value.firstname),
            Lastname::new(value.lastname),
            NationalId::new(value.national_id),
            Phone::new(value.phone),
            Email::new(value.email),
            value.date_of_birth,
        )
    }
}

pub(in crate::database) struct PgUserInternal;

impl PgUserInternal {
    async fn select_all(con: &mut PgConnection) -> error_stack::Result<Vec<User>, KernelError> {
        let rows = sqlx::query_as::<_, UserRow>(
            // language=postgresql
            r#"
            SELECT
                user_id,
                firstname,
                lastname,
                national_id,
                phone,
                email,
                date_of_birth
            FROM
                users
            ORDER BY
                lastname, firstname
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn save_update(
        con: &mut PgConnection,
        user: &User,
    ) -> error_stack::Result<UserId, KernelError> {
        let user_id = match user.id() {
            Some(user_id) => sqlx::query_scalar::<_, i32>(
                // language=postgresql
                r#"
                UPDATE users
                SET firstname = $2,
                    lastname = $3,
                    national_id = $4,
                    phone = $5,
                    email = $6,
                    date_of_birth = $7
                WHERE user_id = $1
                RETURNING user_id
                "#,
            )
            .bind(user_id.as_ref())
            .bind(user.firstname().as_ref())
            .bind(user.lastname().as_ref())
            .bind(user.national_id().as_ref())
            .bind(user.phone().as_ref())
            .bind(user.email().as_ref())
            .bind(user.date_of_birth())
            .fetch_one(con)
            .await
            .convert_error()?,
            None => sqlx::query_scalar::<_, i32>(
                // language=postgresql
                r#"
                INSERT INTO users (firstname, lastname, national_id, phone, email, date_of_birth)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING user_id
                "#,
            )
            .bind(user.firstname().as_ref())
            .bind(user.lastname().as_ref())
            .bind(user.national_id().as_ref())
            .bind(user.phone().as_ref())
            .bind(user.email().as_ref())
            .bind(user.date_of_birth())
            .fetch_one(con)
            .await
            .convert_error()?,
        };
        Ok(UserId::new(user_id))
    }
}
