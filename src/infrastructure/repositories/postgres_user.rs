// src/infrastructure/repositories/postgres_user.rs
use super::{limit_offset, map_sqlx, to_count};
use crate::domain::errors::{DomainError, DomainResult, Resource};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::user::{
    BirthDate, Email, Login, NewUser, PasswordHash, PersonName, Phone, User, UserId,
    UserRepository, UserUpdate,
};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};

const USER_COLUMNS: &str = "id, first_name, last_name, birth_date, email, login, password_hash, \
     phone, created_at, last_login, total_usage_counter";

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    first_name: String,
    last_name: String,
    birth_date: NaiveDate,
    email: String,
    login: String,
    password_hash: String,
    phone: String,
    created_at: DateTime<Utc>,
    last_login: Option<DateTime<Utc>>,
    total_usage_counter: i64,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            first_name: PersonName::new(row.first_name)?,
            last_name: PersonName::new(row.last_name)?,
            birth_date: BirthDate::from_stored(row.birth_date),
            email: Email::new(row.email)?,
            login: Login::new(row.login)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            phone: Phone::new(row.phone)?,
            created_at: row.created_at,
            last_login: row.last_login,
            total_usage_counter: row.total_usage_counter,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            first_name,
            last_name,
            birth_date,
            email,
            login,
            password_hash,
            phone,
            created_at,
        } = new_user;

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "INSERT INTO users (first_name, last_name, birth_date, email, login, password_hash, phone, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(first_name.as_str())
        .bind(last_name.as_str())
        .bind(birth_date.value())
        .bind(email.as_str())
        .bind(login.as_str())
        .bind(password_hash.as_str())
        .bind(phone.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "UPDATE users
             SET first_name = $2, last_name = $3, birth_date = $4, email = $5,
                 login = $6, password_hash = $7, phone = $8
             WHERE id = $1
             RETURNING {USER_COLUMNS}"
        ))
        .bind(i64::from(update.id))
        .bind(update.first_name.as_str())
        .bind(update.last_name.as_str())
        .bind(update.birth_date.value())
        .bind(update.email.as_str())
        .bind(update.login.as_str())
        .bind(update.password_hash.as_str())
        .bind(update.phone.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or(DomainError::NotFound(Resource::User))?;

        User::try_from(row)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_login(&self, login: &Login) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE login = $1"
        ))
        .bind(login.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn count_by_login(&self, login: &str, exclude: Option<UserId>) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(1) FROM users WHERE login = $1 AND ($2::BIGINT IS NULL OR id <> $2)",
        )
        .bind(login)
        .bind(exclude.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map(to_count)
        .map_err(map_sqlx)
    }

    async fn count_by_email(&self, email: &str, exclude: Option<UserId>) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(1) FROM users WHERE email = $1 AND ($2::BIGINT IS NULL OR id <> $2)",
        )
        .bind(email)
        .bind(exclude.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map(to_count)
        .map_err(map_sqlx)
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(Resource::User));
        }
        Ok(())
    }

    async fn list_ranked(&self, page: PageRequest) -> DomainResult<Page<User>> {
        let (limit, offset) = limit_offset(page)?;

        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT u.id, u.first_name, u.last_name, u.birth_date, u.email, u.login,
                    u.password_hash, u.phone, u.created_at, u.last_login,
                    COALESCE(SUM(c.usage_counter), 0)::BIGINT AS total_usage_counter
             FROM users u
             LEFT JOIN cars c ON c.user_id = u.id
             GROUP BY u.id
             ORDER BY total_usage_counter DESC, u.login ASC
             LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM users")
            .fetch_one(&self.pool)
            .await
            .map(to_count)
            .map_err(map_sqlx)?;

        let items = rows
            .into_iter()
            .map(User::try_from)
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Page { items, total })
    }

    async fn record_login(&self, id: UserId, at: DateTime<Utc>) -> DomainResult<()> {
        sqlx::query("UPDATE users SET last_login = $2 WHERE id = $1")
            .bind(i64::from(id))
            .bind(at)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn refresh_usage_total(&self, id: UserId) -> DomainResult<()> {
        sqlx::query(
            "UPDATE users
             SET total_usage_counter = (
                 SELECT COALESCE(SUM(usage_counter), 0)::BIGINT FROM cars WHERE user_id = $1
             )
             WHERE id = $1",
        )
        .bind(i64::from(id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn delete_inactive_since(&self, cutoff: DateTime<Utc>) -> DomainResult<u64> {
        sqlx::query("DELETE FROM users WHERE COALESCE(last_login, created_at) < $1")
            .bind(cutoff)
            .execute(&self.pool)
            .await
            .map(|result| result.rows_affected())
            .map_err(map_sqlx)
    }
}
