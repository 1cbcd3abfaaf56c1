// src/infrastructure/repositories/postgres_car.rs
use super::{limit_offset, map_sqlx, to_count};
use crate::domain::car::{
    Car, CarAttribute, CarId, CarRepository, CarUpdate, LicensePlate, ModelYear, NewCar,
};
use crate::domain::errors::{DomainError, DomainResult, Resource};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const CAR_COLUMNS: &str =
    "id, year, license_plate, model, color, created_at, usage_counter, user_id";

#[derive(Clone)]
pub struct PostgresCarRepository {
    pool: PgPool,
}

impl PostgresCarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CarRow {
    id: i64,
    year: i32,
    license_plate: String,
    model: String,
    color: String,
    created_at: DateTime<Utc>,
    usage_counter: i64,
    user_id: i64,
}

impl TryFrom<CarRow> for Car {
    type Error = DomainError;

    fn try_from(row: CarRow) -> Result<Self, Self::Error> {
        Ok(Car {
            id: CarId::new(row.id)?,
            year: ModelYear::from_stored(row.year),
            license_plate: LicensePlate::new(row.license_plate)?,
            model: CarAttribute::new(row.model)?,
            color: CarAttribute::new(row.color)?,
            created_at: row.created_at,
            usage_counter: row.usage_counter,
            owner_id: UserId::new(row.user_id)?,
        })
    }
}

#[async_trait]
impl CarRepository for PostgresCarRepository {
    async fn insert(&self, new_car: NewCar) -> DomainResult<Car> {
        let row = sqlx::query_as::<_, CarRow>(&format!(
            "INSERT INTO cars (year, license_plate, model, color, created_at, usage_counter, user_id)
             VALUES ($1, $2, $3, $4, $5, 0, $6)
             RETURNING {CAR_COLUMNS}"
        ))
        .bind(new_car.year.value())
        .bind(new_car.license_plate.as_str())
        .bind(new_car.model.as_str())
        .bind(new_car.color.as_str())
        .bind(new_car.created_at)
        .bind(i64::from(new_car.owner_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Car::try_from(row)
    }

    async fn update(&self, update: CarUpdate) -> DomainResult<Car> {
        let row = sqlx::query_as::<_, CarRow>(&format!(
            "UPDATE cars
             SET year = $2, license_plate = $3, model = $4, color = $5
             WHERE id = $1
             RETURNING {CAR_COLUMNS}"
        ))
        .bind(i64::from(update.id))
        .bind(update.year.value())
        .bind(update.license_plate.as_str())
        .bind(update.model.as_str())
        .bind(update.color.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or(DomainError::NotFound(Resource::Car))?;

        Car::try_from(row)
    }

    async fn find_by_id(&self, id: CarId) -> DomainResult<Option<Car>> {
        let row = sqlx::query_as::<_, CarRow>(&format!(
            "SELECT {CAR_COLUMNS} FROM cars WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Car::try_from).transpose()
    }

    async fn count_by_plate(&self, plate: &str, exclude: Option<CarId>) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(1) FROM cars WHERE license_plate = $1 AND ($2::BIGINT IS NULL OR id <> $2)",
        )
        .bind(plate)
        .bind(exclude.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map(to_count)
        .map_err(map_sqlx)
    }

    async fn delete(&self, id: CarId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(Resource::Car));
        }
        Ok(())
    }

    async fn list_by_owner(&self, owner: UserId, page: PageRequest) -> DomainResult<Page<Car>> {
        let (limit, offset) = limit_offset(page)?;

        let rows = sqlx::query_as::<_, CarRow>(&format!(
            "SELECT {CAR_COLUMNS} FROM cars
             WHERE user_id = $1
             ORDER BY usage_counter DESC, model ASC
             LIMIT $2 OFFSET $3"
        ))
        .bind(i64::from(owner))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM cars WHERE user_id = $1")
            .bind(i64::from(owner))
            .fetch_one(&self.pool)
            .await
            .map(to_count)
            .map_err(map_sqlx)?;

        let items = rows
            .into_iter()
            .map(Car::try_from)
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Page { items, total })
    }

    async fn increment_usage(&self, id: CarId, owner: UserId) -> DomainResult<()> {
        sqlx::query(
            "UPDATE cars SET usage_counter = usage_counter + 1 WHERE id = $1 AND user_id = $2",
        )
        .bind(i64::from(id))
        .bind(i64::from(owner))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }
}
