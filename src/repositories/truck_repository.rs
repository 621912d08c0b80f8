use async_trait::async_trait;
use sqlx::PgPool;

use crate::dto::page::{Page, PageRequest};
use crate::models::truck::{NewTruck, Truck};
use crate::utils::errors::AppError;

/// Persistence contract for trucks. The service is generic over this trait
/// so the SQL-backed implementation can be swapped out in tests.
#[async_trait]
pub trait TruckStore: Send + Sync {
    async fn insert(&self, new_truck: NewTruck) -> Result<Truck, AppError>;
    async fn update(&self, truck: &Truck) -> Result<Truck, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Truck>, AppError>;
    async fn find_all(&self) -> Result<Vec<Truck>, AppError>;
    async fn find_page(&self, request: &PageRequest) -> Result<Page<Truck>, AppError>;
    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}

pub struct TruckRepository {
    pool: PgPool,
}

impl TruckRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TruckStore for TruckRepository {
    async fn insert(&self, new_truck: NewTruck) -> Result<Truck, AppError> {
        let truck = sqlx::query_as::<_, Truck>(
            r#"
            INSERT INTO trucks (model, status, details)
            VALUES ($1, $2, $3)
            RETURNING id, model, status, details
            "#,
        )
        .bind(new_truck.model)
        .bind(new_truck.status)
        .bind(new_truck.details)
        .fetch_one(&self.pool)
        .await?;

        Ok(truck)
    }

    async fn update(&self, truck: &Truck) -> Result<Truck, AppError> {
        let updated = sqlx::query_as::<_, Truck>(
            r#"
            UPDATE trucks
            SET model = $2, status = $3, details = $4
            WHERE id = $1
            RETURNING id, model, status, details
            "#,
        )
        .bind(truck.id)
        .bind(&truck.model)
        .bind(truck.status)
        .bind(&truck.details)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Truck>, AppError> {
        let truck = sqlx::query_as::<_, Truck>(
            "SELECT id, model, status, details FROM trucks WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(truck)
    }

    async fn find_all(&self) -> Result<Vec<Truck>, AppError> {
        let trucks = sqlx::query_as::<_, Truck>(
            "SELECT id, model, status, details FROM trucks ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(trucks)
    }

    async fn find_page(&self, request: &PageRequest) -> Result<Page<Truck>, AppError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM trucks")
            .fetch_one(&self.pool)
            .await?;

        // Column and direction come from closed enums, never from raw input.
        let query = format!(
            "SELECT id, model, status, details FROM trucks ORDER BY {} {} LIMIT $1 OFFSET $2",
            request.sort_field.column(),
            request.sort_direction.keyword(),
        );

        let content = sqlx::query_as::<_, Truck>(&query)
            .bind(request.size)
            .bind(request.offset())
            .fetch_all(&self.pool)
            .await?;

        Ok(Page::new(content, total, request))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM trucks WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM trucks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
