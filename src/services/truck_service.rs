//! Truck service
//!
//! Translates between the wire representation (status as a free-form string)
//! and the persisted representation (status as a closed enum), enforces
//! not-found semantics and shapes pagination requests. All branching logic
//! for the truck resource lives here; the route handlers stay thin.

use crate::dto::page::{Page, PageRequest};
use crate::dto::truck_dto::TruckDto;
use crate::models::truck::{NewTruck, TruckStatus};
use crate::repositories::truck_repository::TruckStore;
use crate::utils::errors::AppError;

pub struct TruckService<S: TruckStore> {
    store: S,
}

impl<S: TruckStore> TruckService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Full scan, mapped to wire shape. Superseded by `paginate` for large
    /// datasets.
    pub async fn list(&self) -> Result<Vec<TruckDto>, AppError> {
        let trucks = self.store.find_all().await?;

        Ok(trucks.into_iter().map(TruckDto::from).collect())
    }

    pub async fn get(&self, id: i64) -> Result<TruckDto, AppError> {
        let truck = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Truck not found with ID: {}", id)))?;

        Ok(TruckDto::from(truck))
    }

    pub async fn create(&self, dto: TruckDto) -> Result<TruckDto, AppError> {
        let status: TruckStatus = dto.status.parse()?;

        let created = self
            .store
            .insert(NewTruck {
                model: dto.model,
                status,
                details: dto.details,
            })
            .await?;

        Ok(TruckDto::from(created))
    }

    /// Wholesale replace of the mutable fields; no partial merge.
    pub async fn update(&self, id: i64, dto: TruckDto) -> Result<TruckDto, AppError> {
        let mut truck = self.store.find_by_id(id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Truck not found with ID to update: {}", id))
        })?;

        truck.model = dto.model;
        truck.status = dto.status.parse()?;
        truck.details = dto.details;

        let updated = self.store.update(&truck).await?;

        Ok(TruckDto::from(updated))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        // Existence is checked up front, never inferred from the delete's
        // own row count.
        if !self.store.exists_by_id(id).await? {
            return Err(AppError::NotFound(format!(
                "Truck not found with ID to delete: {}",
                id
            )));
        }

        self.store.delete_by_id(id).await
    }

    pub async fn paginate(&self, request: PageRequest) -> Result<Page<TruckDto>, AppError> {
        let page = self.store.find_page(&request).await?;

        Ok(page.map(TruckDto::from))
    }
}
