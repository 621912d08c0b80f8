use axum::{
    extract::{Extension, Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use tracing::info;
use validator::Validate;

use crate::dto::page::{Page, PaginationParams};
use crate::dto::truck_dto::TruckDto;
use crate::middleware::auth::AuthenticatedUser;
use crate::repositories::truck_repository::TruckRepository;
use crate::services::truck_service::TruckService;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_truck_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_trucks))
        .route("/", post(create_truck))
        .route("/paginated", get(paginate_trucks))
        .route("/:id", get(get_truck))
        .route("/:id", put(update_truck))
        .route("/:id", delete(delete_truck))
}

fn truck_service(state: &AppState) -> TruckService<TruckRepository> {
    TruckService::new(TruckRepository::new(state.pool.clone()))
}

async fn list_trucks(State(state): State<AppState>) -> AppResult<Json<Vec<TruckDto>>> {
    let trucks = truck_service(&state).list().await?;

    Ok(Json(trucks))
}

async fn get_truck(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<TruckDto>> {
    let truck = truck_service(&state).get(id).await?;

    Ok(Json(truck))
}

async fn create_truck(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(dto): Json<TruckDto>,
) -> AppResult<Json<TruckDto>> {
    dto.validate()?;

    let created = truck_service(&state).create(dto).await?;
    info!(
        "Truck {} created by {}",
        created.id.unwrap_or_default(),
        user.username
    );

    Ok(Json(created))
}

async fn update_truck(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i64>,
    Json(dto): Json<TruckDto>,
) -> AppResult<Json<TruckDto>> {
    dto.validate()?;

    let updated = truck_service(&state).update(id, dto).await?;
    info!("Truck {} updated by {}", id, user.username);

    Ok(Json(updated))
}

async fn delete_truck(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i64>,
) -> AppResult<String> {
    truck_service(&state).delete(id).await?;
    info!("Truck {} deleted by {}", id, user.username);

    Ok(format!("Truck with ID: {} deleted successfully", id))
}

async fn paginate_trucks(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Page<TruckDto>>> {
    let request = params.into_page_request()?;
    let page = truck_service(&state).paginate(request).await?;

    Ok(Json(page))
}
