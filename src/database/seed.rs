//! Startup data seeding
//!
//! Inserts the fixed roles and accounts the service ships with. Every
//! insert is guarded by an existence check, so restarting the process never
//! duplicates rows.

use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;
use tracing::info;

use crate::models::user::{ROLE_ADMIN, ROLE_USER};
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;

pub async fn seed_auth_data(pool: &PgPool) -> Result<(), AppError> {
    let repository = UserRepository::new(pool.clone());

    seed_role(&repository, ROLE_ADMIN).await?;
    seed_role(&repository, ROLE_USER).await?;

    seed_account(&repository, "admin", "admin123", ROLE_ADMIN).await?;
    seed_account(&repository, "user", "user123", ROLE_USER).await?;

    Ok(())
}

async fn seed_role(repository: &UserRepository, name: &str) -> Result<(), AppError> {
    if repository.role_exists(name).await? {
        return Ok(());
    }

    repository.insert_role(name).await?;
    info!("Seeded role {}", name);

    Ok(())
}

async fn seed_account(
    repository: &UserRepository,
    username: &str,
    password: &str,
    role_name: &str,
) -> Result<(), AppError> {
    if repository.username_exists(username).await? {
        return Ok(());
    }

    let password_hash = hash(password, DEFAULT_COST)
        .map_err(|e| AppError::Hash(format!("Error hashing seed password: {}", e)))?;
    let user = repository.insert_user(username, &password_hash).await?;

    let role = repository
        .find_role_by_name(role_name)
        .await?
        .ok_or_else(|| AppError::Internal(format!("Seed role {} is missing", role_name)))?;
    repository.assign_role(user.id, role.id).await?;

    info!("Seeded account {} with role {}", username, role_name);

    Ok(())
}
