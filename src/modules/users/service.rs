use anyhow::anyhow;
use chrono::Utc;
use tracing::instrument;
use uuid::Uuid;

use crate::store::{DataStore, UserRecord};
use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationMeta;
use crate::utils::password::hash_password;

use super::model::{CreateUserDto, PaginatedUsersResponse, UpdateUserDto, User, UserFilterParams};

pub struct UserService;

impl UserService {
    #[instrument(skip(store, params))]
    pub async fn list_users(
        store: &DataStore,
        params: &UserFilterParams,
    ) -> Result<PaginatedUsersResponse, AppError> {
        let records = store.list_users(params.active).await;
        let total = records.len() as i64;

        let limit = params.pagination.limit();
        let offset = params.pagination.offset();
        let data = records
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .map(User::from)
            .collect();

        Ok(PaginatedUsersResponse {
            data,
            meta: PaginationMeta::new(total, &params.pagination),
        })
    }

    /// Fetches one user and records a "View User" audit entry.
    #[instrument(skip(store))]
    pub async fn get_user(store: &DataStore, id: Uuid) -> Result<User, AppError> {
        let record = store
            .get_user(id)
            .await
            .ok_or_else(|| AppError::not_found(anyhow!("User with id {} not found", id)))?;

        store.add_log(id, "View User").await;

        Ok(record.into())
    }

    #[instrument(skip(store, dto), fields(email = %dto.email))]
    pub async fn create_user(store: &DataStore, dto: CreateUserDto) -> Result<User, AppError> {
        let now = Utc::now();
        let record = UserRecord {
            id: Uuid::new_v4(),
            forename: dto.forename,
            surname: dto.surname,
            email: dto.email,
            password: hash_password(&dto.password)?,
            is_active: dto.is_active,
            date_of_birth: dto.date_of_birth,
            roles: dto.roles,
            created_at: now,
            updated_at: now,
        };

        let id = record.id;
        let user = User::from(record.clone());
        if !store.insert_user(record).await {
            return Err(AppError::bad_request(anyhow!("Email already exists")));
        }

        store.add_log(id, "Add User").await;

        Ok(user)
    }

    #[instrument(skip(store, dto))]
    pub async fn update_user(
        store: &DataStore,
        id: Uuid,
        dto: UpdateUserDto,
    ) -> Result<User, AppError> {
        let mut record = store
            .get_user(id)
            .await
            .ok_or_else(|| AppError::not_found(anyhow!("User with id {} not found", id)))?;

        record.forename = dto.forename;
        record.surname = dto.surname;
        record.email = dto.email;
        record.is_active = dto.is_active;
        record.date_of_birth = dto.date_of_birth;
        record.updated_at = Utc::now();

        let user = User::from(record.clone());
        if !store.update_user(record).await {
            return Err(AppError::not_found(anyhow!("User with id {} not found", id)));
        }

        store.add_log(id, "Edit User").await;

        Ok(user)
    }

    #[instrument(skip(store))]
    pub async fn delete_user(store: &DataStore, id: Uuid) -> Result<(), AppError> {
        if !store.delete_user(id).await {
            return Err(AppError::not_found(anyhow!("User with id {} not found", id)));
        }

        store.add_log(id, "Delete User").await;

        Ok(())
    }
}
