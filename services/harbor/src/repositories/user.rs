//! User repository for database operations

use anyhow::Result;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::{CreateUserRequest, UpdateUserRequest, User, UserResponse};

/// Hash a plaintext password into an argon2 PHC string.
pub fn hash_password(plain: &str) -> Result<String> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?
        .to_string();
    Ok(hash)
}

/// Verify a plaintext password against a stored hash.
pub fn verify_password(plain: &str, hash: &str) -> Result<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| anyhow::anyhow!("Failed to parse password hash: {}", e))?;

    let argon2 = Argon2::default();
    Ok(argon2.verify_password(plain.as_bytes(), &parsed_hash).is_ok())
}

/// User repository
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user. The email is stored lowercased and the password
    /// never reaches the database in plaintext.
    pub async fn create(&self, payload: &CreateUserRequest) -> Result<UserResponse> {
        info!("Creating new user: {}", payload.email);

        let password_hash = hash_password(&payload.password)?;

        let user = sqlx::query_as::<_, UserResponse>(
            r#"
            INSERT INTO users (name, email, password_hash)
            VALUES ($1, lower($2), $3)
            RETURNING id, name, email, created_at, updated_at
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.email)
        .bind(&password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// All users; the password column is never selected.
    pub async fn get_all(&self) -> Result<Vec<UserResponse>> {
        let users = sqlx::query_as::<_, UserResponse>(
            "SELECT id, name, email, created_at, updated_at FROM users",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    /// Find a user by ID, password excluded.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<UserResponse>> {
        let user = sqlx::query_as::<_, UserResponse>(
            "SELECT id, name, email, created_at, updated_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find a user by email, case-insensitively. Returns the full row
    /// including the password hash; used only by the login flow.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, created_at, updated_at
            FROM users
            WHERE email = lower($1)
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Update the fields present in the payload; absent fields are left
    /// unchanged. A changed password is re-hashed before it is persisted.
    pub async fn update(
        &self,
        id: Uuid,
        payload: &UpdateUserRequest,
    ) -> Result<Option<UserResponse>> {
        let password_hash = match &payload.password {
            Some(plain) => Some(hash_password(plain)?),
            None => None,
        };

        let user = sqlx::query_as::<_, UserResponse>(
            r#"
            UPDATE users
            SET name = COALESCE($2, name),
                email = COALESCE(lower($3), email),
                password_hash = COALESCE($4, password_hash),
                updated_at = now()
            WHERE id = $1
            RETURNING id, name, email, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&payload.name)
        .bind(&payload.email)
        .bind(&password_hash)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Delete a user, returning the removed document.
    pub async fn delete(&self, id: Uuid) -> Result<Option<UserResponse>> {
        let user = sqlx::query_as::<_, UserResponse>(
            r#"
            DELETE FROM users
            WHERE id = $1
            RETURNING id, name, email, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Remove every user. Used by the seed tool and the test suite.
    pub async fn delete_all(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM users").execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}
