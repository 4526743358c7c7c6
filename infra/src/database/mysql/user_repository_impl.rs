//! MySQL implementation of the UserRepository trait.
//!
//! Concrete user persistence using MySQL through SQLx. UUIDs are stored
//! as their canonical string form and the role as its uppercase name.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use cs_core::domain::entities::user::{Role, User};
use cs_core::errors::DomainError;
use cs_core::repositories::UserRepository;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, username, email, password_hash,
           first_name, last_name, role,
           created_at, updated_at
    FROM users
"#;

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Database {
                message: format!("Failed to get id: {}", e),
            })?;

        let role_str: String = row
            .try_get("role")
            .map_err(|e| DomainError::Database {
                message: format!("Failed to get role: {}", e),
            })?;

        let role = match role_str.as_str() {
            "ADMIN" => Role::Admin,
            "MODERATOR" => Role::Moderator,
            _ => Role::User,
        };

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })?,
            username: row.try_get("username").map_err(|e| DomainError::Database {
                message: format!("Failed to get username: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Database {
                message: format!("Failed to get email: {}", e),
            })?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get password_hash: {}", e),
                })?,
            first_name: row
                .try_get("first_name")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get first_name: {}", e),
                })?,
            last_name: row
                .try_get("last_name")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get last_name: {}", e),
                })?,
            role,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get updated_at: {}", e),
                })?,
        })
    }

    async fn find_one(&self, query: String, bind: &str) -> Result<Option<User>, DomainError> {
        let result = sqlx::query(&query)
            .bind(bind)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let query = format!("{} WHERE username = ? LIMIT 1", SELECT_COLUMNS);
        self.find_one(query, username).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("{} WHERE email = ? LIMIT 1", SELECT_COLUMNS);
        self.find_one(query, email).await
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM users WHERE username = ?) AS present")
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        let present: i64 = row.try_get("present").map_err(|e| DomainError::Database {
            message: format!("Failed to get existence flag: {}", e),
        })?;
        Ok(present != 0)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM users WHERE email = ?) AS present")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        let present: i64 = row.try_get("present").map_err(|e| DomainError::Database {
            message: format!("Failed to get existence flag: {}", e),
        })?;
        Ok(present != 0)
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (id, username, email, password_hash,
                               first_name, last_name, role,
                               created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(user.role.to_string())
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to create user: {}", e),
            })?;

        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users
            SET username = ?, email = ?, password_hash = ?,
                first_name = ?, last_name = ?, role = ?, updated_at = ?
            WHERE id = ?
        "#;

        sqlx::query(query)
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(user.role.to_string())
            .bind(user.updated_at)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to update user: {}", e),
            })?;

        Ok(user)
    }
}
