//! Repository for user rows.

use sqlx::PgPool;

use crate::models::{CreateUser, User};

const COLUMNS: &str = "id, uid, display_name, phone, created_at, updated_at";

/// Data access for the `users` table.
pub struct UserRepo;

impl UserRepo {
    /// Fetch a user by provider uid.
    pub async fn find_by_uid(pool: &PgPool, uid: &str) -> Result<Option<User>, sqlx::Error> {
        let sql = format!("SELECT {COLUMNS} FROM users WHERE uid = $1");
        sqlx::query_as::<_, User>(&sql)
            .bind(uid)
            .fetch_optional(pool)
            .await
    }

    /// Register a user.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let sql = format!(
            r#"
            INSERT INTO users (uid, display_name, phone)
            VALUES ($1, $2, $3)
            RETURNING {COLUMNS}
            "#
        );
        sqlx::query_as::<_, User>(&sql)
            .bind(&input.uid)
            .bind(&input.display_name)
            .bind(&input.phone)
            .fetch_one(pool)
            .await
    }
}
