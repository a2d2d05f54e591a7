//! Repository for barber rows.

use sqlx::PgPool;

use crate::models::{Barber, CreateBarber};

const COLUMNS: &str = "id, uid, display_name, shop_name, phone, created_at, updated_at";

/// Data access for the `barbers` table.
pub struct BarberRepo;

impl BarberRepo {
    /// Fetch a barber by provider uid.
    pub async fn find_by_uid(pool: &PgPool, uid: &str) -> Result<Option<Barber>, sqlx::Error> {
        let sql = format!("SELECT {COLUMNS} FROM barbers WHERE uid = $1");
        sqlx::query_as::<_, Barber>(&sql)
            .bind(uid)
            .fetch_optional(pool)
            .await
    }

    /// Register a barber.
    pub async fn create(pool: &PgPool, input: &CreateBarber) -> Result<Barber, sqlx::Error> {
        let sql = format!(
            r#"
            INSERT INTO barbers (uid, display_name, shop_name, phone)
            VALUES ($1, $2, $3, $4)
            RETURNING {COLUMNS}
            "#
        );
        sqlx::query_as::<_, Barber>(&sql)
            .bind(&input.uid)
            .bind(&input.display_name)
            .bind(&input.shop_name)
            .bind(&input.phone)
            .fetch_one(pool)
            .await
    }
}
