//! Repository for rating rows.

use chairside_core::pagination;
use chairside_core::rating::RatingQuery;
use sqlx::PgPool;

use crate::models::{NewRating, Rating, RatingChanges, ScoreCount};

const COLUMNS: &str =
    "id, user_uid, barber_uid, score, review_text, service_details, created_at, updated_at";

/// Data access for the `ratings` table.
pub struct RatingRepo;

impl RatingRepo {
    /// Create or replace the rating identified by the payload's
    /// (user_uid, barber_uid) key.
    ///
    /// The unique index resolves concurrent submissions: the second writer
    /// replaces instead of erroring. A replace keeps `created_at` and
    /// refreshes `updated_at`.
    pub async fn upsert(pool: &PgPool, new_rating: &NewRating) -> Result<Rating, sqlx::Error> {
        let sql = format!(
            r#"
            INSERT INTO ratings (user_uid, barber_uid, score, review_text, service_details)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_uid, barber_uid) DO UPDATE SET
                score = EXCLUDED.score,
                review_text = EXCLUDED.review_text,
                service_details = EXCLUDED.service_details,
                updated_at = NOW()
            RETURNING {COLUMNS}
            "#
        );
        sqlx::query_as::<_, Rating>(&sql)
            .bind(&new_rating.user_uid)
            .bind(&new_rating.barber_uid)
            .bind(new_rating.score)
            .bind(&new_rating.review_text)
            .bind(&new_rating.service_details)
            .fetch_one(pool)
            .await
    }

    /// Fetch one rating by its (user, barber) key.
    pub async fn find_by_key(
        pool: &PgPool,
        user_uid: &str,
        barber_uid: &str,
    ) -> Result<Option<Rating>, sqlx::Error> {
        let sql = format!("SELECT {COLUMNS} FROM ratings WHERE user_uid = $1 AND barber_uid = $2");
        sqlx::query_as::<_, Rating>(&sql)
            .bind(user_uid)
            .bind(barber_uid)
            .fetch_optional(pool)
            .await
    }

    /// One page of a barber's ratings, optionally bounded by score.
    ///
    /// The sort column and direction come from the allow-list on
    /// [`RatingQuery`], never from raw input. `id` breaks ties so pages
    /// stay stable when timestamps collide.
    pub async fn list_for_barber(
        pool: &PgPool,
        barber_uid: &str,
        query: &RatingQuery,
    ) -> Result<Vec<Rating>, sqlx::Error> {
        let sql = format!(
            r#"
            SELECT {COLUMNS} FROM ratings
            WHERE barber_uid = $1
              AND ($2::SMALLINT IS NULL OR score >= $2)
              AND ($3::SMALLINT IS NULL OR score <= $3)
            ORDER BY {col} {dir}, id {dir}
            LIMIT $4 OFFSET $5
            "#,
            col = query.sort_field.as_column(),
            dir = query.sort_order.as_sql(),
        );
        sqlx::query_as::<_, Rating>(&sql)
            .bind(barber_uid)
            .bind(query.min_score)
            .bind(query.max_score)
            .bind(query.limit)
            .bind(pagination::skip(query.page, query.limit))
            .fetch_all(pool)
            .await
    }

    /// Count the rows [`Self::list_for_barber`] would page over.
    pub async fn count_for_barber(
        pool: &PgPool,
        barber_uid: &str,
        query: &RatingQuery,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM ratings
            WHERE barber_uid = $1
              AND ($2::SMALLINT IS NULL OR score >= $2)
              AND ($3::SMALLINT IS NULL OR score <= $3)
            "#,
        )
        .bind(barber_uid)
        .bind(query.min_score)
        .bind(query.max_score)
        .fetch_one(pool)
        .await
    }

    /// Grouped score counts over the same filter as
    /// [`Self::list_for_barber`], feeding the statistics block.
    pub async fn score_counts_for_barber(
        pool: &PgPool,
        barber_uid: &str,
        query: &RatingQuery,
    ) -> Result<Vec<ScoreCount>, sqlx::Error> {
        sqlx::query_as::<_, ScoreCount>(
            r#"
            SELECT score, COUNT(*)::BIGINT AS count FROM ratings
            WHERE barber_uid = $1
              AND ($2::SMALLINT IS NULL OR score >= $2)
              AND ($3::SMALLINT IS NULL OR score <= $3)
            GROUP BY score
            "#,
        )
        .bind(barber_uid)
        .bind(query.min_score)
        .bind(query.max_score)
        .fetch_all(pool)
        .await
    }

    /// One page of the ratings a user has written, across all barbers.
    /// Score bounds do not apply here.
    pub async fn list_for_user(
        pool: &PgPool,
        user_uid: &str,
        query: &RatingQuery,
    ) -> Result<Vec<Rating>, sqlx::Error> {
        let sql = format!(
            r#"
            SELECT {COLUMNS} FROM ratings
            WHERE user_uid = $1
            ORDER BY {col} {dir}, id {dir}
            LIMIT $2 OFFSET $3
            "#,
            col = query.sort_field.as_column(),
            dir = query.sort_order.as_sql(),
        );
        sqlx::query_as::<_, Rating>(&sql)
            .bind(user_uid)
            .bind(query.limit)
            .bind(pagination::skip(query.page, query.limit))
            .fetch_all(pool)
            .await
    }

    /// Count all ratings a user has written.
    pub async fn count_for_user(pool: &PgPool, user_uid: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM ratings WHERE user_uid = $1")
            .bind(user_uid)
            .fetch_one(pool)
            .await
    }

    /// Apply partial changes to the rating at (user, barber).
    ///
    /// Returns `None` when no such rating exists; this never creates one.
    /// `updated_at` is always refreshed.
    pub async fn update(
        pool: &PgPool,
        user_uid: &str,
        barber_uid: &str,
        changes: &RatingChanges,
    ) -> Result<Option<Rating>, sqlx::Error> {
        let sql = format!(
            r#"
            UPDATE ratings SET
                score = COALESCE($3, score),
                review_text = CASE WHEN $4::BOOLEAN THEN $5 ELSE review_text END,
                service_details = COALESCE($6, service_details),
                updated_at = NOW()
            WHERE user_uid = $1 AND barber_uid = $2
            RETURNING {COLUMNS}
            "#
        );
        sqlx::query_as::<_, Rating>(&sql)
            .bind(user_uid)
            .bind(barber_uid)
            .bind(changes.score)
            .bind(changes.review_text.is_some())
            .bind(changes.review_text.clone().flatten())
            .bind(&changes.service_details)
            .fetch_optional(pool)
            .await
    }

    /// Delete the rating at (user, barber), returning the removed row.
    pub async fn delete_by_key(
        pool: &PgPool,
        user_uid: &str,
        barber_uid: &str,
    ) -> Result<Option<Rating>, sqlx::Error> {
        let sql =
            format!("DELETE FROM ratings WHERE user_uid = $1 AND barber_uid = $2 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Rating>(&sql)
            .bind(user_uid)
            .bind(barber_uid)
            .fetch_optional(pool)
            .await
    }
}
