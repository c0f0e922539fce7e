//! PostgreSQL implementation of LikeRepository
//!
//! The toggle runs record mutation and counter adjustment in one
//! transaction, so the like index and the counter cannot drift apart under
//! partial failure.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::instrument;

use wall_core::entities::{Like, LikeToggle};
use wall_core::error::DomainError;
use wall_core::traits::{LikeRepository, RepoResult};
use wall_core::value_objects::Snowflake;

use crate::models::LikeModel;

use super::error::{map_db_error, message_not_found};

/// PostgreSQL implementation of LikeRepository
#[derive(Clone)]
pub struct PgLikeRepository {
    pool: PgPool,
}

impl PgLikeRepository {
    /// Create a new PgLikeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for PgLikeRepository {
    #[instrument(skip(self))]
    async fn find(
        &self,
        message_id: Snowflake,
        identity_id: Snowflake,
    ) -> RepoResult<Option<Like>> {
        let result = sqlx::query_as::<_, LikeModel>(
            r#"
            SELECT message_id, identity_id, created_at
            FROM likes
            WHERE message_id = $1 AND identity_id = $2
            "#,
        )
        .bind(message_id.into_inner())
        .bind(identity_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Like::from))
    }

    #[instrument(skip(self))]
    async fn find_message_ids_by_identity(
        &self,
        identity_id: Snowflake,
    ) -> RepoResult<Vec<Snowflake>> {
        let results = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT message_id FROM likes WHERE identity_id = $1 ORDER BY created_at
            "#,
        )
        .bind(identity_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Snowflake::new).collect())
    }

    #[instrument(skip(self))]
    async fn toggle(
        &self,
        message_id: Snowflake,
        identity_id: Snowflake,
    ) -> RepoResult<LikeToggle> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Lock the record (if any) so concurrent toggles by the same
        // identity serialize instead of double counting.
        let existing = sqlx::query_scalar::<_, i32>(
            r#"
            SELECT 1 FROM likes WHERE message_id = $1 AND identity_id = $2 FOR UPDATE
            "#,
        )
        .bind(message_id.into_inner())
        .bind(identity_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let toggle = if existing.is_some() {
            sqlx::query("DELETE FROM likes WHERE message_id = $1 AND identity_id = $2")
                .bind(message_id.into_inner())
                .bind(identity_id.into_inner())
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;

            // Guarded decrement: never drive the counter negative
            let likes = sqlx::query_scalar::<_, i64>(
                r#"
                UPDATE messages SET likes = likes - 1
                WHERE id = $1 AND likes > 0
                RETURNING likes
                "#,
            )
            .bind(message_id.into_inner())
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_db_error)?;

            match likes {
                Some(likes) => LikeToggle {
                    liked: false,
                    likes,
                },
                None => {
                    tx.rollback().await.map_err(map_db_error)?;
                    let exists =
                        sqlx::query_scalar::<_, i32>("SELECT 1 FROM messages WHERE id = $1")
                            .bind(message_id.into_inner())
                            .fetch_optional(&self.pool)
                            .await
                            .map_err(map_db_error)?;
                    return Err(if exists.is_some() {
                        DomainError::LikeUnderflow(message_id)
                    } else {
                        message_not_found(message_id)
                    });
                }
            }
        } else {
            // Counter first: a missing message surfaces as not-found before
            // the insert can trip the foreign key.
            let likes = sqlx::query_scalar::<_, i64>(
                "UPDATE messages SET likes = likes + 1 WHERE id = $1 RETURNING likes",
            )
            .bind(message_id.into_inner())
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_db_error)?;

            let Some(likes) = likes else {
                tx.rollback().await.map_err(map_db_error)?;
                return Err(message_not_found(message_id));
            };

            let inserted = sqlx::query(
                r#"
                INSERT INTO likes (message_id, identity_id, created_at)
                VALUES ($1, $2, $3)
                ON CONFLICT (message_id, identity_id) DO NOTHING
                "#,
            )
            .bind(message_id.into_inner())
            .bind(identity_id.into_inner())
            .bind(Utc::now())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

            // A concurrent toggle won the insert race: undo the increment
            // instead of double counting.
            if inserted.rows_affected() == 0 {
                tx.rollback().await.map_err(map_db_error)?;
                let likes = sqlx::query_scalar::<_, i64>("SELECT likes FROM messages WHERE id = $1")
                    .bind(message_id.into_inner())
                    .fetch_optional(&self.pool)
                    .await
                    .map_err(map_db_error)?
                    .ok_or_else(|| message_not_found(message_id))?;
                return Ok(LikeToggle { liked: true, likes });
            }

            LikeToggle { liked: true, likes }
        };

        tx.commit().await.map_err(map_db_error)?;
        Ok(toggle)
    }
}
