//! Feeding time repository for database operations

use anyhow::Result;
use chrono::NaiveTime;
use sqlx::PgPool;
use uuid::Uuid;

/// Feeding entry record from database
///
/// `baby_id` is not a foreign key: entries can reference ids with no
/// matching profile row.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FeedingTimeRecord {
    pub id: Uuid,
    pub baby_id: Uuid,
    pub time: Option<NaiveTime>,
    pub amount: Option<String>,
    pub food_type: Option<String>,
    pub notes: Option<String>,
}

/// Input for creating a feeding entry
#[derive(Debug, Clone)]
pub struct FeedingTimeInput {
    pub baby_id: Uuid,
    pub time: Option<NaiveTime>,
    pub amount: Option<String>,
    pub food_type: Option<String>,
    pub notes: Option<String>,
}

/// Feeding time repository
pub struct FeedingTimeRepository;

impl FeedingTimeRepository {
    /// Insert a feeding entry
    pub async fn create(pool: &PgPool, input: &FeedingTimeInput) -> Result<FeedingTimeRecord> {
        let entry = sqlx::query_as::<_, FeedingTimeRecord>(
            r#"
            INSERT INTO feeding_times (baby_id, time, amount, food_type, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, baby_id, time, amount, food_type, notes
            "#,
        )
        .bind(input.baby_id)
        .bind(input.time)
        .bind(&input.amount)
        .bind(&input.food_type)
        .bind(&input.notes)
        .fetch_one(pool)
        .await?;

        Ok(entry)
    }

    /// All entries for one baby, in store order
    pub async fn list_by_baby(pool: &PgPool, baby_id: Uuid) -> Result<Vec<FeedingTimeRecord>> {
        let entries = sqlx::query_as::<_, FeedingTimeRecord>(
            r#"
            SELECT id, baby_id, time, amount, food_type, notes
            FROM feeding_times
            WHERE baby_id = $1
            "#,
        )
        .bind(baby_id)
        .fetch_all(pool)
        .await?;

        Ok(entries)
    }

    /// Every feeding entry across all babies (global view)
    pub async fn list_all(pool: &PgPool) -> Result<Vec<FeedingTimeRecord>> {
        let entries = sqlx::query_as::<_, FeedingTimeRecord>(
            r#"
            SELECT id, baby_id, time, amount, food_type, notes
            FROM feeding_times
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - see backend/tests/
}
