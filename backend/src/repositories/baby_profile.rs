//! Baby profile repository for database operations

use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

/// Baby profile record from database
///
/// `birth_date` is the caller-supplied "dd-mm-yyyy" string, stored verbatim.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BabyProfileRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub birth_date: String,
    pub weight: Option<String>,
    pub height: Option<String>,
    pub health_issues: Option<String>,
    pub allergies: Option<String>,
    pub notes: Option<String>,
    pub age_in_months: i32,
    pub gender: Option<String>,
}

/// Input for creating or overwriting a baby profile
#[derive(Debug, Clone)]
pub struct BabyProfileInput {
    pub name: String,
    pub birth_date: String,
    pub weight: Option<String>,
    pub height: Option<String>,
    pub health_issues: Option<String>,
    pub allergies: Option<String>,
    pub notes: Option<String>,
    pub age_in_months: i32,
    pub gender: Option<String>,
}

/// Baby profile repository
pub struct BabyProfileRepository;

impl BabyProfileRepository {
    /// Insert a new profile owned by `user_id`
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        input: &BabyProfileInput,
    ) -> Result<BabyProfileRecord> {
        let profile = sqlx::query_as::<_, BabyProfileRecord>(
            r#"
            INSERT INTO baby_profiles
                (user_id, name, birth_date, weight, height, health_issues,
                 allergies, notes, age_in_months, gender)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, user_id, name, birth_date, weight, height,
                      health_issues, allergies, notes, age_in_months, gender
            "#,
        )
        .bind(user_id)
        .bind(&input.name)
        .bind(&input.birth_date)
        .bind(&input.weight)
        .bind(&input.height)
        .bind(&input.health_issues)
        .bind(&input.allergies)
        .bind(&input.notes)
        .bind(input.age_in_months)
        .bind(&input.gender)
        .fetch_one(pool)
        .await?;

        Ok(profile)
    }

    /// Find a profile by id
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<BabyProfileRecord>> {
        let profile = sqlx::query_as::<_, BabyProfileRecord>(
            r#"
            SELECT id, user_id, name, birth_date, weight, height,
                   health_issues, allergies, notes, age_in_months, gender
            FROM baby_profiles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(profile)
    }

    /// All profiles owned by a user, in store order
    pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<BabyProfileRecord>> {
        let profiles = sqlx::query_as::<_, BabyProfileRecord>(
            r#"
            SELECT id, user_id, name, birth_date, weight, height,
                   health_issues, allergies, notes, age_in_months, gender
            FROM baby_profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(profiles)
    }

    /// Overwrite all mutable fields of a profile
    ///
    /// Last writer wins: there is no version check, so two concurrent
    /// updates to the same profile interleave silently.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        input: &BabyProfileInput,
    ) -> Result<BabyProfileRecord> {
        let profile = sqlx::query_as::<_, BabyProfileRecord>(
            r#"
            UPDATE baby_profiles SET
                name = $2,
                birth_date = $3,
                weight = $4,
                height = $5,
                health_issues = $6,
                allergies = $7,
                notes = $8,
                age_in_months = $9,
                gender = $10
            WHERE id = $1
            RETURNING id, user_id, name, birth_date, weight, height,
                      health_issues, allergies, notes, age_in_months, gender
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.birth_date)
        .bind(&input.weight)
        .bind(&input.height)
        .bind(&input.health_issues)
        .bind(&input.allergies)
        .bind(&input.notes)
        .bind(input.age_in_months)
        .bind(&input.gender)
        .fetch_one(pool)
        .await?;

        Ok(profile)
    }

    /// Delete a profile by id
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM baby_profiles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }
}
