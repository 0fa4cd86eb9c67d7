use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::meal_plan::model::MealPlanEntry;
use business::domain::meal_plan::repository::MealPlanRepository;
use business::domain::shared::value_objects::UserId;

use super::entity::MealPlanEntity;
use crate::db::query_failed;

pub struct MealPlanRepositoryPostgres {
    pool: PgPool,
}

impl MealPlanRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MealPlanRepository for MealPlanRepositoryPostgres {
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<MealPlanEntry>, RepositoryError> {
        let entities = sqlx::query_as::<_, MealPlanEntity>(
            r#"SELECT id, user_id, recipe_id, plan_date, meal_time, created_at
            FROM meal_plans
            WHERE user_id = $1
            ORDER BY plan_date,
                CASE meal_time WHEN 'breakfast' THEN 0 WHEN 'lunch' THEN 1 ELSE 2 END,
                created_at"#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed)?;

        entities.into_iter().map(|e| e.try_into_domain()).collect()
    }

    async fn get_by_id(&self, id: Uuid, user_id: &UserId) -> Result<MealPlanEntry, RepositoryError> {
        let entity = sqlx::query_as::<_, MealPlanEntity>(
            "SELECT id, user_id, recipe_id, plan_date, meal_time, created_at FROM meal_plans WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed)?
        .ok_or(RepositoryError::NotFound)?;

        entity.try_into_domain()
    }

    async fn save(&self, entry: &MealPlanEntry) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO meal_plans (id, user_id, recipe_id, plan_date, meal_time, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                recipe_id = EXCLUDED.recipe_id,
                plan_date = EXCLUDED.plan_date,
                meal_time = EXCLUDED.meal_time"#,
        )
        .bind(entry.id)
        .bind(entry.user_id.as_str())
        .bind(entry.recipe_id)
        .bind(entry.plan_date)
        .bind(entry.meal_time.to_string())
        .bind(entry.created_at)
        .execute(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid, user_id: &UserId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM meal_plans WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(query_failed)?;

        Ok(())
    }
}
