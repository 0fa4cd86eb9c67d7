use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;
use business::domain::stock::model::StockEntry;
use business::domain::stock::repository::StockRepository;

use super::entity::StockEntity;
use crate::db::query_failed;

pub struct StockRepositoryPostgres {
    pool: PgPool,
}

impl StockRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StockRepository for StockRepositoryPostgres {
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<StockEntry>, RepositoryError> {
        let entities = sqlx::query_as::<_, StockEntity>(
            r#"SELECT s.user_id, s.ingredient_id, i.name, i.unit, s.quantity, s.updated_at
            FROM user_stock s
            JOIN ingredients i ON i.id = s.ingredient_id
            WHERE s.user_id = $1
            ORDER BY i.name"#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn save(&self, entry: &StockEntry) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO user_stock (user_id, ingredient_id, quantity, updated_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id, ingredient_id) DO UPDATE SET
                quantity = EXCLUDED.quantity,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(entry.user_id.as_str())
        .bind(entry.ingredient_id)
        .bind(&entry.quantity)
        .bind(entry.updated_at)
        .execute(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(())
    }

    async fn delete(&self, user_id: &UserId, ingredient_id: Uuid) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM user_stock WHERE user_id = $1 AND ingredient_id = $2")
            .bind(user_id.as_str())
            .bind(ingredient_id)
            .execute(&self.pool)
            .await
            .map_err(query_failed)?;

        Ok(result.rows_affected())
    }
}
