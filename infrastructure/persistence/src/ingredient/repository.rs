use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::ingredient::model::Ingredient;
use business::domain::ingredient::repository::IngredientRepository;

use super::entity::IngredientEntity;
use crate::db::query_failed;

pub struct IngredientRepositoryPostgres {
    pool: PgPool,
}

impl IngredientRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IngredientRepository for IngredientRepositoryPostgres {
    async fn get_by_id(&self, id: Uuid) -> Result<Ingredient, RepositoryError> {
        let entity = sqlx::query_as::<_, IngredientEntity>(
            "SELECT id, name, unit FROM ingredients WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Ingredient>, RepositoryError> {
        let entity = sqlx::query_as::<_, IngredientEntity>(
            "SELECT id, name, unit FROM ingredients WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(entity.map(|e| e.into_domain()))
    }
}

/// Inserts a master ingredient or updates its unit, on the caller's connection
/// so it can share a transaction with the recipe lines that use it.
pub(crate) async fn upsert_ingredient(
    conn: &mut PgConnection,
    ingredient: &Ingredient,
) -> Result<(), RepositoryError> {
    sqlx::query(
        r#"INSERT INTO ingredients (id, name, unit)
        VALUES ($1, $2, $3)
        ON CONFLICT (id) DO UPDATE SET
            unit = EXCLUDED.unit"#,
    )
    .bind(ingredient.id)
    .bind(&ingredient.name)
    .bind(&ingredient.unit)
    .execute(conn)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::Duplicated,
        other => query_failed(other),
    })?;

    Ok(())
}
